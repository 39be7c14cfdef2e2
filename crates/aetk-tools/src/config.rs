//! Configuration loading and typed config structures for the `aetk` tool.
//!
//! The canonical configuration lives in `aetk-config.yaml` at the project
//! root. Every section and key is optional; missing values fall back to the
//! defaults below. Command-line arguments override whatever the file says.

use std::path::Path;

use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "aetk-config.yaml";

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "AETK_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level tool configuration.
///
/// Mirrors the structure of `aetk-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToolsConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Extension renamer defaults.
    #[serde(default)]
    pub rename: RenameConfig,

    /// Bindings dispatcher generator settings.
    #[serde(default)]
    pub bindings: BindingsConfig,
}

impl ToolsConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `AETK_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Load from `path` if given, else from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a chosen file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    let mut config = Self::default();
                    config.logging.apply_env_overrides();
                    Ok(config)
                }
            }
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG`
    /// takes precedence at subscriber initialization.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Override the level with `AETK_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(LOG_LEVEL_ENV) {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Defaults for the `rename` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenameConfig {
    /// Extension to rename from, without the leading dot.
    #[serde(default = "default_from_ext")]
    pub from_ext: String,

    /// Extension to rename to, without the leading dot.
    #[serde(default = "default_to_ext")]
    pub to_ext: String,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            from_ext: default_from_ext(),
            to_ext: default_to_ext(),
        }
    }
}

/// Settings for the `bindgen` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindingsConfig {
    /// Regex with one capture group holding the binding function name.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Header included at the top of the generated file.
    #[serde(default = "default_include")]
    pub include: String,

    /// Name of the generated dispatcher function.
    #[serde(default = "default_dispatcher")]
    pub dispatcher: String,

    /// Parameter list of the dispatcher, forwarded to every call by its
    /// last identifier.
    #[serde(default = "default_module_param")]
    pub module_param: String,

    /// Output file written when `--output` is not given.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            include: default_include(),
            dispatcher: default_dispatcher(),
            module_param: default_module_param(),
            output: default_output(),
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_from_ext() -> String {
    String::from("hpp")
}

fn default_to_ext() -> String {
    String::from("cpp")
}

fn default_pattern() -> String {
    String::from(r"void (bind_[a-zA-Z_]+)\(py::module &m\)")
}

fn default_include() -> String {
    String::from("bindings.hpp")
}

fn default_dispatcher() -> String {
    String::from("bind_all")
}

fn default_module_param() -> String {
    String::from("py::module &m")
}

fn default_output() -> String {
    String::from("bindings.cpp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ToolsConfig::default();
        assert_eq!(config.rename.from_ext, "hpp");
        assert_eq!(config.rename.to_ext, "cpp");
        assert_eq!(config.bindings.dispatcher, "bind_all");
        assert_eq!(config.bindings.include, "bindings.hpp");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
logging:
  level: "debug"

rename:
  from_ext: "h"
  to_ext: "cc"

bindings:
  pattern: 'void (register_[a-z_]+)\(Module &mod\)'
  include: "register.hpp"
  dispatcher: "register_all"
  module_param: "Module &mod"
  output: "register.cpp"
"#;

        let config = ToolsConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.rename.from_ext, "h");
        assert_eq!(config.rename.to_ext, "cc");
        assert_eq!(config.bindings.dispatcher, "register_all");
        assert_eq!(config.bindings.module_param, "Module &mod");
        assert_eq!(config.bindings.output, "register.cpp");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "rename:\n  to_ext: cxx\n";
        let config = ToolsConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        // to_ext is overridden
        assert_eq!(config.rename.to_ext, "cxx");
        // Everything else uses defaults
        assert_eq!(config.rename.from_ext, "hpp");
        assert_eq!(config.bindings, BindingsConfig::default());
    }

    #[test]
    fn parse_empty_yaml() {
        let config = ToolsConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn parse_invalid_yaml() {
        let config = ToolsConfig::parse("rename: [unterminated");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn log_level_env_override() {
        let mut logging = LoggingConfig::default();
        logging.apply_overrides(|key| (key == LOG_LEVEL_ENV).then(|| String::from("trace")));
        assert_eq!(logging.level, "trace");

        // Unset variable leaves the configured level alone
        let mut logging = LoggingConfig {
            level: String::from("warn"),
        };
        logging.apply_overrides(|_| None);
        assert_eq!(logging.level, "warn");
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            let config = ToolsConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
