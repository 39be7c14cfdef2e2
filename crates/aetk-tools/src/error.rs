//! Error types for the `aetk` binary.
//!
//! [`ToolsError`] wraps every failure a subcommand can hit so each one can
//! propagate with `?` up to `main`.

use std::path::PathBuf;

/// Errors raised by the `aetk` subcommands.
#[derive(Debug, thiserror::Error)]
pub enum ToolsError {
    /// A filesystem operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being read, written, or renamed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured binding pattern is not a valid regex.
    #[error("invalid binding pattern: {0}")]
    Regex(#[from] regex::Error),

    /// The binding pattern has no capture group for the function name.
    #[error("binding pattern must contain a capture group: {pattern}")]
    MissingCaptureGroup {
        /// The offending pattern.
        pattern: String,
    },

    /// Rendering the dispatcher template failed.
    #[error("template render error: {0}")]
    Template(#[from] minijinja::Error),

    /// A record could not be decoded into an entity.
    #[error("model error: {0}")]
    Model(#[from] aetk_model::ModelError),

    /// A plugin description could not be loaded.
    #[error("plugin error: {0}")]
    Plugin(#[from] aetk_model::ParamError),

    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// A YAML plugin description could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

impl ToolsError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
