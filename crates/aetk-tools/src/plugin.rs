//! Plugin description loading.
//!
//! A plugin description is a YAML (or JSON) document with a name, a
//! description, and a list of parameter records. Each record goes through
//! [`PluginConfig::add_parameter_record`], so an unrecognized parameter
//! type stops the load.

use std::path::Path;

use aetk_model::{PluginConfig, Record};
use serde::Deserialize;

use crate::error::ToolsError;

/// On-disk layout of a plugin description.
#[derive(Debug, Deserialize)]
struct PluginFile {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameters: Vec<Record>,
}

/// Build a plugin configuration from YAML text.
///
/// # Errors
///
/// Returns [`ToolsError::Yaml`] for malformed YAML and
/// [`ToolsError::Plugin`] for an unsupported or malformed parameter.
pub fn parse_plugin(yaml: &str) -> Result<PluginConfig, ToolsError> {
    let file: PluginFile = serde_yml::from_str(yaml)?;
    let mut config = PluginConfig::new(file.name, file.description);
    for record in file.parameters {
        config.add_parameter_record(record)?;
    }
    Ok(config)
}

/// Read a plugin description file.
///
/// # Errors
///
/// Returns [`ToolsError::Io`] if the file cannot be read, otherwise
/// whatever [`parse_plugin`] returns.
pub fn load_plugin(path: &Path) -> Result<PluginConfig, ToolsError> {
    let text = std::fs::read_to_string(path).map_err(|e| ToolsError::io(path, e))?;
    parse_plugin(&text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aetk_model::ParamError;
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn parses_all_parameter_kinds() {
        let yaml = r##"
name: Glow
description: Soft glow around bright areas
parameters:
  - { name: Radius, type: float, default: 0.25, description: Glow radius }
  - { name: Passes, type: int, default: 3, min: 1, max: 8 }
  - { name: Enabled, type: bool, default: true }
  - { name: Tint, type: color, default: "#ffcc00" }
  - { name: Mode, type: choice, default: screen, options: [screen, add] }
"##;
        let config = parse_plugin(yaml).unwrap();
        assert_eq!(config.name, "Glow");
        assert_eq!(config.parameters().len(), 5);

        let rendered = Value::Object(config.config());
        assert_eq!(rendered["parameters"][1]["max"], json!(8));
        assert_eq!(rendered["parameters"][4]["options"], json!(["screen", "add"]));
    }

    #[test]
    fn unsupported_parameter_stops_load() {
        let yaml = "name: Mask\nparameters:\n  - { name: Path, type: bezier, default: null }\n";
        let err = parse_plugin(yaml).unwrap_err();
        assert!(matches!(
            err,
            ToolsError::Plugin(ParamError::UnsupportedParameter { ref type_name }) if type_name == "bezier"
        ));
    }

    #[test]
    fn missing_name_is_yaml_error() {
        assert!(matches!(parse_plugin("parameters: []"), Err(ToolsError::Yaml(_))));
    }
}
