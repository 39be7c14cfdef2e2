//! Effect-plugin parameter descriptions and the plugin configuration
//! registry.
//!
//! A [`Parameter`] describes one control exposed by an effect plugin: its
//! name, description, default value, and a [`ParameterKind`] carrying the
//! kind-specific data (numeric range or choice options). A
//! [`PluginConfig`] collects parameter records, renders the plugin's
//! configuration mapping, and runs an optional processing function.
//!
//! Parameters can be built in code or accepted as untyped records read
//! from a YAML or JSON plugin description.

use core::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::codec::Record;

/// Errors that can occur while building or running a plugin configuration.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// A parameter record names a type that is not a recognized kind.
    #[error("unsupported parameter type: {type_name}")]
    UnsupportedParameter {
        /// The `type` found in the record, or `<missing>`.
        type_name: String,
    },

    /// A parameter record has a recognized type but a malformed body.
    #[error("malformed parameter record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// [`PluginConfig::execute`] was called before a processing function was set.
    #[error("processing function not set")]
    ProcessingNotSet,
}

/// The kind of a parameter, with kind-specific data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterKind {
    /// A floating-point slider.
    Float {
        /// Lower bound (default 0.0).
        #[serde(default = "default_float_min")]
        min: f64,
        /// Upper bound (default 1.0).
        #[serde(default = "default_float_max")]
        max: f64,
    },
    /// An integer slider.
    Int {
        /// Lower bound (default 0).
        #[serde(default)]
        min: i64,
        /// Upper bound (default 100).
        #[serde(default = "default_int_max")]
        max: i64,
    },
    /// A checkbox.
    Bool,
    /// A color picker.
    Color,
    /// A popup menu.
    Choice {
        /// Menu entries, in display order.
        options: Vec<String>,
    },
}

impl ParameterKind {
    /// Every recognized `type` name.
    pub const TYPE_NAMES: [&'static str; 5] = ["float", "int", "bool", "color", "choice"];

    /// The `type` name written to records.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Float { .. } => "float",
            Self::Int { .. } => "int",
            Self::Bool => "bool",
            Self::Color => "color",
            Self::Choice { .. } => "choice",
        }
    }
}

/// One control exposed by an effect plugin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    /// Parameter name shown in the effect controls.
    pub name: String,
    /// Tooltip text.
    #[serde(default)]
    pub description: String,
    /// Initial value.
    #[serde(rename = "default")]
    pub default_value: Value,
    /// Kind-specific data.
    #[serde(flatten)]
    pub kind: ParameterKind,
}

impl Parameter {
    /// A float slider over `0.0..=1.0`.
    pub fn float(name: impl Into<String>, default: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_value: Value::from(default),
            kind: ParameterKind::Float {
                min: default_float_min(),
                max: default_float_max(),
            },
        }
    }

    /// An integer slider over `0..=100`.
    pub fn int(name: impl Into<String>, default: i64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_value: Value::from(default),
            kind: ParameterKind::Int {
                min: 0,
                max: default_int_max(),
            },
        }
    }

    /// A checkbox.
    pub fn boolean(name: impl Into<String>, default: bool, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_value: Value::from(default),
            kind: ParameterKind::Bool,
        }
    }

    /// A color picker. The default is stored as given.
    pub fn color(
        name: impl Into<String>,
        default: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_value: default.into(),
            kind: ParameterKind::Color,
        }
    }

    /// A popup menu over `options`.
    pub fn choice(
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_value: Value::from(default.into()),
            kind: ParameterKind::Choice { options },
        }
    }

    /// Replace the bounds of a float slider. Other kinds are returned unchanged.
    #[must_use]
    pub fn with_float_range(mut self, min: f64, max: f64) -> Self {
        if let ParameterKind::Float { .. } = self.kind {
            self.kind = ParameterKind::Float { min, max };
        }
        self
    }

    /// Replace the bounds of an integer slider. Other kinds are returned unchanged.
    #[must_use]
    pub fn with_int_range(mut self, min: i64, max: i64) -> Self {
        if let ParameterKind::Int { .. } = self.kind {
            self.kind = ParameterKind::Int { min, max };
        }
        self
    }

    /// Render the parameter as a record.
    ///
    /// The base keys are `name`, `type`, `default`, and `description`.
    /// Numeric kinds add `min` and `max`; choices add `options`.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("name".into(), Value::from(self.name.as_str()));
        record.insert("type".into(), Value::from(self.kind.type_name()));
        record.insert("default".into(), self.default_value.clone());
        record.insert("description".into(), Value::from(self.description.as_str()));
        match &self.kind {
            ParameterKind::Float { min, max } => {
                record.insert("min".into(), Value::from(*min));
                record.insert("max".into(), Value::from(*max));
            }
            ParameterKind::Int { min, max } => {
                record.insert("min".into(), Value::from(*min));
                record.insert("max".into(), Value::from(*max));
            }
            ParameterKind::Choice { options } => {
                record.insert(
                    "options".into(),
                    Value::Array(options.iter().map(|o| Value::from(o.as_str())).collect()),
                );
            }
            ParameterKind::Bool | ParameterKind::Color => {}
        }
        record
    }
}

/// Processing callback run by [`PluginConfig::execute`].
pub type ProcessingFn = Box<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Registry of an effect plugin's parameters and processing function.
pub struct PluginConfig {
    /// Plugin name.
    pub name: String,
    /// Plugin description.
    pub description: String,
    parameters: Vec<Record>,
    processing: Option<ProcessingFn>,
}

impl PluginConfig {
    /// Create a configuration with no parameters and no processing function.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            processing: None,
        }
    }

    /// Append a parameter's record.
    pub fn add_parameter(&mut self, parameter: &Parameter) {
        tracing::debug!(
            plugin = self.name.as_str(),
            parameter = parameter.name.as_str(),
            kind = parameter.kind.type_name(),
            "parameter added"
        );
        self.parameters.push(parameter.to_record());
    }

    /// Append an untyped parameter record after checking its `type`.
    ///
    /// The stored record is normalized: omitted bounds are filled with
    /// their defaults. Nothing is appended on error.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::UnsupportedParameter`] when `type` is absent or
    /// not one of [`ParameterKind::TYPE_NAMES`], and [`ParamError::Malformed`]
    /// when the rest of the record does not fit that type.
    pub fn add_parameter_record(&mut self, record: Record) -> Result<(), ParamError> {
        match record.get("type").and_then(Value::as_str) {
            Some(type_name) if ParameterKind::TYPE_NAMES.contains(&type_name) => {}
            other => {
                return Err(ParamError::UnsupportedParameter {
                    type_name: other.unwrap_or("<missing>").to_owned(),
                });
            }
        }
        let parameter: Parameter = serde_json::from_value(Value::Object(record))?;
        self.add_parameter(&parameter);
        Ok(())
    }

    /// Parameter records, in insertion order.
    pub fn parameters(&self) -> &[Record] {
        &self.parameters
    }

    /// Install the processing function, replacing any previous one.
    pub fn set_processing_function<F>(&mut self, function: F)
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.processing = Some(Box::new(function));
    }

    /// Whether a processing function is installed.
    pub const fn has_processing_function(&self) -> bool {
        self.processing.is_some()
    }

    /// Render `{"name", "description", "parameters"}`.
    pub fn config(&self) -> Record {
        let mut record = Record::new();
        record.insert("name".into(), Value::from(self.name.as_str()));
        record.insert("description".into(), Value::from(self.description.as_str()));
        record.insert(
            "parameters".into(),
            Value::Array(self.parameters.iter().cloned().map(Value::Object).collect()),
        );
        record
    }

    /// Run the processing function with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::ProcessingNotSet`] if no function is installed.
    pub fn execute(&self, args: &[Value]) -> Result<Value, ParamError> {
        let function = self.processing.as_ref().ok_or(ParamError::ProcessingNotSet)?;
        Ok(function(args))
    }
}

impl fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginConfig")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("has_processing_function", &self.processing.is_some())
            .finish()
    }
}

const fn default_float_min() -> f64 {
    0.0
}

const fn default_float_max() -> f64 {
    1.0
}

const fn default_int_max() -> i64 {
    100
}
