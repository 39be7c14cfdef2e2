//! Binding dispatcher generator.
//!
//! Scans a C++ header for binding function declarations and renders a
//! source file with one dispatcher that calls each binding in declaration
//! order. The declaration pattern and the dispatcher's shape come from
//! [`BindingsConfig`]; the output is rendered with `minijinja`.

use std::path::Path;

use minijinja::{Environment, context};
use regex::Regex;
use tracing::{info, warn};

use crate::config::BindingsConfig;
use crate::error::ToolsError;

/// Template for the generated dispatcher source file.
const DISPATCHER_TEMPLATE: &str = "#include \"{{ include }}\"\n\
\n\
void {{ dispatcher }}({{ module_param }}) {\n\
{% for name in bindings %}    {{ name }}({{ module_arg }});\n\
{% endfor %}}\n";

/// Extracts binding names and renders the dispatcher.
pub struct DispatcherGenerator {
    env: Environment<'static>,
    pattern: Regex,
    config: BindingsConfig,
}

impl DispatcherGenerator {
    /// Compile the configured pattern and load the dispatcher template.
    ///
    /// # Errors
    ///
    /// Returns [`ToolsError::Regex`] for an invalid pattern,
    /// [`ToolsError::MissingCaptureGroup`] when the pattern cannot yield a
    /// function name, and [`ToolsError::Template`] if the template fails
    /// to load.
    pub fn new(config: &BindingsConfig) -> Result<Self, ToolsError> {
        let pattern = Regex::new(&config.pattern)?;
        if pattern.captures_len() < 2 {
            return Err(ToolsError::MissingCaptureGroup {
                pattern: config.pattern.clone(),
            });
        }

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template("dispatcher.cpp", DISPATCHER_TEMPLATE)?;

        Ok(Self {
            env,
            pattern,
            config: config.clone(),
        })
    }

    /// Binding function names declared in `source`, in declaration order.
    pub fn extract(&self, source: &str) -> Vec<String> {
        self.pattern
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_owned())
            .collect()
    }

    /// Render the dispatcher calling each of `bindings` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ToolsError::Template`] if rendering fails.
    pub fn render(&self, bindings: &[String]) -> Result<String, ToolsError> {
        let rendered = self.env.get_template("dispatcher.cpp")?.render(context! {
            include => self.config.include.as_str(),
            dispatcher => self.config.dispatcher.as_str(),
            module_param => self.config.module_param.as_str(),
            module_arg => module_arg(&self.config.module_param),
            bindings => bindings,
        })?;
        Ok(rendered)
    }

    /// Read `input`, render the dispatcher, and write it to `output`.
    ///
    /// Returns the binding names found. A header with no matching
    /// declarations still produces a dispatcher, with an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`ToolsError::Io`] if either file cannot be accessed, or
    /// [`ToolsError::Template`] if rendering fails.
    pub fn generate(&self, input: &Path, output: &Path) -> Result<Vec<String>, ToolsError> {
        let source = std::fs::read_to_string(input).map_err(|e| ToolsError::io(input, e))?;
        let bindings = self.extract(&source);
        if bindings.is_empty() {
            warn!(input = %input.display(), "no binding declarations found");
        }

        let rendered = self.render(&bindings)?;
        std::fs::write(output, rendered).map_err(|e| ToolsError::io(output, e))?;
        info!(
            input = %input.display(),
            output = %output.display(),
            bindings = bindings.len(),
            "dispatcher generated"
        );
        Ok(bindings)
    }
}

/// The argument forwarded to each binding: the last identifier of the
/// dispatcher's parameter list (`py::module &m` gives `m`).
fn module_arg(module_param: &str) -> &str {
    module_param
        .trim_end()
        .rsplit(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()
        .unwrap_or(module_param)
}
