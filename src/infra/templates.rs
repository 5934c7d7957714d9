//! Template rendering backed by minijinja.
//!
//! Widgets never talk to minijinja directly; they receive a
//! [`TemplateRenderer`] so rendering can be swapped or mocked.

use std::fs;
use std::path::Path;

use minijinja::{Environment, Value};

use crate::config::TEMPLATE_ADDRESS;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Templates compiled into the binary, keyed by template name.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[(
    TEMPLATE_ADDRESS,
    include_str!("../../templates/widgets/address.html"),
)];

/// Rendering capability injected into widgets.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the named template with the given context variables.
    fn render(&self, template: &str, context: Value) -> AppResult<String>;
}

/// minijinja environment holding the widget templates.
///
/// Templates ending in `.html` are auto-escaped.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with the built-in templates.
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        for &(name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Create an engine where files in `dir` replace built-in templates
    /// of the same name. Missing files keep the built-in version.
    pub fn with_overrides(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();
        let mut engine = Self::new()?;

        for &(name, _) in BUILTIN_TEMPLATES {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            let source = fs::read_to_string(&path).map_err(|e| {
                AppError::internal(format!("Failed to read template {}: {}", path.display(), e))
            })?;
            engine.env.add_template_owned(name.to_string(), source)?;
            tracing::debug!(template = name, path = %path.display(), "Template overridden");
        }

        Ok(engine)
    }

    /// Build an engine from configuration.
    pub fn from_config(config: &crate::config::Config) -> AppResult<Self> {
        match &config.template_dir {
            Some(dir) => Self::with_overrides(dir),
            None => Self::new(),
        }
    }
}

impl TemplateRenderer for TemplateEngine {
    fn render(&self, template: &str, context: Value) -> AppResult<String> {
        let tmpl = self.env.get_template(template)?;
        let html = tmpl.render(context)?;
        tracing::debug!(template, bytes = html.len(), "Template rendered");
        Ok(html)
    }
}
