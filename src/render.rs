//! Rendering model and template view
//!
//! [`Model`] collects named variables for rendering: lazily evaluated
//! providers registered up front, plus explicit values that override them.
//! The variable mapping is explicit by construction; no runtime reflection
//! is involved. [`TemplateView`] renders a template file against a model.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while rendering a view.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

type Provider = Box<dyn Fn() -> Value>;

/// A generic model for rendering, independent of the templating
/// technology.
pub struct Model {
    providers: IndexMap<String, Provider>,
    explicit_vars: IndexMap<String, Value>,
    cached_vars: Option<IndexMap<String, Value>>,
    cache_vars: bool,
}

impl Model {
    /// Creates the model. With `cache_vars`, the first call to
    /// [`find_vars`](Model::find_vars) caches its result and later calls
    /// return the cached mapping without re-running the providers.
    pub fn new(cache_vars: bool) -> Self {
        Self {
            providers: IndexMap::new(),
            explicit_vars: IndexMap::new(),
            cached_vars: None,
            cache_vars,
        }
    }

    /// Registers a provider computing the variable `name` on demand.
    pub fn provide(&mut self, name: impl Into<String>, provider: impl Fn() -> Value + 'static) {
        self.providers.insert(name.into(), Box::new(provider));
    }

    /// Sets a variable explicitly. Explicit variables override providers
    /// of the same name.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.explicit_vars.insert(name.into(), value.into());
    }

    /// Returns the model's variables: every provider's value, in
    /// registration order, overlaid with the explicit variables.
    pub fn find_vars(&mut self) -> IndexMap<String, Value> {
        if self.cache_vars
            && let Some(cached) = &self.cached_vars
        {
            return cached.clone();
        }

        let mut result = IndexMap::new();

        for (name, provider) in &self.providers {
            result.insert(name.clone(), provider());
        }

        for (name, value) in &self.explicit_vars {
            result.insert(name.clone(), value.clone());
        }

        if self.cache_vars {
            self.cached_vars = Some(result.clone());
        }

        result
    }
}

/// A view rendering a template file against a model.
pub struct TemplateView {
    template_path: PathBuf,
}

impl TemplateView {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Loads the template file and renders it with the model's variables
    /// as context.
    pub fn render(&self, model: &mut Model) -> Result<String, RenderError> {
        let source = fs::read_to_string(&self.template_path)?;

        let mut env = minijinja::Environment::new();
        env.add_template("view", &source)?;

        let template = env.get_template("view")?;
        Ok(template.render(model.find_vars())?)
    }
}
