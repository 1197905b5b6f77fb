//! Command `checkout`: trae el código fuente al working directory del job.

use serde_json::{json, Value};

use ciforge_core::{Fragment, Generate, GenerateError};

/// Sin `path` se emite la forma corta (el escalar `"checkout"`), que es la
/// habitual en los documentos del esquema destino.
#[derive(Clone, Default)]
pub struct Checkout {
    path: Option<String>,
}

impl Checkout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directorio destino del checkout, relativo al working directory.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl Generate for Checkout {
    fn generate(&self) -> Result<Fragment, GenerateError> {
        let fragment = match &self.path {
            None => Value::String("checkout".to_string()),
            Some(path) => json!({ "checkout": { "path": path } }),
        };
        Ok(fragment)
    }
}
