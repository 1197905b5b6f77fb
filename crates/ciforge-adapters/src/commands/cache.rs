//! Commands de caché: `restore_cache` y `save_cache`.
//!
//! Ambos tienen campos obligatorios que se pueblan de forma incremental;
//! si al generar siguen vacíos, el fallo es `MissingField` y el job que los
//! contiene no produce documento alguno (fail-fast).

use serde_json::json;

use ciforge_core::{Fragment, Generate, GenerateError};

/// Restaura una caché previamente guardada, probando las claves en orden.
#[derive(Clone, Default)]
pub struct RestoreCache {
    keys: Vec<String>,
}

impl RestoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade una clave candidata; el orden de inserción es el orden de
    /// búsqueda.
    pub fn add_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.keys.push(key.into());
        self
    }
}

impl Generate for RestoreCache {
    fn generate(&self) -> Result<Fragment, GenerateError> {
        if self.keys.is_empty() {
            return Err(GenerateError::MissingField { component: "restore_cache", field: "keys" });
        }
        Ok(json!({ "restore_cache": { "keys": self.keys } }))
    }
}

/// Guarda rutas del working directory bajo una clave de caché.
#[derive(Clone)]
pub struct SaveCache {
    key: String,
    paths: Vec<String>,
}

impl SaveCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(),
               paths: Vec::new() }
    }

    pub fn add_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.paths.push(path.into());
        self
    }
}

impl Generate for SaveCache {
    fn generate(&self) -> Result<Fragment, GenerateError> {
        if self.key.is_empty() {
            return Err(GenerateError::MissingField { component: "save_cache", field: "key" });
        }
        if self.paths.is_empty() {
            return Err(GenerateError::MissingField { component: "save_cache", field: "paths" });
        }
        Ok(json!({ "save_cache": { "paths": self.paths, "key": self.key } }))
    }
}
