//! Command `run`: ejecuta un comando de shell dentro del executor del job.

use serde::Serialize;
use serde_json::{Map, Value};

use ciforge_core::{Fragment, Generate, GenerateError};

/// Parámetros del step `run`. Sólo `command` es obligatorio y se exige en
/// construcción; el resto se omite del fragmento cuando no fue asignado.
#[derive(Clone, Serialize)]
pub struct Run {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shell: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    working_directory: Option<String>,
}

impl Run {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into(),
               name: None,
               shell: None,
               working_directory: None }
    }

    /// Etiqueta legible del step en la UI del pipeline.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }
}

impl Generate for Run {
    fn generate(&self) -> Result<Fragment, GenerateError> {
        // Serializamos los params en orden de declaración y los anidamos
        // bajo la clave del command.
        let params = serde_json::to_value(self).map_err(|e| GenerateError::Internal(e.to_string()))?;
        let mut fragment = Map::new();
        fragment.insert("run".to_string(), params);
        Ok(Value::Object(fragment))
    }
}
