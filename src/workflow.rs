//! Workflows: orquestación declarativa de jobs por nombre.
//!
//! Un workflow no posee jobs; sólo los referencia. La validación de que
//! cada referencia apunte a un job declarado ocurre en el agregador
//! (`Config`), no aquí.

use serde_json::{json, Map, Value};

use ciforge_core::{Fragment, Generate, GenerateError};

pub struct Workflow {
    name: String,
    jobs: Vec<String>,
}

impl Workflow {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               jobs: Vec::new() }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn jobs(&self) -> &[String] { &self.jobs }

    /// Añade una referencia a un job. Encadenable; el orden de inserción es
    /// el orden de ejecución declarado.
    pub fn add_job(&mut self, job: impl Into<String>) -> &mut Self {
        self.jobs.push(job.into());
        self
    }

    /// Contenido del workflow sin la envoltura de su nombre; el agregador
    /// lo cuelga bajo la clave correspondiente.
    pub fn generate_contents(&self) -> Result<Fragment, GenerateError> {
        Ok(json!({ "jobs": self.jobs }))
    }
}

impl Generate for Workflow {
    fn generate(&self) -> Result<Fragment, GenerateError> {
        let mut document = Map::new();
        document.insert(self.name.clone(), self.generate_contents()?);
        Ok(Value::Object(document))
    }
}
