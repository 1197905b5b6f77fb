//! Job: raíz de composición del núcleo.
//!
//! Un `Job` posee exactamente un binding de executor y una secuencia
//! ordenada de steps (el orden de inserción es el orden de generación).
//! Su contenido es la unión disjunta de `{"steps": [...]}` con el fragmento
//! del executor; su documento es ese contenido bajo la clave de su propio
//! nombre. El job no valida unicidad de nombre ni resuelve handles: ambos
//! son responsabilidad del registro externo.

use serde_json::{Map, Value};

use crate::constants::STEPS_KEY;
use crate::errors::GenerateError;
use crate::executor::ExecutorBinding;
use crate::generate::{Fragment, Generate};
use crate::merge::shallow_merge_into;

pub struct Job {
    name: String,
    executor: ExecutorBinding,
    steps: Vec<Box<dyn Generate>>,
}

impl Job {
    /// Crea un job sin steps; se puebla después con `add_step`.
    pub fn new(name: impl Into<String>, executor: ExecutorBinding) -> Self {
        Self { name: name.into(),
               executor,
               steps: Vec::new() }
    }

    /// Crea un job pre-poblado con una secuencia de steps ya construida.
    pub fn with_steps(name: impl Into<String>, executor: ExecutorBinding, steps: Vec<Box<dyn Generate>>) -> Self {
        Self { name: name.into(),
               executor,
               steps }
    }

    pub fn name(&self) -> &str { &self.name }

    /// Binding del executor. El agregador lo consulta para resolver y
    /// validar referencias reutilizables.
    pub fn executor(&self) -> &ExecutorBinding { &self.executor }

    /// Añade un step al final de la secuencia. Encadenable; nunca deduplica
    /// ni reordena: llamadas posteriores extienden estrictamente el orden.
    pub fn add_step(&mut self, step: impl Generate + 'static) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Genera el contenido del job: los fragmentos de cada step en orden de
    /// inserción bajo `steps` (lista vacía si no hay ninguno, nunca un campo
    /// ausente), seguidos de los campos del executor en el orden en que su
    /// fragmento los produjo.
    ///
    /// Cualquier fallo de un colaborador se propaga sin modificar; no se
    /// devuelve jamás un contenido parcial.
    pub fn generate_contents(&self) -> Result<Fragment, GenerateError> {
        let mut generated_steps = Vec::with_capacity(self.steps.len());
        for step in self.steps.iter() {
            generated_steps.push(step.generate()?);
        }

        let executor_fields = match self.executor.generate()? {
            Value::Object(fields) => fields,
            _ => return Err(GenerateError::ExecutorNotObject),
        };

        let mut contents = Map::new();
        contents.insert(STEPS_KEY.to_string(), Value::Array(generated_steps));
        shallow_merge_into(&mut contents, &executor_fields)?;
        Ok(Value::Object(contents))
    }
}

impl Generate for Job {
    /// Documento del job: su contenido bajo la única clave `name`.
    fn generate(&self) -> Result<Fragment, GenerateError> {
        let mut document = Map::new();
        document.insert(self.name.clone(), self.generate_contents()?);
        Ok(Value::Object(document))
    }
}
