//! Documento raíz y registro de declaraciones.
//!
//! `Config` es el agregador externo del protocolo de generación: mantiene
//! el registro de executors reutilizables (contra el que se validan los
//! handles de los jobs), el mapa ordenado de jobs y los workflows. Su
//! `generate` produce el documento completo reutilizando el contenido
//! intermedio de cada job (`generate_contents`) bajo su nombre, sin
//! re-derivar la envoltura.
//!
//! Las referencias se validan al declarar, no al generar: un job que
//! apunta a un executor no declarado se rechaza en `add_job`.

use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};

use ciforge_core::{Fragment, Generate, Job};

use crate::errors::ConfigError;
use crate::workflow::Workflow;

/// Versión del esquema de configuración emitido en la raíz del documento.
pub const SCHEMA_VERSION: f64 = 2.1;

pub struct Config {
    executors: IndexMap<String, Box<dyn Generate>>,
    jobs: IndexMap<String, Job>,
    workflows: IndexMap<String, Workflow>,
}

impl Config {
    pub fn new() -> Self {
        Self { executors: IndexMap::new(),
               jobs: IndexMap::new(),
               workflows: IndexMap::new() }
    }

    /// Declara un executor reutilizable. El nombre debe ser único y la
    /// declaración debe preceder a cualquier job que lo referencie.
    pub fn add_executor(&mut self, name: impl Into<String>, executor: impl Generate + 'static) -> Result<&mut Self, ConfigError> {
        let name = name.into();
        if self.executors.contains_key(&name) {
            return Err(ConfigError::DuplicateExecutor(name));
        }
        debug!("declared reusable executor `{name}`");
        self.executors.insert(name, Box::new(executor));
        Ok(self)
    }

    /// Registra un job. El nombre debe ser único dentro del documento; si el
    /// job está ligado a un executor reutilizable, éste debe estar ya
    /// declarado.
    pub fn add_job(&mut self, job: Job) -> Result<&mut Self, ConfigError> {
        if self.jobs.contains_key(job.name()) {
            return Err(ConfigError::DuplicateJob(job.name().to_string()));
        }
        if let Some(reference) = job.executor().reusable_name() {
            if !self.executors.contains_key(reference) {
                return Err(ConfigError::UndeclaredExecutor { job: job.name().to_string(),
                                                             executor: reference.to_string() });
            }
        }
        debug!("registered job `{}`", job.name());
        self.jobs.insert(job.name().to_string(), job);
        Ok(self)
    }

    /// Registra un workflow. Cada job referenciado debe existir ya en el
    /// documento.
    pub fn add_workflow(&mut self, workflow: Workflow) -> Result<&mut Self, ConfigError> {
        if self.workflows.contains_key(workflow.name()) {
            return Err(ConfigError::DuplicateWorkflow(workflow.name().to_string()));
        }
        for job in workflow.jobs() {
            if !self.jobs.contains_key(job) {
                return Err(ConfigError::UnknownWorkflowJob { workflow: workflow.name().to_string(),
                                                             job: job.clone() });
            }
        }
        debug!("registered workflow `{}`", workflow.name());
        self.workflows.insert(workflow.name().to_string(), workflow);
        Ok(self)
    }

    /// Genera el documento completo: `version` primero, luego `executors`
    /// (si hay declaraciones), el mapa `jobs` (siempre presente) y
    /// `workflows` (si hay alguno). Todos los mapas preservan el orden de
    /// declaración.
    pub fn generate(&self) -> Result<Fragment, ConfigError> {
        let mut document = Map::new();
        document.insert("version".to_string(), Value::from(SCHEMA_VERSION));

        if !self.executors.is_empty() {
            let mut executors = Map::new();
            for (name, executor) in self.executors.iter() {
                executors.insert(name.clone(), executor.generate()?);
            }
            document.insert("executors".to_string(), Value::Object(executors));
        }

        let mut jobs = Map::new();
        for (name, job) in self.jobs.iter() {
            jobs.insert(name.clone(), job.generate_contents()?);
        }
        document.insert("jobs".to_string(), Value::Object(jobs));

        if !self.workflows.is_empty() {
            let mut workflows = Map::new();
            for (name, workflow) in self.workflows.iter() {
                workflows.insert(name.clone(), workflow.generate_contents()?);
            }
            document.insert("workflows".to_string(), Value::Object(workflows));
        }

        Ok(Value::Object(document))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
         .field("executors", &self.executors.keys().collect::<Vec<_>>())
         .field("jobs", &self.jobs.keys().collect::<Vec<_>>())
         .field("workflows", &self.workflows.keys().collect::<Vec<_>>())
         .finish()
    }
}
