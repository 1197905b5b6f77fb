//! Errores de nivel documento (agregación y referencias).

use ciforge_core::GenerateError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("duplicate executor `{0}`")] DuplicateExecutor(String),
    #[error("duplicate job `{0}`")] DuplicateJob(String),
    #[error("duplicate workflow `{0}`")] DuplicateWorkflow(String),
    #[error("job `{job}` references undeclared executor `{executor}`")] UndeclaredExecutor { job: String, executor: String },
    #[error("workflow `{workflow}` references unknown job `{job}`")] UnknownWorkflowJob { workflow: String, job: String },
    #[error(transparent)] Generate(#[from] GenerateError),
}
