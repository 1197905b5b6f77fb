//! Errores específicos del núcleo de generación (simples por ahora).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GenerateError {
    #[error("executor fragment must be a JSON object")] ExecutorNotObject,
    #[error("fragment redefines reserved key `{0}`")] ReservedKey(String),
    #[error("missing required field `{field}` in `{component}`")] MissingField { component: &'static str, field: &'static str },
    #[error("internal: {0}")] Internal(String),
}
