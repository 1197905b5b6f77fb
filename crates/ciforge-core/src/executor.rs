//! Dualidad de resolución de executors.
//!
//! Un job puede ligarse a su executor de dos maneras, con fragmentos
//! radicalmente distintos pero el mismo contrato de generación:
//! - `Inline`: descriptor autocontenido (el catálogo concreto vive fuera
//!   del núcleo).
//! - `Reusable`: handle por nombre hacia un executor declarado una sola vez
//!   en el registro externo. El núcleo emite sólo el marcador de referencia;
//!   resolverlo es responsabilidad del agregador de documento.
//!
//! Modelar ambos como variantes de un mismo tipo permite que el sitio de
//! composición (`Job`) los trate sin casos especiales.

use serde_json::{Map, Value};

use crate::constants::EXECUTOR_REF_KEY;
use crate::errors::GenerateError;
use crate::generate::{Fragment, Generate};

pub enum ExecutorBinding {
    /// Descriptor autocontenido; genera su fragmento de entorno completo.
    Inline(Box<dyn Generate>),
    /// Referencia por nombre; genera únicamente `{"executor": <nombre>}`.
    Reusable(String),
}

impl ExecutorBinding {
    /// Liga un descriptor inline, tomando ownership del mismo.
    pub fn inline(executor: impl Generate + 'static) -> Self {
        ExecutorBinding::Inline(Box::new(executor))
    }

    /// Liga por nombre a un executor declarado en el registro externo.
    pub fn reusable(name: impl Into<String>) -> Self {
        ExecutorBinding::Reusable(name.into())
    }

    /// Nombre referenciado, si el binding es un handle reutilizable.
    /// El registro externo lo usa para validar la declaración previa.
    pub fn reusable_name(&self) -> Option<&str> {
        match self {
            ExecutorBinding::Reusable(name) => Some(name),
            ExecutorBinding::Inline(_) => None,
        }
    }
}

impl Generate for ExecutorBinding {
    fn generate(&self) -> Result<Fragment, GenerateError> {
        match self {
            ExecutorBinding::Inline(executor) => executor.generate(),
            ExecutorBinding::Reusable(name) => {
                let mut marker = Map::new();
                marker.insert(EXECUTOR_REF_KEY.to_string(), Value::String(name.clone()));
                Ok(Value::Object(marker))
            }
        }
    }
}
