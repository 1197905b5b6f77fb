//! CiForge Rust Library
//!
//! Este crate actúa como la capa de ensamblado de documentos de CiForge:
//! - Expone `config` con el agregador `Config`: registro de executors
//!   reutilizables, mapa ordenado de jobs y workflows.
//! - Expone `workflow` para la orquestación declarativa de jobs por nombre.
//! - Expone `errors` para los errores de nivel documento.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod workflow;

pub use config::{Config, SCHEMA_VERSION};
pub use errors::ConfigError;
pub use workflow::Workflow;

#[cfg(test)]
mod tests {
    use super::errors::ConfigError;

    #[test]
    fn config_error_display() {
        let d = ConfigError::DuplicateJob("build".into()).to_string();
        assert_eq!(d, "duplicate job `build`");
    }

    #[test]
    fn undeclared_executor_display() {
        let u = ConfigError::UndeclaredExecutor { job: "deploy".into(),
                                                  executor: "base".into() }.to_string();
        assert_eq!(u, "job `deploy` references undeclared executor `base`");
    }
}
