//! ciforge-adapters: Catálogos concretos de steps y executors
//!
//! Este crate provee los colaboradores externos del núcleo de composición:
//! - Commands: `Run`, `Checkout`, `RestoreCache`, `SaveCache` — cada uno
//!   genera el fragmento de un step individual.
//! - Executors inline: `DockerExecutor`, `MachineExecutor` — generan el
//!   fragmento de entorno completo de un job.
//!
//! Nota: El núcleo sólo conoce la capacidad `Generate`; aquí viven las
//! formas concretas de cada fragmento y sus campos obligatorios. Un campo
//! obligatorio ausente falla en `generate()` y el núcleo lo propaga sin
//! enmascarar.

pub mod commands;
pub mod executors;

pub use commands::{Checkout, RestoreCache, Run, SaveCache};
pub use executors::{DockerExecutor, MachineExecutor};
