//! ciforge-core: Protocolo de generación y composición de fragmentos
pub mod constants;
pub mod errors;
pub mod executor;
pub mod generate;
pub mod job;
pub mod merge;

pub use errors::GenerateError;
pub use executor::ExecutorBinding;
pub use generate::{Fragment, Generate};
pub use job::Job;
pub use merge::shallow_merge_into;
