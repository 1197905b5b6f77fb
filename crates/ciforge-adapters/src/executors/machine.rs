//! Executor de máquina virtual dedicada.

use serde_json::json;

use ciforge_core::{Fragment, Generate, GenerateError};

#[derive(Clone)]
pub struct MachineExecutor {
    image: String,
}

impl MachineExecutor {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into() }
    }
}

impl Generate for MachineExecutor {
    fn generate(&self) -> Result<Fragment, GenerateError> {
        if self.image.is_empty() {
            return Err(GenerateError::MissingField { component: "machine", field: "image" });
        }
        Ok(json!({ "machine": { "image": self.image } }))
    }
}
