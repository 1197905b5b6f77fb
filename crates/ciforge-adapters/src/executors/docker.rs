//! Executor Docker: uno o más contenedores; el primero es el principal.

use serde_json::{json, Map, Value};

use ciforge_core::{Fragment, Generate, GenerateError};

#[derive(Clone)]
pub struct DockerExecutor {
    images: Vec<String>,
    resource_class: Option<String>,
}

impl DockerExecutor {
    /// Crea el executor con la imagen del contenedor principal.
    pub fn new(image: impl Into<String>) -> Self {
        Self { images: vec![image.into()],
               resource_class: None }
    }

    /// Añade un contenedor secundario (p.ej. una base de datos de servicio).
    pub fn add_image(&mut self, image: impl Into<String>) -> &mut Self {
        self.images.push(image.into());
        self
    }

    pub fn with_resource_class(mut self, class: impl Into<String>) -> Self {
        self.resource_class = Some(class.into());
        self
    }
}

impl Generate for DockerExecutor {
    fn generate(&self) -> Result<Fragment, GenerateError> {
        let containers: Vec<Value> = self.images
                                         .iter()
                                         .map(|image| json!({ "image": image }))
                                         .collect();

        let mut fragment = Map::new();
        fragment.insert("docker".to_string(), Value::Array(containers));
        if let Some(class) = &self.resource_class {
            fragment.insert("resource_class".to_string(), Value::String(class.clone()));
        }
        Ok(Value::Object(fragment))
    }
}
