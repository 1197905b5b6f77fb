//! Merge shallow disjunto para fragmentos JSON.
//!
//! A diferencia de un merge con precedencia, aquí una colisión de claves es
//! un error duro: cada campo de nivel superior del contenido de un job debe
//! tener un único origen (en particular, un executor nunca puede redefinir
//! `steps`). El orden de inserción de `src` se preserva en `dst`.

use serde_json::{Map, Value};

use crate::errors::GenerateError;

/// Copia cada clave de `src` dentro de `dst`, en el orden en que `src` las
/// produjo. Una clave ya presente en `dst` aborta el merge completo.
pub fn shallow_merge_into(dst: &mut Map<String, Value>, src: &Map<String, Value>) -> Result<(), GenerateError> {
    for (k, v) in src.iter() {
        if dst.contains_key(k) {
            return Err(GenerateError::ReservedKey(k.clone()));
        }
        dst.insert(k.clone(), v.clone());
    }
    Ok(())
}
