//! Contrato polimórfico de generación.
//!
//! Todo participante del árbol de composición (step, executor, job) expone
//! la misma capacidad: producir un fragmento del esquema destino a partir de
//! su estado interno, sin contexto externo. Este módulo define:
//! - `Fragment`: la unidad estructural mínima que produce cualquier generador.
//! - `Generate`: la interfaz neutral que el resto del núcleo consume vía
//!   trait objects.

use serde_json::Value;

use crate::errors::GenerateError;

/// Fragmento del esquema destino: un mapping nombre-de-campo → valor.
///
/// Los fragmentos de steps son opacos para el núcleo; pueden incluso ser
/// escalares (p.ej. la forma corta `"checkout"`). Los fragmentos de
/// executors y de jobs son siempre objetos.
pub type Fragment = Value;

/// Capacidad compartida por steps, executors y jobs.
///
/// Implementaciones deben ser deterministas, idempotentes y sin efectos
/// secundarios: dos llamadas sobre un receptor no mutado producen
/// fragmentos estructuralmente iguales, y el valor devuelto es un snapshot
/// que no comparte referencias con el estado interno.
pub trait Generate {
    /// Produce el fragmento correspondiente al estado actual del receptor.
    ///
    /// El núcleo nunca falla aquí; variantes concretas pueden hacerlo (campo
    /// obligatorio ausente) y el fallo debe aflorar antes de completar la
    /// generación, nunca omitirse silenciosamente del output.
    fn generate(&self) -> Result<Fragment, GenerateError>;
}
