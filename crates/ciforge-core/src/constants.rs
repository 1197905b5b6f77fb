//! Constantes del núcleo de composición.
//!
//! Este módulo agrupa las claves del esquema destino que el núcleo trata de
//! forma especial. Cambiarlas altera la forma bit-exacta del documento que
//! el tooling externo consume.

/// Clave reservada bajo la cual un `Job` coloca la secuencia ordenada de
/// fragmentos de sus steps. Un fragmento de executor nunca puede emitirla;
/// la colisión es un error duro de generación.
pub const STEPS_KEY: &str = "steps";

/// Clave con la que un binding reutilizable referencia, por nombre, a un
/// executor declarado en el registro externo.
pub const EXECUTOR_REF_KEY: &str = "executor";
