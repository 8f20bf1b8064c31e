//! Taxonomía de errores del runner.
//!
//! Un `StepError` clasifica el fallo de un paso y viaja dentro de los
//! eventos (por eso es serializable). El runner lo registra y continúa;
//! nunca se propaga más allá de `Runner::run`. `RunnerError` cubre los
//! fallos del propio motor, previos a ejecutar pasos.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallo clasificado de un paso de demostración.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepError {
    /// Texto externo que no convierte al tipo numérico esperado.
    #[error("input format: {input:?} is not a valid {expected}")]
    InputFormat { input: String, expected: String },
    /// Clave, índice o valor ausente en un contenedor.
    #[error("lookup: {0}")]
    Lookup(String),
    /// Cualquier otro fallo dentro de la operación del paso.
    #[error("structural: {0}")]
    Structural(String),
}

impl StepError {
    /// Clase del fallo, tal como queda registrada en el resumen.
    pub fn kind(&self) -> FailureKind {
        match self {
            StepError::InputFormat { .. } => FailureKind::InputFormat,
            StepError::Lookup(_) => FailureKind::Lookup,
            StepError::Structural(_) => FailureKind::Structural,
        }
    }
}

/// Clase de fallo registrada en `StepOutcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    InputFormat,
    Lookup,
    Structural,
}

/// Errores del motor (no de los pasos).
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerError {
    #[error("step sequence must not be empty")]
    EmptySequence,
    #[error("internal: {0}")]
    Internal(String),
}
