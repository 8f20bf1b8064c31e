//! Módulos de lección, uno por capítulo del material original.

pub mod control_flow;
pub mod input_output;
pub mod loops;
pub mod mapping_builders;
pub mod mapping_methods;
pub mod mappings;
pub mod operators;
pub mod sequence_builders;
pub mod sequence_methods;
pub mod sequences;
pub mod sets;
pub mod tuples;
pub mod variables;

use tour_core::{Report, StepError};
use tour_domain::{DomainError, Value};

/// Report estándar de una lección: texto y payload derivados del `Value`.
pub(crate) fn report(label: &str, value: &Value) -> Report {
    Report::new(label, value.to_string(), value.to_json())
}

/// Clasifica un error del dominio hacia la taxonomía del runner.
pub(crate) fn classify(err: DomainError) -> StepError {
    match err {
        DomainError::NotNumeric { input, expected } => {
            StepError::InputFormat { input, expected }
        }
        e @ (DomainError::IndexOutOfRange { .. }
        | DomainError::KeyMissing(_)
        | DomainError::ValueMissing(_)) => StepError::Lookup(e.to_string()),
        e => StepError::Structural(e.to_string()),
    }
}
