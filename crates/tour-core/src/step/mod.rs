//! Pasos de demostración: trait, resultado, estado y helpers.

mod definition;
mod fn_step;
pub mod macros;
mod run_result;
mod status;

pub use definition::{DemonstrationStep, StepContext};
pub use fn_step::FnStep;
pub use run_result::StepRunResult;
pub use status::StepStatus;
