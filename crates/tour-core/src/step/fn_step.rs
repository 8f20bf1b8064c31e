use crate::errors::StepError;
use crate::model::Report;

use super::definition::{DemonstrationStep, StepContext};
use super::run_result::StepRunResult;

/// Paso definido por una etiqueta y un cierre.
///
/// Es la forma habitual de declarar pasos en las lecciones (vía el macro
/// `lesson_steps!`); implementar el trait a mano queda para pasos con
/// estado propio.
pub struct FnStep {
    label: String,
    op: Box<dyn Fn(&mut StepContext<'_>) -> Result<Vec<Report>, StepError>>,
}

impl FnStep {
    pub fn new<F>(label: impl Into<String>, op: F) -> Self
    where
        F: Fn(&mut StepContext<'_>) -> Result<Vec<Report>, StepError> + 'static,
    {
        Self { label: label.into(), op: Box::new(op) }
    }
}

impl DemonstrationStep for FnStep {
    fn label(&self) -> &str {
        &self.label
    }

    fn run(&self, ctx: &mut StepContext<'_>) -> StepRunResult {
        (self.op)(ctx).into()
    }
}
