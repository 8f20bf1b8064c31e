use crate::errors::StepError;
use crate::presenter::Presenter;

use super::run_result::StepRunResult;

/// Trait que define un paso de demostración.
///
/// Implementaciones deben ser autocontenidas: construyen sus valores de
/// muestra dentro de `run` y no dependen de datos de pasos anteriores.
/// Re-ejecutar un paso con un contexto fresco produce los mismos reports,
/// salvo que el paso lea entrada externa por el contexto.
pub trait DemonstrationStep {
    /// Etiqueta legible y estable dentro de la secuencia.
    fn label(&self) -> &str;

    /// Ejecuta la operación del paso. Los reports producidos se devuelven
    /// en orden de producción; el runner los reenvía al Presenter.
    fn run(&self, ctx: &mut StepContext<'_>) -> StepRunResult;
}

/// Contexto entregado a `DemonstrationStep::run`.
///
/// Expone sólo la capacidad de lectura del Presenter: la salida pasa por
/// los reports, de modo que el runner conserva el orden de emisión.
pub struct StepContext<'a> {
    presenter: &'a mut dyn Presenter,
}

impl<'a> StepContext<'a> {
    pub fn new(presenter: &'a mut dyn Presenter) -> Self {
        Self { presenter }
    }

    /// Lectura bloqueante de una línea. El único punto de bloqueo de todo
    /// el runner.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, StepError> {
        self.presenter.read_line(prompt)
    }
}
