//! Implementación del Runner.
//!
//! Una pasada, sin reintentos ni esperas: ejecuta los pasos estrictamente
//! en orden, reenvía los reports al Presenter y aísla el fallo de cada
//! paso. Un fallo de paso nunca aborta el resto de la secuencia; sólo los
//! errores del propio motor (`RunnerError`) salen de `run`.

use uuid::Uuid;

use crate::errors::RunnerError;
use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
use crate::presenter::Presenter;
use crate::step::{DemonstrationStep, StepContext, StepRunResult};
use crate::summary::RunSummary;

/// Motor secuencial de pasos de demostración.
///
/// Emite el log de eventos de la ejecución a un `EventStore` y reconstruye
/// el `RunSummary` por replay de ese log.
#[derive(Debug)]
pub struct Runner<E>
    where E: EventStore
{
    event_store: E,
    last_run_id: Option<Uuid>,
}

impl Runner<InMemoryEventStore> {
    /// Runner con store de eventos en memoria.
    pub fn new() -> Self {
        Self::with_store(InMemoryEventStore::new())
    }
}

impl Default for Runner<InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Runner<E>
    where E: EventStore
{
    /// Runner sobre un store de eventos provisto.
    pub fn with_store(event_store: E) -> Self {
        Self { event_store, last_run_id: None }
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Id de la última ejecución, si hubo alguna.
    pub fn last_run_id(&self) -> Option<Uuid> {
        self.last_run_id
    }

    /// Eventos de la última ejecución.
    pub fn events(&self) -> Option<Vec<RunEvent>> {
        self.last_run_id.map(|id| self.event_store.list(id))
    }

    /// Ejecuta la secuencia completa y devuelve su resumen.
    ///
    /// - `steps` no puede estar vacía; el orden es significativo.
    /// - Por cada paso: en éxito se reenvía cada report al Presenter en
    ///   orden de producción; en fallo se muestra un aviso etiquetado y se
    ///   continúa con el paso siguiente.
    /// - Garantías del resumen: `len == steps.len()`, orden preservado.
    pub fn run(&mut self,
               steps: &[Box<dyn DemonstrationStep>],
               presenter: &mut dyn Presenter)
               -> Result<RunSummary, RunnerError> {
        if steps.is_empty() {
            return Err(RunnerError::EmptySequence);
        }

        let run_id = Uuid::new_v4();
        self.last_run_id = Some(run_id);

        self.event_store
            .append_kind(run_id, RunEventKind::RunStarted { step_count: steps.len() });

        let mut succeeded = 0usize;
        let mut failed = 0usize;

        for (step_index, step) in steps.iter().enumerate() {
            let label = step.label().to_string();
            self.event_store
                .append_kind(run_id,
                             RunEventKind::StepStarted { step_index, label: label.clone() });

            let mut ctx = StepContext::new(presenter);
            match step.run(&mut ctx) {
                StepRunResult::Success { reports } => {
                    for report in &reports {
                        presenter.display(&report.line());
                    }
                    succeeded += 1;
                    self.event_store
                        .append_kind(run_id,
                                     RunEventKind::StepFinished { step_index, label, reports });
                }
                StepRunResult::Failure { error } => {
                    failed += 1;
                    presenter.display(&format!("!! step '{label}' failed: {error}"));
                    self.event_store
                        .append_kind(run_id,
                                     RunEventKind::StepFailed { step_index, label, error });
                }
            }
        }

        self.event_store
            .append_kind(run_id, RunEventKind::RunCompleted { succeeded, failed });

        let events = self.event_store.list(run_id);
        let labels: Vec<String> = steps.iter().map(|s| s.label().to_string()).collect();
        Ok(RunSummary::from_events(run_id, &events, &labels))
    }
}
