//! Resumen de una ejecución, reconstruido por replay del log.
//!
//! El replay es lineal: consume eventos en orden y actualiza un slot por
//! paso. Garantías (invariantes del runner, verificadas en tests):
//! - una entrada por paso, en el orden de la secuencia;
//! - las entradas exitosas contienen todos los reports del paso, en orden
//!   de producción;
//! - las entradas fallidas llevan la clase del fallo.

use serde::Serialize;
use uuid::Uuid;

use crate::errors::FailureKind;
use crate::event::{RunEvent, RunEventKind};
use crate::model::Report;
use crate::step::StepStatus;

/// Resultado de un paso dentro del resumen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    /// Posición ordinal del paso en la secuencia.
    pub position: usize,
    pub label: String,
    pub status: StepStatus,
    /// Clase del fallo si `status == Failed`.
    pub failure: Option<FailureKind>,
    /// Reports producidos, en orden de producción (vacío si falló).
    pub reports: Vec<Report>,
}

/// Registro ordenado del resultado de cada paso de una ejecución.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub steps: Vec<StepOutcome>,
}

impl RunSummary {
    /// Reconstruye el resumen a partir del log de eventos. `labels` fija
    /// la cantidad y el orden de los slots; los eventos sólo los rellenan.
    pub fn from_events(run_id: Uuid, events: &[RunEvent], labels: &[String]) -> Self {
        let mut steps: Vec<StepOutcome> = labels
            .iter()
            .enumerate()
            .map(|(position, label)| StepOutcome {
                position,
                label: label.clone(),
                status: StepStatus::Pending,
                failure: None,
                reports: Vec::new(),
            })
            .collect();

        for ev in events {
            match &ev.kind {
                RunEventKind::RunStarted { .. } | RunEventKind::RunCompleted { .. } => {}
                RunEventKind::StepStarted { step_index, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Running;
                    }
                }
                RunEventKind::StepFinished { step_index, reports, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::FinishedOk;
                        slot.reports = reports.clone();
                    }
                }
                RunEventKind::StepFailed { step_index, error, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Failed;
                        slot.failure = Some(error.kind());
                    }
                }
            }
        }

        RunSummary { run_id, steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.status == StepStatus::FinishedOk).count()
    }

    pub fn failed(&self) -> usize {
        self.steps.iter().filter(|s| s.status == StepStatus::Failed).count()
    }
}
