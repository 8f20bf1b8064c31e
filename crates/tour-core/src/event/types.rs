//! Tipos de evento de la ejecución y estructura `RunEvent`.
//!
//! Rol en el runner:
//! - Cada ejecución emite eventos a un `EventStore` append-only.
//! - El `RunSummary` se reconstruye por replay del log, sin estructuras
//!   mutables intermedias.
//! - `RunEventKind` es el contrato observable del motor: una entrada de
//!   resumen por paso, en orden, con sus reports o su error clasificado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::StepError;
use crate::model::Report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Apertura de la ejecución. Invariante: primer evento de un `run_id`.
    RunStarted { step_count: usize },
    /// Un paso comenzó. No implica éxito.
    StepStarted { step_index: usize, label: String },
    /// Un paso terminó bien, con sus reports en orden de producción.
    StepFinished {
        step_index: usize,
        label: String,
        reports: Vec<Report>,
    },
    /// Un paso falló con error clasificado. La ejecución continúa con el
    /// paso siguiente (continue-on-failure).
    StepFailed {
        step_index: usize,
        label: String,
        error: StepError,
    },
    /// Cierre de la ejecución con el conteo final.
    RunCompleted { succeeded: usize, failed: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por el EventStore (orden de append)
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // metadato; no participa en ninguna igualdad semántica
}
