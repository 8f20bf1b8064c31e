use serde::{Deserialize, Serialize};

/// Estado de un paso durante la reconstrucción del resumen.
///
/// Las transiciones válidas son:
/// - `Pending` -> `Running`
/// - `Running` -> `FinishedOk`
/// - `Running` -> `Failed`
///
/// A diferencia de un motor stop-on-failure, aquí un `Failed` no bloquea
/// los pasos siguientes: el runner continúa la secuencia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    /// El paso está pendiente de ejecución.
    Pending,
    /// El paso está en ejecución.
    Running,
    /// El paso finalizó correctamente.
    FinishedOk,
    /// El paso falló; el fallo quedó clasificado en el resumen.
    Failed,
}
