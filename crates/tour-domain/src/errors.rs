// errors.rs
use thiserror::Error;

/// Error del dominio de valores de muestra.
///
/// Las lecciones los clasifican hacia la taxonomía del runner: los fallos
/// de conversión numérica son errores de formato de entrada; los accesos a
/// índices/claves/valores ausentes son errores de búsqueda.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("valor no numérico: {input:?} no se puede convertir a {expected}")]
    NotNumeric { input: String, expected: String },

    #[error("índice {index} fuera de rango (longitud {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("clave no encontrada: {0:?}")]
    KeyMissing(String),

    #[error("valor no encontrado: {0}")]
    ValueMissing(String),

    #[error("operación no soportada sobre {0}")]
    Unsupported(String),
}
