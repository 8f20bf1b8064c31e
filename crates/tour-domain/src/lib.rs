//! tour-domain: modelo de valores de muestra para las lecciones.
//!
//! Los contenedores dinámicos del material original se modelan como una
//! unión etiquetada (`Value`) en lugar de un contenedor de tipo único.
//! Las conversiones numéricas con guardas viven aquí; el runner no conoce
//! la semántica de los valores.

pub mod errors;
pub mod parse;
pub mod scalar;
pub mod value;

pub use errors::DomainError;
pub use parse::{parse_float, parse_int};
pub use scalar::Scalar;
pub use value::Value;
