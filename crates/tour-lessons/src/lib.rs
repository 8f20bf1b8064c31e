//! tour-lessons: el contenido del tour.
//!
//! Cada módulo de `lessons` corresponde a un capítulo del material
//! original y expone `steps()`: una lista ordenada y fija de pasos de
//! demostración. El catálogo fija el orden global de las lecciones.

pub mod catalog;
pub mod lessons;

pub use catalog::{catalog, find, Lesson};
