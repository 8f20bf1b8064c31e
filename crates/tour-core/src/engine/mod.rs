//! Motor de ejecución.

mod core;

pub use core::Runner;
