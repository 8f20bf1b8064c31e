//! Modelo neutral del runner.

mod report;

pub use report::Report;
