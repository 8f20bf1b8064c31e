//! Report neutral emitido por un paso.
//!
//! Un `Report` es la unidad de salida de un paso. Es neutral:
//! - `text` es lo que el Presenter muestra; el motor no interpreta su
//!   contenido.
//! - `value` es un payload JSON estable pensado para aserciones en tests
//!   (los conjuntos llegan ya ordenados desde el dominio).
//! El sistema no lo retiene fuera del log de eventos y del resumen.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Etiqueta corta de lo ilustrado ("sorted", "union", ...).
    pub label: String,
    /// Texto mostrado por el Presenter.
    pub text: String,
    /// Payload JSON del valor reportado; `Null` para reports sólo de texto.
    pub value: Value,
}

impl Report {
    pub fn new(label: impl Into<String>, text: impl Into<String>, value: Value) -> Self {
        Self { label: label.into(), text: text.into(), value }
    }

    /// Report puramente textual, sin payload.
    pub fn note(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(label, text, Value::Null)
    }

    /// Línea que el runner reenvía al Presenter.
    pub fn line(&self) -> String {
        if self.label.is_empty() {
            self.text.clone()
        } else {
            format!("{}: {}", self.label, self.text)
        }
    }
}
