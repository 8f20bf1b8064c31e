//! Miembros escalares de conjuntos y claves compuestas.
//!
//! Sólo los valores con orden total participan en conjuntos, reflejando la
//! restricción de "hashabilidad" del material original. El orden derivado
//! (Bool < Int < Text) es estable y hace determinista la iteración.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Scalar {
    /// Representación dentro de contenedores (textos entre comillas).
    pub fn repr(&self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Text(t) => format!("{t:?}"),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Scalar::Bool(b) => serde_json::Value::Bool(*b),
            Scalar::Int(i) => serde_json::Value::from(*i),
            Scalar::Text(t) => serde_json::Value::String(t.clone()),
        }
    }

    /// Promociona el escalar al modelo de valores completo.
    pub fn into_value(self) -> Value {
        match self {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(i) => Value::Int(i),
            Scalar::Text(t) => Value::Text(t),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Text(t) => write!(f, "{t}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<&str> for Scalar {
    fn from(t: &str) -> Self {
        Scalar::Text(t.to_string())
    }
}

impl From<String> for Scalar {
    fn from(t: String) -> Self {
        Scalar::Text(t)
    }
}
