//! Unión etiquetada de valores de muestra.
//!
//! Rol en las lecciones:
//! - Cada paso construye `Value`s ad-hoc para ilustrar una operación; no
//!   tienen identidad entre pasos ni vida más allá del paso.
//! - `Display` produce la representación con la que los reports muestran
//!   contenedores (`[1, 2, 3]`, `{"a": 1}`, `{1, 2}` ordenado, `("x", 2)`).
//! - `to_json` produce el payload estable del report; los conjuntos se
//!   serializan ordenados para que la igualdad sea independiente del orden.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::scalar::Scalar;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// Secuencia ordenada y mutable (lista).
    Seq(Vec<Value>),
    /// Secuencia inmutable (tupla). La inmutabilidad es de uso, no de tipo:
    /// las lecciones nunca mutan una tupla, la clonan para "cambiarla".
    Tuple(Vec<Value>),
    /// Mapa que preserva el orden de inserción.
    Map(IndexMap<String, Value>),
    /// Conjunto de escalares con orden total.
    Set(BTreeSet<Scalar>),
}

impl Value {
    // ---- constructores de conveniencia -------------------------------

    pub fn seq<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Seq(items.into_iter().collect())
    }

    pub fn tuple<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Tuple(items.into_iter().collect())
    }

    pub fn map<'a, I>(entries: I) -> Value
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    pub fn set<I>(members: I) -> Value
    where
        I: IntoIterator<Item = Scalar>,
    {
        Value::Set(members.into_iter().collect())
    }

    /// Secuencia de enteros (el caso más común en las lecciones).
    pub fn ints<I>(items: I) -> Value
    where
        I: IntoIterator<Item = i64>,
    {
        Value::Seq(items.into_iter().map(Value::Int).collect())
    }

    pub fn texts<'a, I>(items: I) -> Value
    where
        I: IntoIterator<Item = &'a str>,
    {
        Value::Seq(items.into_iter().map(Value::from).collect())
    }

    /// Secuencia de textos ya poseídos (lo que producen los `format!`).
    pub fn texts_owned<I>(items: I) -> Value
    where
        I: IntoIterator<Item = String>,
    {
        Value::Seq(items.into_iter().map(Value::Text).collect())
    }

    pub fn int_set<I>(members: I) -> Value
    where
        I: IntoIterator<Item = i64>,
    {
        Value::Set(members.into_iter().map(Scalar::Int).collect())
    }

    pub fn text_set<'a, I>(members: I) -> Value
    where
        I: IntoIterator<Item = &'a str>,
    {
        Value::Set(members.into_iter().map(Scalar::from).collect())
    }

    // ---- introspección ------------------------------------------------

    /// Nombre del tipo, análogo al chequeo de tipos del material original.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Seq(_) => "seq",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
        }
    }

    /// Longitud de un contenedor; los escalares no tienen longitud.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Text(t) => Some(t.chars().count()),
            Value::Seq(items) | Value::Tuple(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            Value::Set(members) => Some(members.len()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len().is_some_and(|n| n == 0)
    }

    // ---- accesos con guarda -------------------------------------------

    /// Acceso posicional sobre secuencias y tuplas.
    pub fn item(&self, index: usize) -> Result<&Value, DomainError> {
        match self {
            Value::Seq(items) | Value::Tuple(items) => {
                items.get(index).ok_or(DomainError::IndexOutOfRange { index, len: items.len() })
            }
            other => Err(DomainError::Unsupported(format!("acceso posicional sobre {}", other.type_name()))),
        }
    }

    /// Acceso por clave sobre mapas.
    pub fn key(&self, key: &str) -> Result<&Value, DomainError> {
        match self {
            Value::Map(entries) => entries.get(key).ok_or_else(|| DomainError::KeyMissing(key.to_string())),
            other => Err(DomainError::Unsupported(format!("acceso por clave sobre {}", other.type_name()))),
        }
    }

    /// Acceso por clave con valor por defecto (el `get` seguro del original).
    pub fn key_or(&self, key: &str, default: Value) -> Value {
        match self {
            Value::Map(entries) => entries.get(key).cloned().unwrap_or(default),
            _ => default,
        }
    }

    // ---- payload del report -------------------------------------------

    /// JSON canónico para el payload de un report. Los conjuntos salen
    /// ordenados (orden de `Scalar`), las tuplas como arreglos.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Text(t) => serde_json::Value::String(t.clone()),
            Value::Seq(items) | Value::Tuple(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(entries) => serde_json::Value::Object(
                entries.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Set(members) => {
                serde_json::Value::Array(members.iter().map(Scalar::to_json).collect())
            }
        }
    }

    /// Representación dentro de contenedores: los textos van entre comillas.
    fn repr(&self) -> String {
        match self {
            Value::Text(t) => format!("{t:?}"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            // Los flotantes enteros conservan el `.0` para no confundirse
            // con enteros en la salida.
            Value::Float(x) => {
                if x.is_finite() && x.fract() == 0.0 {
                    write!(f, "{x:.1}")
                } else {
                    write!(f, "{x}")
                }
            }
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(t) => write!(f, "{t}"),
            Value::Seq(items) => {
                let inner: Vec<String> = items.iter().map(Value::repr).collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Value::Tuple(items) => {
                let inner: Vec<String> = items.iter().map(Value::repr).collect();
                if items.len() == 1 {
                    // Tupla unitaria con coma final, como en el original.
                    write!(f, "({},)", inner[0])
                } else {
                    write!(f, "({})", inner.join(", "))
                }
            }
            Value::Map(entries) => {
                let inner: Vec<String> =
                    entries.iter().map(|(k, v)| format!("{k:?}: {}", v.repr())).collect();
                write!(f, "{{{}}}", inner.join(", "))
            }
            Value::Set(members) => {
                if members.is_empty() {
                    return write!(f, "set()");
                }
                let inner: Vec<String> = members.iter().map(Scalar::repr).collect();
                write!(f, "{{{}}}", inner.join(", "))
            }
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(t: &str) -> Self {
        Value::Text(t.to_string())
    }
}

impl From<String> for Value {
    fn from(t: String) -> Self {
        Value::Text(t)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        s.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_de_secuencias_y_tuplas() {
        assert_eq!(Value::ints([1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Value::texts(["a", "b"]).to_string(), "[\"a\", \"b\"]");
        assert_eq!(
            Value::tuple([Value::from("x"), Value::Int(2)]).to_string(),
            "(\"x\", 2)"
        );
        assert_eq!(Value::tuple([Value::Int(7)]).to_string(), "(7,)");
    }

    #[test]
    fn render_de_mapas_preserva_orden_de_insercion() {
        let v = Value::map([("b", Value::Int(2)), ("a", Value::Int(1))]);
        assert_eq!(v.to_string(), "{\"b\": 2, \"a\": 1}");
    }

    #[test]
    fn render_de_conjuntos_ordenado_y_vacio() {
        assert_eq!(Value::int_set([3, 1, 2]).to_string(), "{1, 2, 3}");
        assert_eq!(Value::int_set([]).to_string(), "set()");
    }

    #[test]
    fn flotantes_enteros_conservan_punto() {
        assert_eq!(Value::Float(8.0).to_string(), "8.0");
        assert_eq!(Value::Float(3.25).to_string(), "3.25");
    }

    #[test]
    fn json_de_conjunto_sale_ordenado() {
        let a = Value::int_set([5, 4]);
        let b = Value::int_set([4, 5]);
        assert_eq!(a.to_json(), serde_json::json!([4, 5]));
        assert_eq!(a.to_json(), b.to_json());
    }

    #[test]
    fn accesos_con_guarda() {
        let seq = Value::ints([10, 20]);
        assert_eq!(seq.item(1).unwrap(), &Value::Int(20));
        assert!(matches!(
            seq.item(5),
            Err(DomainError::IndexOutOfRange { index: 5, len: 2 })
        ));

        let map = Value::map([("a", Value::Int(1))]);
        assert!(matches!(map.key("z"), Err(DomainError::KeyMissing(_))));
        assert_eq!(
            map.key_or("z", Value::from("Not provided")),
            Value::from("Not provided")
        );
    }

    #[test]
    fn type_name_y_len() {
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Map(IndexMap::new()).type_name(), "map");
        assert_eq!(Value::Text("hola".into()).len(), Some(4));
        assert_eq!(Value::Int(1).len(), None);
    }
}
