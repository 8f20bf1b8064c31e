//! Mapas: creación, acceso, actualización e iteración.
//!
//! Los mapas preservan el orden de inserción (IndexMap), igual que los
//! del material original.

use indexmap::IndexMap;
use tour_core::{lesson_steps, DemonstrationStep};
use tour_domain::Value;

use super::{classify, report};

fn student() -> Value {
    Value::map([
        ("name", Value::from("Alice")),
        ("age", Value::Int(20)),
        ("grade", Value::from("A")),
        ("city", Value::from("New York")),
    ])
}

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "create from literal" => |_ctx| {
            Ok(vec![report("student", &student())])
        },
        "empty mapping" => |_ctx| {
            let empty = Value::Map(IndexMap::new());
            Ok(vec![
                report("empty", &empty),
                report("length", &Value::Int(0)),
            ])
        },
        "mixed value types" => |_ctx| {
            let mixed = Value::map([
                ("name", Value::from("Bob")),
                ("age", Value::Int(25)),
                ("height", Value::Float(5.9)),
                ("is student", Value::Bool(true)),
                ("subjects", Value::texts(["Math", "Science", "English"])),
                ("grades", Value::map([
                    ("Math", Value::Int(95)),
                    ("Science", Value::Int(87)),
                ])),
            ]);
            Ok(vec![report("mixed", &mixed)])
        },
        "access by key" => |_ctx| {
            let s = student();
            let name = s.key("name").map_err(classify)?.clone();
            let age = s.key("age").map_err(classify)?.clone();
            Ok(vec![
                report("student name", &name),
                report("student age", &age),
            ])
        },
        "lookup with default" => |_ctx| {
            let contact = Value::map([("a", Value::Int(1)), ("b", Value::Int(2))]);
            let missing = contact.key_or("c", Value::from("Not provided"));
            Ok(vec![report("value for missing key", &missing)]) // Not provided
        },
        "insert and update" => |_ctx| {
            let mut entries = match student() {
                Value::Map(m) => m,
                _ => IndexMap::new(),
            };
            entries.insert("phone".to_string(), Value::from("555-1234"));
            entries.insert("age".to_string(), Value::Int(21)); // cumpleaños
            Ok(vec![report("after insert and update", &Value::Map(entries))])
        },
        "contains key" => |_ctx| {
            let s = student();
            Ok(vec![
                report("has 'name'", &Value::Bool(s.key("name").is_ok())),
                report("has 'address'", &Value::Bool(s.key("address").is_ok())),
            ])
        },
        "iterate keys values entries" => |_ctx| {
            let entries = match student() {
                Value::Map(m) => m,
                _ => IndexMap::new(),
            };
            let keys = Value::seq(entries.keys().map(|k| Value::Text(k.clone())));
            let values = Value::seq(entries.values().cloned());
            let pairs = Value::texts_owned(
                entries.iter().map(|(k, v)| format!("{k}={v}")),
            );
            Ok(vec![
                report("keys", &keys),
                report("values", &values),
                report("entries", &pairs),
            ])
        },
        "nested access" => |_ctx| {
            let mixed = Value::map([
                ("subjects", Value::texts(["Math", "Science"])),
                ("grades", Value::map([("Math", Value::Int(95))])),
            ]);
            let math = mixed.key("grades").map_err(classify)?.key("Math").map_err(classify)?.clone();
            let first = mixed.key("subjects").map_err(classify)?.item(0).map_err(classify)?.clone();
            Ok(vec![
                report("Math grade", &math),   // 95
                report("first subject", &first), // Math
            ])
        },
    ]
}
