//! Métodos de mapa: instantáneas, fusión, borrado y patrones comunes.

use indexmap::IndexMap;
use tour_core::{lesson_steps, DemonstrationStep, StepError};
use tour_domain::Value;

use super::report;

fn scores() -> IndexMap<String, Value> {
    IndexMap::from([
        ("a".to_string(), Value::Int(1)),
        ("b".to_string(), Value::Int(2)),
        ("c".to_string(), Value::Int(3)),
    ])
}

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "keys values entries snapshots" => |_ctx| {
            let m = scores();
            Ok(vec![
                report("keys", &Value::texts_owned(m.keys().cloned())),
                report("values", &Value::seq(m.values().cloned())),
                report("entries", &Value::seq(m.iter().map(|(k, v)| {
                    Value::tuple([Value::Text(k.clone()), v.clone()])
                }))),
            ])
        },
        "merge with update semantics" => |_ctx| {
            let mut base = scores();
            let overrides = IndexMap::from([
                ("b".to_string(), Value::Int(20)),
                ("d".to_string(), Value::Int(4)),
            ]);
            base.extend(overrides); // las claves repetidas se sobreescriben
            Ok(vec![report("merged", &Value::Map(base))]) // {"a": 1, "b": 20, "c": 3, "d": 4}
        },
        "remove an entry" => |_ctx| {
            let mut m = scores();
            let removed = m.shift_remove("b");
            Ok(vec![
                report("removed value", &removed.unwrap_or(Value::Int(0))),
                report("remaining", &Value::Map(m)),
            ])
        },
        "remove an absent key" => |_ctx| {
            // Borrado sin guarda: la clave no existe y el paso falla.
            let mut m = scores();
            match m.shift_remove("zz") {
                Some(v) => Ok(vec![report("removed value", &v)]),
                None => Err(StepError::Lookup("clave no encontrada: \"zz\"".to_string())),
            }
        },
        "insert if absent" => |_ctx| {
            let mut m = scores();
            m.entry("a".to_string()).or_insert(Value::Int(99)); // ya existe, no cambia
            m.entry("z".to_string()).or_insert(Value::Int(0));  // se agrega
            Ok(vec![report("after insert-if-absent", &Value::Map(m))])
        },
        "init from keys" => |_ctx| {
            let init: IndexMap<String, Value> = ["a", "b", "c"]
                .iter()
                .map(|k| (k.to_string(), Value::Int(0)))
                .collect();
            Ok(vec![report("zeroed", &Value::Map(init))]) // {"a": 0, "b": 0, "c": 0}
        },
        "frequency count" => |_ctx| {
            let mut freq: IndexMap<String, Value> = IndexMap::new();
            for ch in "banana".chars() {
                let key = ch.to_string();
                match freq.entry(key) {
                    indexmap::map::Entry::Occupied(mut e) => {
                        if let Value::Int(n) = e.get_mut() {
                            *n += 1;
                        }
                    }
                    indexmap::map::Entry::Vacant(e) => {
                        e.insert(Value::Int(1));
                    }
                }
            }
            Ok(vec![report("letters of 'banana'", &Value::Map(freq))]) // {"b": 1, "a": 3, "n": 2}
        },
        "clear" => |_ctx| {
            let mut m = scores();
            m.clear();
            Ok(vec![
                report("after clear", &Value::Map(m)),
            ])
        },
    ]
}
