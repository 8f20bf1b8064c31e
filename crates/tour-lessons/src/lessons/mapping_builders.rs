//! Pipelines de construcción de mapas.
//!
//! El equivalente de las comprensiones de diccionario: colecciones
//! `(clave, valor)` armadas con iteradores y recogidas en un IndexMap.

use indexmap::IndexMap;
use tour_core::{lesson_steps, DemonstrationStep};
use tour_domain::Value;

use super::report;

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "word lengths" => |_ctx| {
            let words = ["apple", "fig", "banana"];
            let lengths: IndexMap<String, Value> = words
                .iter()
                .map(|w| (w.to_string(), Value::Int(w.len() as i64)))
                .collect();
            Ok(vec![report("lengths", &Value::Map(lengths))]) // {"apple": 5, "fig": 3, "banana": 6}
        },
        "squares mapping" => |_ctx| {
            let squares: IndexMap<String, Value> = (1i64..=5)
                .map(|n| (n.to_string(), Value::Int(n * n)))
                .collect();
            Ok(vec![report("n -> n*n", &Value::Map(squares))])
        },
        "filter by value" => |_ctx| {
            let scores = [("alice", 92i64), ("bob", 71), ("carol", 85)];
            let passed: IndexMap<String, Value> = scores
                .iter()
                .filter(|(_, s)| *s >= 80)
                .map(|(name, s)| (name.to_string(), Value::Int(*s)))
                .collect();
            Ok(vec![report("scores >= 80", &Value::Map(passed))]) // {"alice": 92, "carol": 85}
        },
        "transform values" => |_ctx| {
            let prices = [("pen", 2i64), ("book", 10)];
            let doubled: IndexMap<String, Value> = prices
                .iter()
                .map(|(item, p)| (item.to_string(), Value::Int(p * 2)))
                .collect();
            Ok(vec![report("doubled prices", &Value::Map(doubled))])
        },
        "swap keys and values" => |_ctx| {
            let codes = [("a", 1i64), ("b", 2)];
            let inverted: IndexMap<String, Value> = codes
                .iter()
                .map(|(k, v)| (v.to_string(), Value::from(*k)))
                .collect();
            Ok(vec![report("inverted", &Value::Map(inverted))]) // {"1": "a", "2": "b"}
        },
        "frequency of characters" => |_ctx| {
            let mut freq: IndexMap<String, i64> = IndexMap::new();
            for ch in "hello".chars() {
                *freq.entry(ch.to_string()).or_insert(0) += 1;
            }
            let as_values: IndexMap<String, Value> =
                freq.into_iter().map(|(k, n)| (k, Value::Int(n))).collect();
            Ok(vec![report("letters of 'hello'", &Value::Map(as_values))]) // {"h": 1, "e": 1, "l": 2, "o": 1}
        },
        "group words by length" => |_ctx| {
            let words = ["sun", "ice", "apple", "melon", "go"];
            let mut groups: IndexMap<String, Vec<Value>> = IndexMap::new();
            for w in words {
                groups.entry(w.len().to_string()).or_default().push(Value::from(w));
            }
            let as_values: IndexMap<String, Value> =
                groups.into_iter().map(|(k, ws)| (k, Value::Seq(ws))).collect();
            Ok(vec![report("grouped", &Value::Map(as_values))])
        },
    ]
}
