//! Conjuntos: deduplicación, álgebra de conjuntos y pertenencia.
//!
//! Los miembros son escalares con orden total; la representación sale
//! siempre ordenada, así que la igualdad de reports no depende del orden
//! de inserción.

use std::collections::BTreeSet;

use tour_core::{lesson_steps, DemonstrationStep, StepError};
use tour_domain::{Scalar, Value};

use super::report;

fn int_set<I: IntoIterator<Item = i64>>(members: I) -> BTreeSet<Scalar> {
    members.into_iter().map(Scalar::Int).collect()
}

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "create with deduplication" => |_ctx| {
            let unique = int_set([1, 2, 2, 3, 3, 3]);
            Ok(vec![report("from [1, 2, 2, 3, 3, 3]", &Value::Set(unique))]) // {1, 2, 3}
        },
        "union" => |_ctx| {
            let a = int_set([1, 2, 3, 4, 5]);
            let b = int_set([4, 5, 6, 7, 8]);
            let union: BTreeSet<Scalar> = a.union(&b).cloned().collect();
            Ok(vec![report("union", &Value::Set(union))]) // {1, 2, 3, 4, 5, 6, 7, 8}
        },
        "intersection" => |_ctx| {
            let a = int_set([1, 2, 3, 4, 5]);
            let b = int_set([4, 5, 6, 7, 8]);
            let common: BTreeSet<Scalar> = a.intersection(&b).cloned().collect();
            Ok(vec![report("intersection", &Value::Set(common))]) // {4, 5}
        },
        "difference" => |_ctx| {
            let a = int_set([1, 2, 3, 4, 5]);
            let b = int_set([4, 5, 6, 7, 8]);
            let only_a: BTreeSet<Scalar> = a.difference(&b).cloned().collect();
            Ok(vec![report("a - b", &Value::Set(only_a))]) // {1, 2, 3}
        },
        "symmetric difference" => |_ctx| {
            let a = int_set([1, 2, 3, 4, 5]);
            let b = int_set([4, 5, 6, 7, 8]);
            let exclusive: BTreeSet<Scalar> = a.symmetric_difference(&b).cloned().collect();
            Ok(vec![report("a ^ b", &Value::Set(exclusive))]) // {1, 2, 3, 6, 7, 8}
        },
        "subset and superset" => |_ctx| {
            let small = int_set([1, 2]);
            let big = int_set([1, 2, 3]);
            Ok(vec![
                report("small <= big", &Value::Bool(small.is_subset(&big))),
                report("big >= small", &Value::Bool(big.is_superset(&small))),
                report("big <= small", &Value::Bool(big.is_subset(&small))),
            ])
        },
        "add and remove" => |_ctx| {
            let mut members = int_set([1, 2, 3]);
            members.insert(Scalar::Int(9));
            members.remove(&Scalar::Int(1));
            Ok(vec![report("after add 9, remove 1", &Value::Set(members))]) // {2, 3, 9}
        },
        "remove an absent member" => |_ctx| {
            // Borrado sin guarda: el miembro no está y el paso falla.
            let mut members = int_set([1, 2, 3]);
            if !members.remove(&Scalar::Int(99)) {
                return Err(StepError::Lookup("valor no encontrado: 99".to_string()));
            }
            Ok(vec![report("after remove 99", &Value::Set(members))])
        },
        "membership" => |_ctx| {
            let members = int_set([1, 2, 3]);
            Ok(vec![
                report("contains 3", &Value::Bool(members.contains(&Scalar::Int(3)))),
                report("contains 7", &Value::Bool(members.contains(&Scalar::Int(7)))),
            ])
        },
        "set from a sequence of words" => |_ctx| {
            let words = ["red", "blue", "red", "green", "blue"];
            let unique: BTreeSet<Scalar> = words.iter().map(|&w| Scalar::from(w)).collect();
            Ok(vec![report("unique words", &Value::Set(unique))]) // {"blue", "green", "red"}
        },
    ]
}
