//! Métodos de secuencia: alta, baja, búsqueda, orden y copia.

use tour_core::{lesson_steps, DemonstrationStep, StepError};
use tour_domain::{DomainError, Value};

use super::{classify, report};

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "push to the end" => |_ctx| {
            let mut items = vec![1i64, 2, 3];
            items.push(4);
            Ok(vec![report("after push", &Value::ints(items))]) // [1, 2, 3, 4]
        },
        "extend with another sequence" => |_ctx| {
            let mut items = vec![1i64, 2];
            items.extend([3i64, 4, 5]);
            Ok(vec![report("after extend", &Value::ints(items))])
        },
        "insert at a position" => |_ctx| {
            let mut items = vec![1i64, 3, 4];
            items.insert(1, 2);
            Ok(vec![report("after insert", &Value::ints(items))]) // [1, 2, 3, 4]
        },
        "remove first occurrence" => |_ctx| {
            let mut items = vec![3i64, 1, 4, 1, 5];
            let pos = items
                .iter()
                .position(|&x| x == 1)
                .ok_or_else(|| classify(DomainError::ValueMissing("1".to_string())))?;
            items.remove(pos);
            Ok(vec![report("after remove(1)", &Value::ints(items))]) // [3, 4, 1, 5]
        },
        "remove an absent value" => |_ctx| {
            // Borrado sin guarda de un valor que no está: el paso falla.
            let mut items = vec![1i64, 2, 3];
            let pos = items
                .iter()
                .position(|&x| x == 99)
                .ok_or_else(|| classify(DomainError::ValueMissing("99".to_string())))?;
            items.remove(pos);
            Ok(vec![report("after remove(99)", &Value::ints(items))])
        },
        "pop the last element" => |_ctx| {
            let mut items = vec![1i64, 2, 3];
            let popped = items.pop().ok_or_else(|| {
                StepError::Structural("pop on empty sequence".to_string())
            })?;
            Ok(vec![
                report("popped", &Value::Int(popped)),      // 3
                report("remaining", &Value::ints(items)),   // [1, 2]
            ])
        },
        "position and count" => |_ctx| {
            let items = [3i64, 1, 4, 1, 5];
            let pos = items
                .iter()
                .position(|&x| x == 4)
                .ok_or_else(|| classify(DomainError::ValueMissing("4".to_string())))?;
            let count = items.iter().filter(|&&x| x == 1).count();
            Ok(vec![
                report("position of 4", &Value::Int(pos as i64)),  // 2
                report("count of 1", &Value::Int(count as i64)),   // 2
            ])
        },
        "sort ascending" => |_ctx| {
            let mut items = vec![3i64, 1, 4, 1, 5];
            items.sort_unstable();
            Ok(vec![report("sorted", &Value::ints(items))]) // [1, 1, 3, 4, 5]
        },
        "sort descending" => |_ctx| {
            let mut items = vec![3i64, 1, 4, 1, 5];
            items.sort_unstable_by(|a, b| b.cmp(a));
            Ok(vec![report("sorted desc", &Value::ints(items))]) // [5, 4, 3, 1, 1]
        },
        "reverse in place" => |_ctx| {
            let mut items = vec![1i64, 2, 3];
            items.reverse();
            Ok(vec![report("reversed", &Value::ints(items))]) // [3, 2, 1]
        },
        "dedup preserving order" => |_ctx| {
            let items = [1i64, 2, 2, 3, 1];
            let mut seen = std::collections::BTreeSet::new();
            let unique: Vec<i64> = items.iter().copied().filter(|x| seen.insert(*x)).collect();
            Ok(vec![report("unique", &Value::ints(unique))]) // [1, 2, 3]
        },
        "clone stays independent" => |_ctx| {
            let mut original = vec![1i64, 2, 3];
            let copy = original.clone();
            original.push(4);
            Ok(vec![
                report("original after push", &Value::ints(original)), // [1, 2, 3, 4]
                report("copy", &Value::ints(copy)),                    // [1, 2, 3]
            ])
        },
    ]
}
