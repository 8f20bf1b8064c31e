//! Secuencias: creación, acceso, rebanadas y agregados.

use tour_core::{lesson_steps, DemonstrationStep, StepError};
use tour_domain::Value;

use super::{classify, report};

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "create" => |_ctx| {
            let numbers = Value::ints([1, 2, 3, 4, 5]);
            let mixed = Value::seq([
                Value::from("text"),
                Value::Int(42),
                Value::Float(3.25),
                Value::Bool(true),
            ]);
            Ok(vec![
                report("numbers", &numbers),
                report("mixed", &mixed),
            ])
        },
        "index access" => |_ctx| {
            let fruits = Value::texts(["apple", "banana", "orange"]);
            let first = fruits.item(0).map_err(classify)?.clone();
            let last_index = fruits.len().unwrap_or(0).saturating_sub(1);
            let last = fruits.item(last_index).map_err(classify)?.clone();
            Ok(vec![
                report("first", &first),
                report("last", &last),
            ])
        },
        "index out of range" => |_ctx| {
            // Acceso sin guarda a un índice inexistente: el paso falla.
            let numbers = Value::ints([1, 2, 3]);
            let tenth = numbers.item(10).map_err(classify)?.clone();
            Ok(vec![report("tenth", &tenth)])
        },
        "slice" => |_ctx| {
            let numbers = [0i64, 1, 2, 3, 4, 5];
            let middle = Value::ints(numbers[1..4].iter().copied());
            Ok(vec![report("items 1..4", &middle)]) // [1, 2, 3]
        },
        "mutate an element" => |_ctx| {
            let mut numbers = vec![1i64, 2, 3];
            numbers[1] = 99;
            Ok(vec![report("after assignment", &Value::ints(numbers))]) // [1, 99, 3]
        },
        "concat and repeat" => |_ctx| {
            let mut joined = vec![1i64, 2];
            joined.extend([3i64, 4]);
            let repeated = vec![0i64; 3].repeat(2);
            Ok(vec![
                report("concatenated", &Value::ints(joined)),   // [1, 2, 3, 4]
                report("repeated", &Value::ints(repeated)),     // [0, 0, 0, 0, 0, 0]
            ])
        },
        "aggregates" => |_ctx| {
            let numbers = [3i64, 1, 4, 1, 5];
            let min = numbers.iter().min().copied().ok_or_else(|| {
                StepError::Structural("empty sequence has no minimum".to_string())
            })?;
            let max = numbers.iter().max().copied().ok_or_else(|| {
                StepError::Structural("empty sequence has no maximum".to_string())
            })?;
            let sum: i64 = numbers.iter().sum();
            Ok(vec![
                report("length", &Value::Int(numbers.len() as i64)),
                report("min", &Value::Int(min)),
                report("max", &Value::Int(max)),
                report("sum", &Value::Int(sum)),
            ])
        },
    ]
}
