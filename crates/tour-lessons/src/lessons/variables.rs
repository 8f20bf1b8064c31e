//! Variables y tipos de valor.

use tour_core::{lesson_steps, DemonstrationStep, Report};
use tour_domain::Value;

use super::report;

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "typed bindings" => |_ctx| {
            let name = Value::from("John");
            let age = Value::Int(25);
            let height = Value::Float(5.9);
            let is_student = Value::Bool(true);
            Ok(vec![
                report("name", &name),
                report("age", &age),
                report("height", &height),
                report("is student", &is_student),
            ])
        },
        "type names" => |_ctx| {
            let samples = [
                ("name", Value::from("John")),
                ("age", Value::Int(25)),
                ("height", Value::Float(5.9)),
                ("is student", Value::Bool(true)),
            ];
            Ok(samples
                .iter()
                .map(|(label, v)| Report::note(format!("type of {label}"), v.type_name()))
                .collect())
        },
        "copies are independent" => |_ctx| {
            let x = Value::Int(10);
            let mut y = x.clone();
            let copy = report("y (copy of x)", &y);
            // Cambiar la copia no toca el original.
            y = Value::Int(99);
            Ok(vec![
                report("x", &x),
                copy,
                report("y after change", &y),
            ])
        },
        "multiple assignment" => |_ctx| {
            let (a, b, c) = (1i64, 2i64, 3i64);
            Ok(vec![report(
                "a, b, c",
                &Value::tuple([Value::Int(a), Value::Int(b), Value::Int(c)]),
            )])
        },
        "constants" => |_ctx| {
            const PI: f64 = 3.14159;
            const MAX_SIZE: i64 = 100;
            Ok(vec![
                report("PI", &Value::Float(PI)),
                report("MAX_SIZE", &Value::Int(MAX_SIZE)),
            ])
        },
    ]
}
