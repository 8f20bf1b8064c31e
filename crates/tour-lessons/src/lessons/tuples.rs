//! Tuplas: acceso, inmutabilidad, desempaquetado y usos como clave.

use std::collections::BTreeMap;

use tour_core::{lesson_steps, DemonstrationStep, Report, StepError};
use tour_domain::Value;

use super::{classify, report};

/// División entera con resto, el ejemplo clásico de función que devuelve
/// un par.
fn divmod(a: i64, b: i64) -> Result<(i64, i64), StepError> {
    if b == 0 {
        return Err(StepError::Structural("division by zero".to_string()));
    }
    Ok((a / b, a % b))
}

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "construct" => |_ctx| {
            let point = Value::tuple([Value::Int(3), Value::Int(4)]);
            let person = Value::tuple([
                Value::from("Alice"),
                Value::Int(25),
                Value::from("New York"),
            ]);
            Ok(vec![
                report("point", &point),
                report("person", &person),
            ])
        },
        "single element tuple" => |_ctx| {
            let single = Value::tuple([Value::Int(7)]);
            Ok(vec![report("single", &single)]) // (7,)
        },
        "access by position" => |_ctx| {
            let person = Value::tuple([Value::from("Alice"), Value::Int(25)]);
            let name = person.item(0).map_err(classify)?.clone();
            let age = person.item(1).map_err(classify)?.clone();
            Ok(vec![
                report("name", &name),
                report("age", &age),
            ])
        },
        "count and position" => |_ctx| {
            let numbers = [1i64, 2, 2, 3];
            let twos = numbers.iter().filter(|&&n| n == 2).count();
            let pos_of_3 = numbers.iter().position(|&n| n == 3);
            Ok(vec![
                report("count of 2", &Value::Int(twos as i64)),
                report(
                    "position of 3",
                    &Value::Int(pos_of_3.map(|p| p as i64).unwrap_or(-1)),
                ),
            ])
        },
        "clone to change" => |_ctx| {
            // Las tuplas no se mutan: para "cambiar" una se construye otra.
            let original = Value::tuple([Value::Int(1), Value::Int(2), Value::Int(3)]);
            let changed = Value::tuple([Value::Int(1), Value::Int(99), Value::Int(3)]);
            Ok(vec![
                report("original", &original),
                report("rebuilt with change", &changed),
            ])
        },
        "unpack" => |_ctx| {
            let (x, y) = (3i64, 4i64);
            Ok(vec![
                report("x", &Value::Int(x)),
                report("y", &Value::Int(y)),
            ])
        },
        "swap" => |_ctx| {
            let (mut a, mut b) = (1i64, 2i64);
            (a, b) = (b, a);
            Ok(vec![report(
                "after swap",
                &Value::tuple([Value::Int(a), Value::Int(b)]),
            )]) // (2, 1)
        },
        "tuple as map key" => |_ctx| {
            let mut grid: BTreeMap<(i64, i64), &str> = BTreeMap::new();
            grid.insert((0, 0), "origin");
            grid.insert((1, 2), "target");
            let entries = Value::texts_owned(
                grid.iter().map(|((x, y), name)| format!("({x}, {y}) -> {name}")),
            );
            Ok(vec![report("grid", &entries)])
        },
        "min and max over numbers" => |_ctx| {
            let numbers = (3i64, 1i64, 4i64);
            let items = [numbers.0, numbers.1, numbers.2];
            let min = items.iter().min().copied().unwrap_or_default();
            let max = items.iter().max().copied().unwrap_or_default();
            Ok(vec![
                report("min", &Value::Int(min)),
                report("max", &Value::Int(max)),
            ])
        },
        "function returning a pair" => |_ctx| {
            let (quotient, remainder) = divmod(17, 5)?;
            Ok(vec![
                Report::note("divmod(17, 5)", format!("({quotient}, {remainder})")),
                report("quotient", &Value::Int(quotient)),   // 3
                report("remainder", &Value::Int(remainder)), // 2
            ])
        },
    ]
}
