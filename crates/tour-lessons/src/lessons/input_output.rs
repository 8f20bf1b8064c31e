//! Entrada y salida.
//!
//! La única lección interactiva: sus pasos leen líneas por el contexto.
//! Las conversiones numéricas pasan por las guardas del dominio, de modo
//! que un texto inválido falla el paso (InputFormat) sin cortar el tour.

use tour_core::{lesson_steps, DemonstrationStep, Report};
use tour_domain::{parse_float, parse_int, Value};

use super::{classify, report};

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "plain output" => |_ctx| {
            Ok(vec![
                Report::note("", "Hello World!"),
                Report::note("", "This is a demonstration tour"),
            ])
        },
        "formatted greeting" => |_ctx| {
            let name = "Alice";
            let age = 30;
            Ok(vec![Report::note(
                "",
                format!("Hello, my name is {name} and I am {age} years old."),
            )])
        },
        "joined with separator" => |_ctx| {
            let words = ["Rust", "is", "awesome"];
            Ok(vec![Report::note("joined", words.join("-"))]) // Rust-is-awesome
        },
        "ask name and age" => |ctx| {
            let user_name = ctx.read_line("Enter your name: ")?;
            let user_age = ctx.read_line("Enter your age: ")?;
            Ok(vec![Report::note(
                "",
                format!("Hello {user_name}! You are {user_age} years old."),
            )])
        },
        "guarded numeric parse" => |ctx| {
            let raw = ctx.read_line("Enter a number: ")?;
            let number = parse_int(&raw).map_err(classify)?;
            Ok(vec![
                report("you entered", &Value::Int(number)),
                report("twice your number", &Value::Int(number * 2)),
            ])
        },
        "sum and product of two numbers" => |ctx| {
            let first = ctx.read_line("First number: ")?;
            let second = ctx.read_line("Second number: ")?;
            let a = parse_float(&first).map_err(classify)?;
            let b = parse_float(&second).map_err(classify)?;
            Ok(vec![
                report("sum", &Value::Float(a + b)),
                report("product", &Value::Float(a * b)),
            ])
        },
    ]
}
