//! Condicionales: if/else, escaleras de rangos y condiciones anidadas.
//!
//! Sin coerciones implícitas a booleano: cada condición es un predicado
//! booleano explícito en la definición del paso.

use tour_core::{lesson_steps, DemonstrationStep, Report};
use tour_domain::Value;

use super::report;

fn grade_for(score: i64) -> &'static str {
    match score {
        90..=100 => "A",
        80..=89 => "B",
        70..=79 => "C",
        60..=69 => "D",
        _ => "F",
    }
}

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "if-else adult check" => |_ctx| {
            let age = 20i64;
            let verdict = if age >= 18 { "You are an adult" } else { "You are a minor" };
            Ok(vec![
                report("age", &Value::Int(age)),
                Report::note("verdict", verdict),
            ])
        },
        "grade ladder" => |_ctx| {
            let score = 85i64;
            Ok(vec![
                report("score", &Value::Int(score)),
                Report::note("grade", grade_for(score)), // B
            ])
        },
        "grade ladder sweep" => |_ctx| {
            let scores = [95i64, 85, 75, 65, 50];
            let grades = Value::texts(scores.iter().map(|&s| grade_for(s)));
            Ok(vec![report("grades for [95, 85, 75, 65, 50]", &grades)])
        },
        "nested conditions" => |_ctx| {
            let weather = "sunny";
            let temperature = 25i64;
            let remark = if weather == "sunny" {
                if temperature > 30 { "Hot sunny day!" } else { "Nice sunny day!" }
            } else {
                "Not a sunny day"
            };
            Ok(vec![Report::note("remark", remark)])
        },
    ]
}
