//! Bucles: rangos, iteración de secuencias, while, break y continue.

use tour_core::{lesson_steps, DemonstrationStep, Report};
use tour_domain::Value;

use super::report;

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "count up" => |_ctx| {
            let counts: Vec<i64> = (1..=5).collect();
            Ok(vec![report("1 to 5", &Value::ints(counts))])
        },
        "count down" => |_ctx| {
            let counts: Vec<i64> = (1..=5).rev().collect();
            Ok(vec![report("5 to 1", &Value::ints(counts))]) // [5, 4, 3, 2, 1]
        },
        "iterate a sequence" => |_ctx| {
            let fruits = ["apple", "banana", "orange", "grape"];
            Ok(fruits
                .iter()
                .map(|fruit| Report::note("", format!("I like {fruit}")))
                .collect())
        },
        "enumerate" => |_ctx| {
            let fruits = ["apple", "banana", "orange"];
            Ok(fruits
                .iter()
                .enumerate()
                .map(|(index, fruit)| Report::note("", format!("{}. {fruit}", index + 1)))
                .collect())
        },
        "chars of a word" => |_ctx| {
            let word = "Rust";
            let chars = Value::seq(word.chars().map(|c| Value::Text(c.to_string())));
            Ok(vec![report("characters", &chars)])
        },
        "while with counter" => |_ctx| {
            let mut counter = 0i64;
            let mut seen = Vec::new();
            while counter < 3 {
                seen.push(counter);
                counter += 1;
            }
            Ok(vec![
                report("counter values", &Value::ints(seen)),
                Report::note("", "Loop finished!"),
            ])
        },
        "break at three" => |_ctx| {
            let mut before_break = Vec::new();
            for i in 1i64..=5 {
                if i == 3 {
                    break;
                }
                before_break.push(i);
            }
            Ok(vec![report("seen before break", &Value::ints(before_break))]) // [1, 2]
        },
        "skip even numbers" => |_ctx| {
            let mut odds = Vec::new();
            for i in 1i64..=5 {
                if i % 2 == 0 {
                    continue;
                }
                odds.push(i);
            }
            Ok(vec![report("odd numbers", &Value::ints(odds))]) // [1, 3, 5]
        },
        "multiplication table" => |_ctx| {
            let mut rows = Vec::new();
            for i in 1i64..=3 {
                let row: Vec<i64> = (1i64..=3).map(|j| i * j).collect();
                rows.push(Value::ints(row));
            }
            Ok(vec![report("table 1-3", &Value::seq(rows))])
        },
        "search without break" => |_ctx| {
            // Equivalente del else de bucle: si la búsqueda no corta, se
            // informa la ausencia.
            let numbers = [1i64, 5, 8];
            let found = numbers.iter().find(|&&n| n > 10);
            let outcome = match found {
                Some(n) => format!("found {n}"),
                None => "no element exceeds 10".to_string(),
            };
            Ok(vec![Report::note("search", outcome)])
        },
    ]
}
