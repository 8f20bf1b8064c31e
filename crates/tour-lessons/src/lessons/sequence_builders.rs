//! Pipelines de construcción de secuencias (map/filter/collect).
//!
//! El equivalente de las comprensiones de lista del material original.

use tour_core::{lesson_steps, DemonstrationStep};
use tour_domain::Value;

use super::report;

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "squares" => |_ctx| {
            let squares: Vec<i64> = (1..=5).map(|x| x * x).collect();
            Ok(vec![report("squares of 1..=5", &Value::ints(squares))]) // [1, 4, 9, 16, 25]
        },
        "evens only" => |_ctx| {
            let evens: Vec<i64> = (1..=10).filter(|x| x % 2 == 0).collect();
            Ok(vec![report("evens in 1..=10", &Value::ints(evens))]) // [2, 4, 6, 8, 10]
        },
        "transform and filter" => |_ctx| {
            let even_squares: Vec<i64> = (1..=10).filter(|x| x % 2 == 0).map(|x| x * x).collect();
            Ok(vec![report("squares of evens", &Value::ints(even_squares))]) // [4, 16, 36, 64, 100]
        },
        "lengths of words" => |_ctx| {
            let words = ["hello", "world", "rust", "tour"];
            let lengths: Vec<i64> = words.iter().map(|w| w.len() as i64).collect();
            Ok(vec![report("lengths", &Value::ints(lengths))]) // [5, 5, 4, 4]
        },
        "flatten nested" => |_ctx| {
            let nested = vec![vec![1i64, 2], vec![3, 4], vec![5]];
            let flat: Vec<i64> = nested.into_iter().flatten().collect();
            Ok(vec![report("flattened", &Value::ints(flat))]) // [1, 2, 3, 4, 5]
        },
        "conditional transform" => |_ctx| {
            // La forma con else: transforma distinto según la condición.
            let tagged: Vec<String> = (1i64..=5)
                .map(|x| if x % 2 == 0 { format!("{x}:even") } else { format!("{x}:odd") })
                .collect();
            Ok(vec![report("tagged", &Value::texts_owned(tagged))])
        },
        "pairs from two sequences" => |_ctx| {
            let colors = ["red", "green", "blue"];
            let sizes = ["S", "M", "L"];
            let pairs = Value::seq(colors.iter().zip(sizes.iter()).map(|(c, s)| {
                Value::tuple([Value::from(*c), Value::from(*s)])
            }));
            Ok(vec![report("paired", &pairs)])
        },
        "first letters" => |_ctx| {
            let words = ["banana", "apple", "sun", "ice", "cloud"];
            let initials: String = words.iter().filter_map(|w| w.chars().next()).collect();
            Ok(vec![report("initials", &Value::from(initials))]) // basic
        },
    ]
}
