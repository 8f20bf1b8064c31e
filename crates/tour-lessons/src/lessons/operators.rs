//! Operadores aritméticos, de comparación, lógicos y compuestos.

use tour_core::{lesson_steps, DemonstrationStep};
use tour_domain::Value;

use super::report;

pub fn steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "arithmetic" => |_ctx| {
            let a = 10i64;
            let b = 3i64;
            Ok(vec![
                report("10 + 3", &Value::Int(a + b)),           // 13
                report("10 - 3", &Value::Int(a - b)),           // 7
                report("10 * 3", &Value::Int(a * b)),           // 30
                report("10 / 3 (float)", &Value::Float(a as f64 / b as f64)),
                report("10 / 3 (integer)", &Value::Int(a / b)), // 3
                report("10 % 3", &Value::Int(a % b)),           // 1
                report("10 ^ 3", &Value::Int(a.pow(b as u32))), // 1000
            ])
        },
        "comparison" => |_ctx| {
            let x = 5i64;
            let y = 10i64;
            Ok(vec![
                report("5 == 10", &Value::Bool(x == y)),
                report("5 != 10", &Value::Bool(x != y)),
                report("5 < 10", &Value::Bool(x < y)),
                report("5 > 10", &Value::Bool(x > y)),
                report("5 <= 10", &Value::Bool(x <= y)),
                report("5 >= 10", &Value::Bool(x >= y)),
            ])
        },
        "logical" => |_ctx| {
            let p = true;
            let q = false;
            Ok(vec![
                report("p && q", &Value::Bool(p && q)),
                report("p || q", &Value::Bool(p || q)),
                report("!p", &Value::Bool(!p)),
                report("!q", &Value::Bool(!q)),
            ])
        },
        "compound assignment" => |_ctx| {
            let mut num = 5i64;
            let mut out = vec![report("original", &Value::Int(num))];
            num += 3;
            out.push(report("after += 3", &Value::Int(num))); // 8
            num -= 2;
            out.push(report("after -= 2", &Value::Int(num))); // 6
            num *= 4;
            out.push(report("after *= 4", &Value::Int(num))); // 24
            let mut dec = num as f64;
            dec /= 2.0;
            out.push(report("after /= 2", &Value::Float(dec))); // 12.0
            Ok(out)
        },
        "membership" => |_ctx| {
            let items = vec![1i64, 2, 3];
            Ok(vec![
                report("2 in [1, 2, 3]", &Value::Bool(items.contains(&2))),
                report("5 not in [1, 2, 3]", &Value::Bool(!items.contains(&5))),
            ])
        },
        "equality of separate sequences" => |_ctx| {
            // Dos construcciones independientes con el mismo contenido son
            // iguales por valor; un clon también, y sigue siendo independiente.
            let list1 = vec![1i64, 2, 3];
            let list2 = vec![1i64, 2, 3];
            let mut alias = list1.clone();
            alias.push(4);
            Ok(vec![
                report("list1 == list2", &Value::Bool(list1 == list2)),
                report("clone after push", &Value::ints(alias)),
                report("original untouched", &Value::ints(list1)),
            ])
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_leccion_tiene_pasos_con_etiquetas_unicas() {
        let steps = steps();
        let mut labels: Vec<&str> = steps.iter().map(|s| s.label()).collect();
        let total = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }
}
