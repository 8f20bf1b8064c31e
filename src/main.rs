//! Punto de entrada del tour.
//!
//! CLI mínima: `langtour [--list] [--json] [LECCION ...]`. Sin argumentos
//! corre el catálogo completo en orden. Los fallos de pasos individuales
//! se reportan y no cambian el estado de salida; sólo los errores de uso
//! terminan con estado distinto de cero.

use tour_core::{ConsolePresenter, Presenter, Runner};
use tour_lessons::{catalog, find, Lesson};

fn main() {
    std::process::exit(run_cli());
}

fn print_usage() {
    println!("usage: langtour [--list] [--json] [LESSON ...]");
    println!("  --list   show the lesson catalog and exit");
    println!("  --json   print the run summaries as JSON at the end");
}

fn run_cli() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut list = false;
    let mut json = false;
    let mut ids: Vec<String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "--list" => list = true,
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return 0;
            }
            other if other.starts_with('-') => {
                eprintln!("[langtour] opción desconocida: {other}");
                print_usage();
                return 2;
            }
            other => ids.push(other.to_string()),
        }
    }

    if list {
        for lesson in catalog() {
            println!("{:<18} {}", lesson.id, lesson.title);
        }
        return 0;
    }

    let selected: Vec<&Lesson> = if ids.is_empty() {
        catalog().iter().collect()
    } else {
        let mut chosen = Vec::new();
        for id in &ids {
            match find(id) {
                Some(lesson) => chosen.push(lesson),
                None => {
                    eprintln!("[langtour] lección desconocida: {id} (ver --list)");
                    return 2;
                }
            }
        }
        chosen
    };

    let mut runner = Runner::new();
    let mut presenter = ConsolePresenter::new();
    let mut summaries = Vec::new();

    for lesson in selected {
        presenter.display(&format!("=== {} ===", lesson.title));
        let steps = (lesson.build)();
        match runner.run(&steps, &mut presenter) {
            Ok(summary) => {
                presenter.display(&format!(
                    "--- {}: {} ok, {} failed ---",
                    lesson.id,
                    summary.succeeded(),
                    summary.failed()
                ));
                summaries.push(summary);
            }
            Err(e) => {
                // Error del motor, no de un paso; se informa y se sigue
                // con la siguiente lección.
                eprintln!("[langtour] runner error en '{}': {e}", lesson.id);
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&summaries) {
            Ok(body) => println!("{body}"),
            Err(e) => eprintln!("[langtour] no se pudo serializar el resumen: {e}"),
        }
    }

    0
}
