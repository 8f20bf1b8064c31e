//! Recorrido completo del catálogo, de punta a punta y sin terminal.

use tour_core::{Runner, ScriptedPresenter, StepStatus};
use tour_lessons::catalog;

/// Entradas guionadas que consume la lección interactiva.
const SCRIPTED_INPUTS: [&str; 5] = ["Ada", "36", "7", "2.5", "4"];

#[test]
fn el_tour_completo_produce_un_resumen_por_paso() {
    let mut runner = Runner::new();

    for lesson in catalog() {
        let steps = (lesson.build)();
        let mut presenter = if lesson.id == "input-output" {
            ScriptedPresenter::with_inputs(SCRIPTED_INPUTS)
        } else {
            ScriptedPresenter::new()
        };

        let summary = runner
            .run(&steps, &mut presenter)
            .unwrap_or_else(|e| panic!("runner error en '{}': {e}", lesson.id));

        assert_eq!(summary.len(), steps.len(), "lección '{}'", lesson.id);
        for (idx, outcome) in summary.steps.iter().enumerate() {
            assert_eq!(outcome.position, idx);
            assert_ne!(outcome.status, StepStatus::Pending, "paso sin ejecutar en '{}'", lesson.id);
        }
    }
}

#[test]
fn solo_las_lecciones_con_demostracion_de_fallo_fallan() {
    let expected_failures = |id: &str| -> usize {
        match id {
            "sequences" | "sequence-methods" | "mapping-methods" | "sets" => 1,
            _ => 0,
        }
    };

    let mut runner = Runner::new();
    for lesson in catalog() {
        let steps = (lesson.build)();
        let mut presenter = if lesson.id == "input-output" {
            ScriptedPresenter::with_inputs(SCRIPTED_INPUTS)
        } else {
            ScriptedPresenter::new()
        };
        let summary = runner.run(&steps, &mut presenter).expect("run");
        assert_eq!(
            summary.failed(),
            expected_failures(lesson.id),
            "fallos inesperados en '{}'",
            lesson.id
        );
    }
}

#[test]
fn con_entrada_interactiva_valida_se_hace_eco_y_se_calcula() {
    let lesson = tour_lessons::find("input-output").expect("lesson");
    let steps = (lesson.build)();
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::with_inputs(SCRIPTED_INPUTS);
    let summary = runner.run(&steps, &mut presenter).expect("run");

    assert_eq!(summary.failed(), 0);
    let shown = presenter.displayed().join("\n");
    assert!(shown.contains("Hello Ada! You are 36 years old."));
    assert!(shown.contains("twice your number: 14"));
    assert!(shown.contains("sum: 6.5"));
    assert!(shown.contains("product: 10.0"));
}

#[test]
fn sin_entrada_la_leccion_interactiva_falla_pero_no_corta_el_tour() {
    let lesson = tour_lessons::find("input-output").expect("lesson");
    let steps = (lesson.build)();
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::new(); // cola vacía
    let summary = runner.run(&steps, &mut presenter).expect("run");

    // Los pasos que no leen entrada siguen funcionando.
    assert_eq!(summary.len(), steps.len());
    assert!(summary.succeeded() >= 3);
    assert_eq!(summary.failed(), 3); // los tres pasos que leen
}
