//! Escenarios observables del tour: ordenamiento, defaults, guardas de
//! parseo y álgebra de conjuntos.

use serde_json::json;
use tour_core::{FailureKind, Runner, RunSummary, ScriptedPresenter, StepStatus};
use tour_domain::Value;
use tour_lessons::find;

fn run_lesson(id: &str, inputs: &[&str]) -> RunSummary {
    let lesson = find(id).expect("lesson in catalog");
    let steps = (lesson.build)();
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::with_inputs(inputs.iter().copied());
    runner.run(&steps, &mut presenter).expect("run should complete")
}

fn outcome<'a>(summary: &'a RunSummary, label: &str) -> &'a tour_core::StepOutcome {
    summary
        .steps
        .iter()
        .find(|s| s.label == label)
        .unwrap_or_else(|| panic!("missing step '{label}'"))
}

#[test]
fn ordenar_ascendente_produce_la_secuencia_ordenada() {
    let summary = run_lesson("sequence-methods", &[]);
    let step = outcome(&summary, "sort ascending");
    assert_eq!(step.status, StepStatus::FinishedOk);
    assert_eq!(step.reports[0].value, json!([1, 1, 3, 4, 5]));
}

#[test]
fn lookup_con_default_devuelve_el_default() {
    let summary = run_lesson("mappings", &[]);
    let step = outcome(&summary, "lookup with default");
    assert_eq!(step.status, StepStatus::FinishedOk);
    assert_eq!(step.reports[0].value, json!("Not provided"));
}

#[test]
fn parsear_texto_no_numerico_falla_y_el_tour_sigue() {
    // "abc" rompe la guarda numérica; los dos números siguientes alimentan
    // el último paso, que debe ejecutarse igual.
    let summary = run_lesson("input-output", &["Ada", "30", "abc", "2", "3"]);

    let parse = outcome(&summary, "guarded numeric parse");
    assert_eq!(parse.status, StepStatus::Failed);
    assert_eq!(parse.failure, Some(FailureKind::InputFormat));

    let next = outcome(&summary, "sum and product of two numbers");
    assert_eq!(next.status, StepStatus::FinishedOk);
    assert_eq!(next.reports[0].value, json!(5.0)); // 2 + 3
    assert_eq!(next.reports[1].value, json!(6.0)); // 2 * 3
}

#[test]
fn interseccion_de_conjuntos_con_igualdad_independiente_del_orden() {
    let summary = run_lesson("sets", &[]);
    let step = outcome(&summary, "intersection");
    assert_eq!(step.status, StepStatus::FinishedOk);
    assert_eq!(step.reports[0].value, json!([4, 5]));
    // El payload de un set construido en otro orden es el mismo.
    assert_eq!(step.reports[0].value, Value::int_set([5, 4]).to_json());
}

#[test]
fn pasos_no_interactivos_son_idempotentes() {
    for lesson in tour_lessons::catalog() {
        if lesson.id == "input-output" {
            continue; // depende de entrada externa
        }
        let first = {
            let steps = (lesson.build)();
            let mut runner = Runner::new();
            let mut presenter = ScriptedPresenter::new();
            runner.run(&steps, &mut presenter).expect("first run")
        };
        let second = {
            let steps = (lesson.build)();
            let mut runner = Runner::new();
            let mut presenter = ScriptedPresenter::new();
            runner.run(&steps, &mut presenter).expect("second run")
        };
        assert_eq!(
            first.steps, second.steps,
            "la lección '{}' no es idempotente",
            lesson.id
        );
    }
}

#[test]
fn las_lecciones_con_demostracion_de_fallo_reportan_lookup() {
    for (id, label) in [
        ("sequences", "index out of range"),
        ("sequence-methods", "remove an absent value"),
        ("mapping-methods", "remove an absent key"),
        ("sets", "remove an absent member"),
    ] {
        let summary = run_lesson(id, &[]);
        let step = outcome(&summary, label);
        assert_eq!(step.status, StepStatus::Failed, "paso '{label}' de {id}");
        assert_eq!(step.failure, Some(FailureKind::Lookup));
        // El último paso de la lección corre igual.
        let last = summary.steps.last().expect("non-empty summary");
        assert_eq!(last.status, StepStatus::FinishedOk, "último paso de {id}");
    }
}
