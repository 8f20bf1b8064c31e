//! Propiedades del log de eventos y de su replay.

use serde_json::json;
use tour_core::{
    lesson_steps, DemonstrationStep, EventStore, InMemoryEventStore, Report, RunEventKind,
    Runner, RunSummary, ScriptedPresenter, StepError, StepStatus,
};
use uuid::Uuid;

fn mixed_steps() -> Vec<Box<dyn DemonstrationStep>> {
    lesson_steps![
        "ok-a" => |_ctx| Ok(vec![Report::new("r", "a", json!("a"))]),
        "falla" => |_ctx| Err(StepError::Structural("boom".to_string())),
        "ok-b" => |_ctx| Ok(vec![]),
    ]
}

#[test]
fn el_log_abre_con_run_started_y_cierra_con_run_completed() {
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::new();
    runner.run(&mixed_steps(), &mut presenter).expect("run");

    let events = runner.events().expect("events of last run");
    assert!(matches!(events.first().map(|e| &e.kind),
                     Some(RunEventKind::RunStarted { step_count: 3 })));
    assert!(matches!(events.last().map(|e| &e.kind),
                     Some(RunEventKind::RunCompleted { succeeded: 2, failed: 1 })));
}

#[test]
fn seq_es_estrictamente_creciente() {
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::new();
    runner.run(&mixed_steps(), &mut presenter).expect("run");

    let events = runner.events().expect("events of last run");
    for (i, ev) in events.iter().enumerate() {
        assert_eq!(ev.seq, i as u64, "seq must match append order");
    }
}

#[test]
fn cada_paso_tiene_started_y_un_cierre() {
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::new();
    runner.run(&mixed_steps(), &mut presenter).expect("run");

    let events = runner.events().expect("events of last run");
    for idx in 0..3usize {
        let started = events.iter().any(|e| {
            matches!(&e.kind, RunEventKind::StepStarted { step_index, .. } if *step_index == idx)
        });
        let closed = events.iter().any(|e| {
            matches!(&e.kind,
                     RunEventKind::StepFinished { step_index, .. }
                     | RunEventKind::StepFailed { step_index, .. } if *step_index == idx)
        });
        assert!(started, "missing StepStarted for {idx}");
        assert!(closed, "missing terminal event for {idx}");
    }
}

#[test]
fn el_replay_del_log_reproduce_el_resumen_devuelto() {
    let steps = mixed_steps();
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::new();
    let summary = runner.run(&steps, &mut presenter).expect("run");

    let run_id = runner.last_run_id().expect("run id");
    let events = runner.event_store().list(run_id);
    let labels: Vec<String> = steps.iter().map(|s| s.label().to_string()).collect();
    let replayed = RunSummary::from_events(run_id, &events, &labels);

    assert_eq!(replayed, summary);
}

#[test]
fn ejecuciones_sucesivas_usan_run_ids_distintos() {
    let steps = mixed_steps();
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::new();

    let first = runner.run(&steps, &mut presenter).expect("first run");
    let second = runner.run(&steps, &mut presenter).expect("second run");

    assert_ne!(first.run_id, second.run_id);
    // Ambos logs siguen disponibles en el store.
    assert!(!runner.event_store().list(first.run_id).is_empty());
    assert!(!runner.event_store().list(second.run_id).is_empty());
}

#[test]
fn store_en_memoria_lista_vacio_para_run_desconocido() {
    let store = InMemoryEventStore::new();
    assert!(store.list(Uuid::new_v4()).is_empty());
}

#[test]
fn pasos_sin_reports_cuentan_como_exito() {
    let steps = lesson_steps![
        "silencioso" => |_ctx| Ok(vec![]),
    ];
    let mut runner = Runner::new();
    let mut presenter = ScriptedPresenter::new();
    let summary = runner.run(&steps, &mut presenter).expect("run");

    assert_eq!(summary.steps[0].status, StepStatus::FinishedOk);
    assert!(summary.steps[0].reports.is_empty());
    assert!(presenter.displayed().is_empty());
}
