//! tour-core: motor lineal de pasos de demostración.
pub mod engine;
pub mod errors;
pub mod event;
pub mod model;
pub mod presenter;
pub mod step;
pub mod summary;

pub use engine::Runner;
pub use errors::{FailureKind, RunnerError, StepError};
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use model::Report;
pub use presenter::{ConsolePresenter, Presenter, ScriptedPresenter};
pub use step::{DemonstrationStep, FnStep, StepContext, StepRunResult, StepStatus};
pub use summary::{RunSummary, StepOutcome};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn demo_steps() -> Vec<Box<dyn DemonstrationStep>> {
        crate::lesson_steps![
            "uno" => |_ctx| Ok(vec![Report::new("v", "1", json!(1))]),
            "dos" => |_ctx| Err(StepError::Lookup("clave ausente".to_string())),
            "tres" => |_ctx| Ok(vec![
                Report::new("a", "x", json!("x")),
                Report::new("b", "y", json!("y")),
            ]),
        ]
    }

    #[test]
    fn resumen_cubre_todos_los_pasos_en_orden() {
        let mut runner = Runner::new();
        let mut presenter = ScriptedPresenter::new();
        let summary = runner.run(&demo_steps(), &mut presenter).expect("run should complete");

        assert_eq!(summary.len(), 3);
        let labels: Vec<&str> = summary.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["uno", "dos", "tres"]);
        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 1);
    }

    #[test]
    fn el_fallo_de_un_paso_no_corta_la_secuencia() {
        let mut runner = Runner::new();
        let mut presenter = ScriptedPresenter::new();
        let summary = runner.run(&demo_steps(), &mut presenter).expect("run should complete");

        assert_eq!(summary.steps[1].status, StepStatus::Failed);
        assert_eq!(summary.steps[1].failure, Some(FailureKind::Lookup));
        // El paso posterior al fallo igual produce su entrada y sus reports.
        assert_eq!(summary.steps[2].status, StepStatus::FinishedOk);
        assert_eq!(summary.steps[2].reports.len(), 2);
        assert_eq!(summary.steps[2].reports[0].label, "a");
    }

    #[test]
    fn los_reports_llegan_al_presenter_en_orden() {
        let mut runner = Runner::new();
        let mut presenter = ScriptedPresenter::new();
        runner.run(&demo_steps(), &mut presenter).expect("run should complete");

        let shown = presenter.displayed();
        assert_eq!(shown[0], "v: 1");
        assert!(shown[1].contains("step 'dos' failed"));
        assert_eq!(&shown[2..], &["a: x".to_string(), "b: y".to_string()]);
    }

    #[test]
    fn secuencia_vacia_es_error_del_motor() {
        let mut runner = Runner::new();
        let mut presenter = ScriptedPresenter::new();
        let err = runner.run(&[], &mut presenter).unwrap_err();
        assert_eq!(err, RunnerError::EmptySequence);
    }

    #[test]
    fn clasificacion_de_errores() {
        let e = StepError::InputFormat { input: "abc".into(), expected: "int".into() };
        assert_eq!(e.kind(), FailureKind::InputFormat);
        assert_eq!(StepError::Lookup("x".into()).kind(), FailureKind::Lookup);
        assert_eq!(StepError::Structural("y".into()).kind(), FailureKind::Structural);
    }
}
