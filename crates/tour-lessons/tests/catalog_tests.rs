//! Integridad del catálogo de lecciones.

use std::collections::BTreeSet;

use tour_core::DemonstrationStep;
use tour_lessons::{catalog, find};

#[test]
fn el_catalogo_tiene_trece_lecciones_en_orden() {
    let ids: Vec<&str> = catalog().iter().map(|l| l.id).collect();
    assert_eq!(
        ids,
        vec![
            "variables",
            "input-output",
            "operators",
            "control-flow",
            "loops",
            "mappings",
            "mapping-methods",
            "sequences",
            "sequence-methods",
            "sequence-builders",
            "mapping-builders",
            "tuples",
            "sets",
        ]
    );
}

#[test]
fn ids_unicos_y_localizables() {
    let mut seen = BTreeSet::new();
    for lesson in catalog() {
        assert!(seen.insert(lesson.id), "id duplicado: {}", lesson.id);
        assert!(find(lesson.id).is_some());
    }
    assert!(find("no-such-lesson").is_none());
}

#[test]
fn toda_leccion_tiene_pasos_con_etiquetas_unicas() {
    for lesson in catalog() {
        let steps = (lesson.build)();
        assert!(!steps.is_empty(), "lección sin pasos: {}", lesson.id);

        let mut labels = BTreeSet::new();
        for step in &steps {
            assert!(
                labels.insert(step.label().to_string()),
                "etiqueta duplicada '{}' en {}",
                step.label(),
                lesson.id
            );
        }
    }
}
