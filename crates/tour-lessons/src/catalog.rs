//! Catálogo de lecciones, en el orden de lectura del material original.

use once_cell::sync::Lazy;
use tour_core::DemonstrationStep;

use crate::lessons;

/// Una lección: id estable, título y constructor de sus pasos.
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub build: fn() -> Vec<Box<dyn DemonstrationStep>>,
}

static CATALOG: Lazy<Vec<Lesson>> = Lazy::new(|| {
    vec![
        Lesson { id: "variables",
                 title: "Variables and value types",
                 build: lessons::variables::steps },
        Lesson { id: "input-output",
                 title: "Input and output",
                 build: lessons::input_output::steps },
        Lesson { id: "operators",
                 title: "Operators",
                 build: lessons::operators::steps },
        Lesson { id: "control-flow",
                 title: "Control flow",
                 build: lessons::control_flow::steps },
        Lesson { id: "loops",
                 title: "Loops",
                 build: lessons::loops::steps },
        Lesson { id: "mappings",
                 title: "Mappings",
                 build: lessons::mappings::steps },
        Lesson { id: "mapping-methods",
                 title: "Mapping methods",
                 build: lessons::mapping_methods::steps },
        Lesson { id: "sequences",
                 title: "Sequences",
                 build: lessons::sequences::steps },
        Lesson { id: "sequence-methods",
                 title: "Sequence methods",
                 build: lessons::sequence_methods::steps },
        Lesson { id: "sequence-builders",
                 title: "Sequence builder pipelines",
                 build: lessons::sequence_builders::steps },
        Lesson { id: "mapping-builders",
                 title: "Mapping builder pipelines",
                 build: lessons::mapping_builders::steps },
        Lesson { id: "tuples",
                 title: "Tuples",
                 build: lessons::tuples::steps },
        Lesson { id: "sets",
                 title: "Sets",
                 build: lessons::sets::steps },
    ]
});

/// Todas las lecciones en orden de catálogo.
pub fn catalog() -> &'static [Lesson] {
    &CATALOG
}

/// Busca una lección por id.
pub fn find(id: &str) -> Option<&'static Lesson> {
    CATALOG.iter().find(|l| l.id == id)
}
