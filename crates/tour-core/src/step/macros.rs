//! Macro declarativo para listas de pasos.
//!
//! Permite escribir una lección como una lista `etiqueta => cierre` sin
//! repetir el boilerplate de `Box::new(FnStep::new(...))` por paso.
//!
//! ```ignore
//! let steps = lesson_steps![
//!     "sort ascending" => |_ctx| { ... },
//!     "lookup with default" => |_ctx| { ... },
//! ];
//! ```

/// Construye un `Vec<Box<dyn DemonstrationStep>>` a partir de pares
/// `etiqueta => cierre`. El orden de escritura es el orden de ejecución.
#[macro_export]
macro_rules! lesson_steps {
    ( $( $label:expr => $op:expr ),* $(,)? ) => {{
        let steps: ::std::vec::Vec<::std::boxed::Box<dyn $crate::step::DemonstrationStep>> = ::std::vec![
            $( ::std::boxed::Box::new($crate::step::FnStep::new($label, $op)) ),*
        ];
        steps
    }};
}
