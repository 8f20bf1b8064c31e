//! Presenter: la capacidad externa de entrada/salida.
//!
//! El runner y los pasos dependen sólo de esta interfaz estrecha; la
//! satisface igualmente una consola real, un sink de log o un capturador
//! de tests. El runner no hace IO directo en ningún otro punto.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::errors::StepError;

pub trait Presenter {
    /// Muestra una línea de texto.
    fn display(&mut self, text: &str);

    /// Pide una línea al usuario. Bloqueante. Los fallos de IO se
    /// clasifican como `Structural` para que el runner los registre como
    /// fallo del paso y continúe.
    fn read_line(&mut self, prompt: &str) -> Result<String, StepError>;
}

/// Presenter de consola: stdout para mostrar, stdin para leer.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn display(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        // Un pipe roto no debe tumbar el tour; se ignora el error de escritura.
        let _ = writeln!(out, "{text}");
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, StepError> {
        {
            let mut out = io::stdout().lock();
            let _ = write!(out, "{prompt}");
            let _ = out.flush();
        }
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| StepError::Structural(format!("stdin: {e}")))?;
        if read == 0 {
            return Err(StepError::Structural("end of input".to_string()));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Presenter guionado para tests: entradas en cola, salida capturada.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    inputs: VecDeque<String>,
    displayed: Vec<String>,
}

impl ScriptedPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea el presenter con las líneas que responderá, en orden.
    pub fn with_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            displayed: Vec::new(),
        }
    }

    /// Todo lo mostrado hasta ahora, en orden de emisión.
    pub fn displayed(&self) -> &[String] {
        &self.displayed
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Presenter for ScriptedPresenter {
    fn display(&mut self, text: &str) {
        self.displayed.push(text.to_string());
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String, StepError> {
        self.inputs
            .pop_front()
            .ok_or_else(|| StepError::Structural("scripted input exhausted".to_string()))
    }
}
