use crate::errors::StepError;
use crate::model::Report;

/// Resultado abstracto de ejecutar un paso.
pub enum StepRunResult {
    Success { reports: Vec<Report> },
    Failure { error: StepError },
}

impl From<Result<Vec<Report>, StepError>> for StepRunResult {
    fn from(res: Result<Vec<Report>, StepError>) -> Self {
        match res {
            Ok(reports) => StepRunResult::Success { reports },
            Err(error) => StepRunResult::Failure { error },
        }
    }
}
