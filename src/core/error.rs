use thiserror::Error;

use crate::core::types::StepIndex;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    #[error("Invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { ch: char, row: usize, col: usize },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("No repeated state found within {steps} cycle steps")]
    CycleNotFound { steps: StepIndex },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl SimError {
    /// Errors that indicate a defect in the simulator rather than bad input
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SimError::InvariantViolation(_) | SimError::CycleNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(SimError::InvariantViolation("x".into()).is_fatal());
        assert!(SimError::CycleNotFound { steps: 10 }.is_fatal());
        assert!(!SimError::MalformedGrid("ragged".into()).is_fatal());
        assert!(!SimError::Config("bad".into()).is_fatal());
    }

    #[test]
    fn test_invalid_cell_message() {
        let err = SimError::InvalidCell { ch: 'x', row: 2, col: 5 };
        assert_eq!(err.to_string(), "Invalid cell 'x' at row 2, column 5");
    }
}
