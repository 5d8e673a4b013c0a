//! Error types for intake operations

use thiserror::Error;

use crate::domain::SubmissionError;

/// Errors that can occur around the intake core
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Postcode lookup backend failed
    #[error("Postcode lookup error: {0}")]
    Lookup(String),

    /// Quote sink (spreadsheet intake) failed
    #[error("Quote sink error: {0}")]
    Sink(String),

    /// Quote request was refused by the submission gate
    #[error("Submission rejected: {0}")]
    Submission(#[from] SubmissionError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for intake operations
pub type IntakeResult<T> = Result<T, IntakeError>;

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gate(email_ok: bool) -> Result<(), SubmissionError> {
        if email_ok {
            Ok(())
        } else {
            Err(SubmissionError::InvalidEmail)
        }
    }

    fn forward(email_ok: bool) -> IntakeResult<&'static str> {
        gate(email_ok)?;
        Ok("forwarded")
    }

    #[test]
    fn test_submission_error_converts() {
        let err = IntakeError::from(SubmissionError::UnsupportedArea);
        assert!(matches!(
            err,
            IntakeError::Submission(SubmissionError::UnsupportedArea)
        ));
        assert_eq!(
            err.to_string(),
            "Submission rejected: Sorry, we currently only serve England, Scotland, and Wales"
        );
    }

    #[test]
    fn test_question_mark_lifts_gate_failure() {
        assert_eq!(forward(true).unwrap(), "forwarded");
        match forward(false) {
            Err(IntakeError::Submission(inner)) => {
                assert_eq!(inner, SubmissionError::InvalidEmail)
            }
            other => panic!("expected submission error, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_json_error_converts() {
        let err: IntakeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, IntakeError::Serialization(_)));
    }
}
