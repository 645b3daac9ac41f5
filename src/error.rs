//! Error types shared by the calculators, the quiz tracker and the coach.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Caller broke a contract (non-positive rate, unsupported compounding
    /// frequency, answering a closed quiz). Not user-correctable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Out-of-range form value the user can fix.
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("incomplete submission: {answered} of {expected} questions answered")]
    IncompleteSubmission { answered: usize, expected: usize },

    #[error("not found: {0}")]
    NotFound(String),

    /// The coach backend failed. The detail is for logs only.
    #[error("generation failed: {0}")]
    GenerationFailed(String),
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }

    /// Field identifier for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
