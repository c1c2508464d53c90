//! @acp:module "Errors"
//! @acp:summary "Error types for parsing, summation and result persistence"
//! @acp:domain calculator
//! @acp:layer model

use thiserror::Error;

/// Errors produced by the calculator and its stores
#[derive(Debug, Error)]
pub enum CalcError {
    /// A token could not be parsed as a base-10 signed integer
    #[error("Input format was incorrect: {token:?}")]
    Format { token: String },

    /// The running sum left the `i64` range
    #[error("Sum overflowed the supported integer range")]
    Overflow,

    /// A store rejected a write
    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// @acp:summary "Build a format error for the offending token"
    pub fn format(token: impl Into<String>) -> Self {
        Self::Format {
            token: token.into(),
        }
    }

    /// True when the error came from a malformed token
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = CalcError::format("a");
        assert!(err.is_format_error());
        assert_eq!(err.to_string(), "Input format was incorrect: \"a\"");
    }

    #[test]
    fn test_other_errors_are_not_format_errors() {
        assert!(!CalcError::Overflow.is_format_error());
        assert!(!CalcError::Store("disk full".into()).is_format_error());
    }
}
