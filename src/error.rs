//! Custom error types for Eco-Track
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Eco-Track operations
#[derive(Error, Debug)]
pub enum EcoTrackError {
    /// Emission amount could not be parsed as a number
    #[error("Invalid number format: '{0}'")]
    InvalidNumberFormat(String),

    /// Emission amount parsed but was below zero
    #[error("Emission value cannot be negative.")]
    NegativeValue(f64),

    /// Adding the amount would push a category total past the `f64` range
    #[error("Total for '{0}' would exceed the representable range.")]
    TotalOutOfRange(String),

    /// Menu selection outside the known options
    #[error("Invalid menu choice: '{0}'")]
    InvalidMenuChoice(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Anything else that went wrong during a loop iteration
    #[error("{0}")]
    Unexpected(String),
}

impl EcoTrackError {
    /// Check if this error rejected an emission amount
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumberFormat(_) | Self::NegativeValue(_) | Self::TotalOutOfRange(_)
        )
    }

    /// Wrap this error as the catch-all `Unexpected` kind, keeping its message
    pub fn into_unexpected(self) -> Self {
        match self {
            Self::Unexpected(_) => self,
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<std::io::Error> for EcoTrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Eco-Track operations
pub type EcoTrackResult<T> = Result<T, EcoTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EcoTrackError::Config("bad filter".into());
        assert_eq!(err.to_string(), "Configuration error: bad filter");
    }

    #[test]
    fn test_negative_value_message() {
        let err = EcoTrackError::NegativeValue(-5.0);
        assert_eq!(err.to_string(), "Emission value cannot be negative.");
        assert!(err.is_input_rejection());
    }

    #[test]
    fn test_invalid_number_message() {
        let err = EcoTrackError::InvalidNumberFormat("abc".into());
        assert_eq!(err.to_string(), "Invalid number format: 'abc'");
        assert!(err.is_input_rejection());
    }

    #[test]
    fn test_menu_choice_is_not_input_rejection() {
        let err = EcoTrackError::InvalidMenuChoice("7".into());
        assert!(!err.is_input_rejection());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: EcoTrackError = io_err.into();
        assert!(matches!(err, EcoTrackError::Io(_)));
    }

    #[test]
    fn test_into_unexpected_keeps_message() {
        let err = EcoTrackError::Io("pipe closed".into()).into_unexpected();
        assert!(matches!(&err, EcoTrackError::Unexpected(_)));
        assert_eq!(err.to_string(), "I/O error: pipe closed");

        let again = err.into_unexpected();
        assert_eq!(again.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn test_total_out_of_range_is_input_rejection() {
        let err = EcoTrackError::TotalOutOfRange("waste".into());
        assert!(err.is_input_rejection());
    }
}
