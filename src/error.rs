//! Error types for sentir operations.
//!
//! Only fatal conditions live here. Degenerate-but-recoverable situations
//! (empty vocabulary, a class missing from training data, non-convergence,
//! undefined metrics) are reported through [`crate::warning`] instead.

use thiserror::Error;

/// Main error type for sentir operations.
///
/// # Examples
///
/// ```
/// use sentir::error::SentirError;
///
/// let err = SentirError::DimensionMismatch {
///     expected: "12 features".to_string(),
///     actual: "7 features".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum SentirError {
    /// A sentiment value that is not one of the two supported labels.
    #[error("unsupported label {value:?}, expected \"positive\" or \"negative\"")]
    InvalidLabel {
        /// The rejected value
        value: String,
    },

    /// Malformed dataset row or header.
    #[error("dataset error at line {line}: {message}")]
    Dataset {
        /// 1-based line in the source (header is line 1)
        line: u64,
        /// What was wrong with it
        message: String,
    },

    /// Underlying CSV reader failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Feature dimensions don't match for the operation.
    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An operation that needs at least one element received none.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Input violates a precondition (negative weights, mismatched lengths).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid hyperparameter value provided.
    #[error("invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Train/test split cannot be produced.
    #[error("invalid split: {0}")]
    InvalidSplit(String),
}

impl SentirError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput(context.to_string())
    }

    /// Create an invalid hyperparameter error
    #[must_use]
    pub fn hyperparameter(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SentirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_label_display() {
        let err = SentirError::InvalidLabel {
            value: "neutral".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("neutral"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn test_dataset_display_carries_line() {
        let err = SentirError::Dataset {
            line: 7,
            message: "expected 2 fields, found 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "dataset error at line 7: expected 2 fields, found 3"
        );
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = SentirError::dimension_mismatch("features", 10, 4);
        let msg = err.to_string();
        assert!(msg.contains("features=10"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_hyperparameter_helper() {
        let err = SentirError::hyperparameter("alpha", -1.0, "> 0");
        let msg = err.to_string();
        assert!(msg.contains("alpha = -1"));
        assert!(msg.contains("> 0"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: SentirError = io_err.into();
        assert!(matches!(err, SentirError::Io(_)));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SentirError::Io(io_err);
        assert!(err.source().is_some());
        assert!(SentirError::empty_input("corpus").source().is_none());
    }
}
