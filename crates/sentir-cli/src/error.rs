//! Error types for the sentir CLI

use sentir::SentirError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Malformed dataset file
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Configuration file or option rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other library failure
    #[error("sentir error: {0}")]
    Sentir(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            Self::Sentir(_) => 1,
            Self::FileNotFound(_) => 3,
            Self::InvalidDataset(_) => 4,
            Self::InvalidConfig(_) => 5,
            Self::Io(_) => 7,
        }
    }
}

impl From<SentirError> for CliError {
    fn from(e: SentirError) -> Self {
        match e {
            SentirError::Io(io) => Self::Io(io),
            SentirError::Config(_) | SentirError::InvalidHyperparameter { .. } => {
                Self::InvalidConfig(e.to_string())
            }
            SentirError::Dataset { .. } | SentirError::Csv(_) | SentirError::InvalidLabel { .. } => {
                Self::InvalidDataset(e.to_string())
            }
            other => Self::Sentir(other.to_string()),
        }
    }
}
