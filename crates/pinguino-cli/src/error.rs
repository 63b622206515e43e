//! Error types for pinguino-cli.

use pinguino::error::PinguinoError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Model file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid PGN artifact
    #[error("Invalid artifact: {0}")]
    InvalidFormat(String),

    /// Input outside the form's accepted values
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Library error
    #[error("{0}")]
    Pinguino(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Pinguino(_) => ExitCode::from(1),
            Self::InvalidInput(_) => ExitCode::from(2),
            Self::FileNotFound(_) => ExitCode::from(3),
            Self::InvalidFormat(_) => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}

impl From<PinguinoError> for CliError {
    fn from(e: PinguinoError) -> Self {
        match e {
            PinguinoError::FormatError { .. }
            | PinguinoError::UnsupportedVersion { .. }
            | PinguinoError::ChecksumMismatch { .. }
            | PinguinoError::Serialization(_) => Self::InvalidFormat(e.to_string()),
            PinguinoError::UnknownCategory { .. } => Self::InvalidInput(e.to_string()),
            PinguinoError::Io(io) => Self::Io(io),
            other => Self::Pinguino(other.to_string()),
        }
    }
}
