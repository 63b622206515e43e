//! Error types for Pinguino operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Pinguino operations.
///
/// Covers classifier misuse (dimension mismatches, unfitted models),
/// categorical values outside the closed penguin schema, and every way
/// a model artifact can fail to load.
///
/// # Examples
///
/// ```
/// use pinguino::error::PinguinoError;
///
/// let err = PinguinoError::UnknownCategory {
///     field: "island".to_string(),
///     value: "Atlantis".to_string(),
/// };
/// assert!(err.to_string().contains("island"));
/// ```
#[derive(Debug)]
pub enum PinguinoError {
    /// Feature vector length doesn't match what the model was fitted on.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A categorical value outside its closed set (no "unknown" bucket exists).
    UnknownCategory {
        /// Field name ("island", "sex", "species")
        field: String,
        /// The rejected value
        value: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Invalid or corrupt model artifact.
    FormatError {
        /// Error description
        message: String,
    },

    /// Unsupported artifact version.
    UnsupportedVersion {
        /// Version found
        found: (u8, u8),
        /// Maximum supported version
        supported: (u8, u8),
    },

    /// Checksum verification failed.
    ChecksumMismatch {
        /// Expected checksum
        expected: u32,
        /// Actual checksum
        actual: u32,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PinguinoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinguinoError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Feature dimension mismatch: expected {expected}, got {actual}"
                )
            }
            PinguinoError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            PinguinoError::UnknownCategory { field, value } => {
                write!(f, "Unknown {field} value: {value:?}")
            }
            PinguinoError::Io(e) => write!(f, "I/O error: {e}"),
            PinguinoError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            PinguinoError::FormatError { message } => {
                write!(f, "Invalid model format: {message}")
            }
            PinguinoError::UnsupportedVersion { found, supported } => {
                write!(
                    f,
                    "Unsupported artifact version: found {}.{}, max supported {}.{}",
                    found.0, found.1, supported.0, supported.1
                )
            }
            PinguinoError::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "Checksum mismatch: expected 0x{expected:08X}, got 0x{actual:08X}"
                )
            }
            PinguinoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PinguinoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PinguinoError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PinguinoError {
    fn from(err: std::io::Error) -> Self {
        PinguinoError::Io(err)
    }
}

impl From<&str> for PinguinoError {
    fn from(msg: &str) -> Self {
        PinguinoError::Other(msg.to_string())
    }
}

impl From<String> for PinguinoError {
    fn from(msg: String) -> Self {
        PinguinoError::Other(msg)
    }
}

/// Result type alias using `PinguinoError`.
pub type Result<T> = std::result::Result<T, PinguinoError>;
