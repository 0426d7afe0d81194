//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from adapter errors to exit codes and user-facing messages.

use pixgal_pixabay::PixabayError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Search API error.
    #[error("Search API error: {0}")]
    Api(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive prompt error.
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => 69,       // EX_UNAVAILABLE
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Prompt(_) => 1,
        }
    }
}

impl From<PixabayError> for CliError {
    fn from(err: PixabayError) -> Self {
        match err {
            PixabayError::MissingApiKey | PixabayError::InvalidUrl(_) => {
                Self::Config(err.to_string())
            }
            other => Self::Api(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Api("x".into()).exit_code(), 69);
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err: CliError = PixabayError::MissingApiKey.into();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_io_error_conversion() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, CliError::Io(ref msg) if msg.contains("gone")));
    }
}
