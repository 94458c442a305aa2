//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Pagination or reassembly error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<msgpage_core::PaginateError> for CliError {
    fn from(err: msgpage_core::PaginateError) -> Self {
        match err {
            msgpage_core::PaginateError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

impl From<msgpage_core::ReassemblyError> for CliError {
    fn from(err: msgpage_core::ReassemblyError) -> Self {
        CliError::ProcessingError(err.to_string())
    }
}
