//! CLI error types for structured error handling.
//!
//! Errors raised by the CLI itself carry their own exit code. Errors coming
//! up from `growth-core` are classified in [`exit_code_for`].

use std::fmt;

use growth_core::GrowthError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, entry, import file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Stored collection failed the integrity check
    IntegrityFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\nHint: {}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::IntegrityFailed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn integrity_failed(message: impl Into<String>) -> Self {
        CliError::IntegrityFailed(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Exit code for any error bubbling out of a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<GrowthError>() {
        Some(GrowthError::Validation(_)) => exit_codes::INVALID_INPUT,
        Some(GrowthError::StorageUnavailable(_)) => exit_codes::STORAGE_UNAVAILABLE,
        Some(GrowthError::PersistFailed(_)) => exit_codes::PERSIST_FAILED,
        Some(GrowthError::ImportParseFailed(_)) => exit_codes::IMPORT_FAILED,
        Some(GrowthError::Corrupt(_)) => exit_codes::INTEGRITY_FAILED,
        Some(GrowthError::Serialization(_)) | None => 1,
    }
}

/// Split "message\nHint: text" into its two parts.
pub fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => {
            let hint = error[idx + "\nHint:".len()..].trim();
            (&error[..idx], (!hint.is_empty()).then_some(hint))
        }
        None => (error, None),
    }
}
