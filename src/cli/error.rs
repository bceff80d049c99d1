//! CLI-level errors (wraps tree and settings errors)

use thiserror::Error;

use crate::errors::{SettingsError, TreeError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Settings(e) => match e {
                SettingsError::Read { .. } => crate::exitcode::NOINPUT,
                SettingsError::Parse { .. } | SettingsError::Env(_) => crate::exitcode::CONFIG,
            },
            CliError::Tree(e) => match e {
                TreeError::EmptyTree => crate::exitcode::DATAERR,
                TreeError::OutOfRange { .. } => crate::exitcode::SOFTWARE,
            },
        }
    }
}
