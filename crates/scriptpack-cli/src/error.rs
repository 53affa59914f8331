//! Error handling for the scriptpack CLI.
//!
//! Library failures arrive as [`ConfigError`] and are wrapped in
//! [`CliError`]; `main` turns the result into a `miette` report.

use std::path::PathBuf;

use scriptpack_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Project loading, banner or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A file the command would create is already present
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config(err) => err.hint(),
            Self::AlreadyExists(_) => Some("Pass --force to overwrite it"),
            _ => None,
        }
    }
}

/// Convert a CLI error into a miette report, keeping the hint as help text.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint.to_string(), "{err}"),
        None => miette::miette!("{err}"),
    }
}
