//! Error types for project loading, banner acquisition and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("banner file not found: {}", .path.display())]
    BannerNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("project config not found (looked for scriptpack.toml and package.json)")]
    NotFound,

    #[error("invalid config value for `{field}`{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("unknown build mode `{0}` (expected `production` or `development`)")]
    UnknownMode(String),

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Remediation hint, when the variant carries one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            Self::BannerNotFound { .. } => {
                Some("Create the userscript metadata file or point `banner` at it")
            }
            Self::NotFound => Some("Run `scriptpack init` to create a scriptpack.toml"),
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        let field = err
            .path
            .last()
            .cloned()
            .unwrap_or_else(|| "project".to_string());
        Self::InvalidValue {
            field,
            hint: Some(err.kind.to_string()),
        }
    }
}
