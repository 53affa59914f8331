//! Command-line front end for scriptpack.
//!
//! - `cli` - argument definitions (clap derive)
//! - `commands` - one module per subcommand
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
