//! Command-line interface definition.
//!
//! - `scriptpack resolve` - Print the build plan for a mode
//! - `scriptpack check` - Validate the project on disk
//! - `scriptpack init` - Write a starter scriptpack.toml
//! - `scriptpack modes` - List the named build modes

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, ProjectArgs, ResolveArgs};

/// scriptpack - build configuration for browser userscripts
#[derive(Parser, Debug)]
#[command(
    name = "scriptpack",
    version,
    about = "Resolve mode-dependent build configuration for browser userscripts",
    long_about = "scriptpack selects source-map, minification and stylesheet options for a\n\
                  userscript bundle from a build mode, and combines them with the project's\n\
                  entry, output naming and metadata banner."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
