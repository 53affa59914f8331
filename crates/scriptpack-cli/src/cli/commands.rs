use clap::{Args, Subcommand};
use std::path::PathBuf;

use scriptpack_config::ProjectOverrides;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved build plan as JSON
    ///
    /// Combines the options selected for the build mode with the project's
    /// entry, output naming and banner. The banner file is read once.
    Resolve(ResolveArgs),

    /// Validate the project configuration and the files it references
    Check(CheckArgs),

    /// Create a scriptpack.toml in the project root
    Init(InitArgs),

    /// List the named build modes and the fallback
    Modes,
}

/// Project location and overrides shared by several commands
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Entry name, overriding the config file
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// URL the built assets are served from
    #[arg(long, value_name = "URL")]
    pub public_path: Option<String>,
}

impl ProjectArgs {
    pub fn overrides(&self) -> ProjectOverrides {
        ProjectOverrides {
            name: self.name.clone(),
            output_dir: self.output_dir.clone(),
            public_path: self.public_path.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Build mode (`production`, `development`, or anything else for the fallback)
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Reject modes other than `production` and `development`
    #[arg(long)]
    pub strict: bool,

    /// Print only the mode-dependent output options
    ///
    /// Skips project loading and the banner read entirely.
    #[arg(long)]
    pub options_only: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Build mode to check the plan for
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Entry name (defaults to the project directory name)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// URL the built assets will be served from
    #[arg(long, value_name = "URL")]
    pub public_path: Option<String>,

    /// Overwrite an existing scriptpack.toml
    #[arg(long)]
    pub force: bool,
}
