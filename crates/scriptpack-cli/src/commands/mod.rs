//! Command implementations. Each module exposes an `execute` function.

pub mod check;
pub mod init;
pub mod modes;
pub mod resolve;

use std::path::{Path, PathBuf};

use scriptpack_config::BuildMode;

use crate::error::Result;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use modes::execute as modes_execute;
pub use resolve::execute as resolve_execute;

/// Project root from `--root`, or the current directory.
pub(crate) fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

pub(crate) fn parse_mode(mode: Option<&str>, strict: bool) -> Result<BuildMode> {
    if strict {
        Ok(BuildMode::parse_strict(mode.unwrap_or_default())?)
    } else {
        Ok(BuildMode::from(mode))
    }
}
