//! Init command implementation.
//!
//! Writes a starter scriptpack.toml for an existing userscript.

use std::fs;
use std::path::Path;

use scriptpack_config::{CONFIG_FILE, ProjectConfig, validate_schema};

use crate::cli::InitArgs;
use crate::commands::project_root;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(args: InitArgs) -> Result<()> {
    let root = project_root(args.root.as_deref())?;
    let name = match args.name {
        Some(name) => name,
        None => name_from_dir(&root)?,
    };

    let config = ProjectConfig {
        public_path: args.public_path,
        ..ProjectConfig::new(name)
    };
    validate_schema(&config)?;

    let path = root.join(CONFIG_FILE);
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::write(&path, config.to_toml_string()?)?;
    ui::success(&format!("Created {}", path.display()));

    let banner = root.join(config.banner_path());
    if !banner.exists() {
        ui::warning(&format!(
            "Banner file {} does not exist yet; builds will fail until it does",
            banner.display()
        ));
    }

    Ok(())
}

fn name_from_dir(root: &Path) -> Result<String> {
    let root = root.canonicalize()?;
    root.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "cannot derive an entry name from {}; pass NAME",
                root.display()
            ))
        })
}
