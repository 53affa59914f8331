//! Check command implementation.
//!
//! Validates the project without printing a plan.

use scriptpack_config::{BuildMode, BuildPlan, ProjectConfig, validate_fs};

use crate::cli::CheckArgs;
use crate::commands::project_root;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the project settings
/// 2. Check names, templates and the public path
/// 3. Check that the entry module and banner file exist
/// 4. Assemble the plan for the requested mode from the same settings
pub fn execute(args: CheckArgs) -> Result<()> {
    let root = project_root(args.project.root.as_deref())?;
    let overrides = args.project.overrides();

    ui::info("Checking project configuration...");
    let project = ProjectConfig::load(&root, &overrides)?;
    validate_fs(&project, &root)?;
    ui::success(&format!(
        "Entry `{}` and banner `{}` found",
        project.entry_path().display(),
        project.banner_path().display()
    ));

    let mode = BuildMode::from(args.mode.as_deref());
    let plan = BuildPlan::from_project(&project, &root, mode)?;
    ui::success(&format!(
        "Build plan for `{}` resolves to {}",
        project.name,
        plan.output.path.join(&plan.output.filename).display()
    ));

    Ok(())
}
