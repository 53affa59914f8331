//! Resolve command implementation.

use serde_json::Value;
use tracing::debug;

use scriptpack_config::{BuildPlan, resolve};

use crate::cli::ResolveArgs;
use crate::commands::{parse_mode, project_root};
use crate::error::Result;

/// Print the resolved options or build plan to stdout.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let value = render(&args)?;

    let json = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{json}");

    Ok(())
}

/// Build the JSON document `resolve` prints.
pub fn render(args: &ResolveArgs) -> Result<Value> {
    let mode = parse_mode(args.mode.as_deref(), args.strict)?;

    if args.options_only {
        debug!(mode = mode.as_str(), "resolving output options only");
        return Ok(serde_json::to_value(resolve(&mode))?);
    }

    let root = project_root(args.project.root.as_deref())?;
    let plan = BuildPlan::load(&root, mode, &args.project.overrides())?;
    Ok(plan.to_json()?)
}
