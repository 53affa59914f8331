//! Modes command implementation.

use scriptpack_config::{BuildMode, OutputOptions, resolve};

use crate::error::Result;

pub fn execute() -> Result<()> {
    for line in lines() {
        println!("{line}");
    }
    Ok(())
}

fn lines() -> Vec<String> {
    let named = [BuildMode::Production, BuildMode::Development]
        .into_iter()
        .map(|mode| describe(mode.as_str(), &resolve(&mode)));

    named
        .chain(std::iter::once(describe(
            "<other>",
            &OutputOptions::fallback(),
        )))
        .collect()
}

fn describe(label: &str, options: &OutputOptions) -> String {
    format!(
        "{label:<13} devtool={:<22} minify={:<5} style={}",
        options.source_map.devtool().unwrap_or("none"),
        options.minify,
        options.style_injection.inject_type(),
    )
}
