//! The complete record handed to the bundler for one build.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::banner::{Banner, BannerPlugin};
use crate::error::{ConfigError, Result};
use crate::minify::Minimizers;
use crate::mode::BuildMode;
use crate::options::{OutputOptions, StylesheetStrategy, resolve};
use crate::project::{ProjectConfig, ProjectOverrides};
use crate::template::FilenameTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTarget {
    /// Rendered script filename
    pub filename: String,
    pub filename_template: FilenameTemplate,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum LoaderUse {
    StyleLoader {
        #[serde(rename = "injectType")]
        inject_type: String,
    },
    FileLoader {
        name: FilenameTemplate,
    },
    CssLoader,
}

/// Stylesheet rule: which files it applies to and the loader chain.
///
/// Loaders run last to first, so the style loader comes first in `uses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssRule {
    /// File extension matched case-insensitively
    pub extension: String,
    pub uses: Vec<LoaderUse>,
}

impl CssRule {
    pub fn for_options(options: &OutputOptions) -> Self {
        let content_loader = match &options.stylesheet {
            StylesheetStrategy::EmitFile { name } => LoaderUse::FileLoader { name: name.clone() },
            StylesheetStrategy::InlineLoader => LoaderUse::CssLoader,
        };

        Self {
            extension: "css".to_string(),
            uses: vec![
                LoaderUse::StyleLoader {
                    inject_type: options.style_injection.inject_type().to_string(),
                },
                content_loader,
            ],
        }
    }

    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    pub minimize: bool,
    pub minimizers: Minimizers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub context: PathBuf,
    pub mode: BuildMode,
    /// Entry name to module path
    pub entry: BTreeMap<String, PathBuf>,
    pub options: OutputOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
    pub output: OutputTarget,
    pub rules: Vec<CssRule>,
    pub banner: BannerPlugin,
    pub optimization: Optimization,
}

impl BuildPlan {
    /// Compose a plan from already loaded parts. Performs no I/O.
    pub fn assemble(
        project: &ProjectConfig,
        root: impl AsRef<Path>,
        mode: BuildMode,
        banner: Banner,
    ) -> Self {
        let root = root.as_ref();
        let options = resolve(&mode);

        let options = match options.stylesheet {
            StylesheetStrategy::EmitFile { .. } => OutputOptions {
                stylesheet: StylesheetStrategy::EmitFile {
                    name: project.css_filename.clone(),
                },
                ..options
            },
            StylesheetStrategy::InlineLoader => options,
        };

        let mut entry = BTreeMap::new();
        entry.insert(project.name.clone(), project.entry_path());

        Self {
            context: root.to_path_buf(),
            devtool: options.source_map.devtool().map(str::to_string),
            output: OutputTarget {
                filename: project.filename.render(&project.name),
                filename_template: project.filename.clone(),
                path: project.output_path(root),
                public_path: project.public_path.clone(),
            },
            rules: vec![CssRule::for_options(&options)],
            banner: BannerPlugin::new(banner),
            optimization: Optimization {
                minimize: options.minify,
                minimizers: Minimizers::for_options(&options),
            },
            entry,
            options,
            mode,
        }
    }

    /// Load the project at `root`, read its banner once and assemble.
    pub fn load(
        root: impl AsRef<Path>,
        mode: BuildMode,
        overrides: &ProjectOverrides,
    ) -> Result<Self> {
        let root = root.as_ref();
        let project = ProjectConfig::load(root, overrides)?;
        Self::from_project(&project, root, mode)
    }

    /// Read the banner of an already loaded project and assemble.
    pub fn from_project(
        project: &ProjectConfig,
        root: impl AsRef<Path>,
        mode: BuildMode,
    ) -> Result<Self> {
        let root = root.as_ref();

        if !mode.is_recognized() {
            warn!(
                mode = mode.as_str(),
                "unrecognized build mode, using fallback options"
            );
        }

        let banner = Banner::load(root.join(project.banner_path()))?;
        let plan = Self::assemble(project, root, mode, banner);

        info!(
            name = %project.name,
            mode = plan.mode.as_str(),
            minify = plan.optimization.minimize,
            "resolved build plan"
        );
        debug!(devtool = ?plan.devtool, output = %plan.output.path.display());

        Ok(plan)
    }

    pub fn css_rule_for(&self, path: impl AsRef<Path>) -> Option<&CssRule> {
        let path = path.as_ref();
        self.rules.iter().find(|rule| rule.matches(path))
    }

    pub fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "plan".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
