//! Userscript project settings and their layered loading.
//!
//! Priority: overrides > environment > config file > defaults

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discovery::{ProjectDiscovery, ProjectSource};
use crate::error::{ConfigError, Result};
use crate::template::FilenameTemplate;

/// Environment variable prefix (`SCRIPTPACK_OUTPUT_DIR`, ...).
pub const ENV_PREFIX: &str = "SCRIPTPACK_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Entry name, substituted for `[name]` in filename templates
    #[serde(default)]
    pub name: String,

    /// Entry module (default: `./{name}.js`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<PathBuf>,

    /// Userscript metadata file (default: `{name}.meta.js`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<PathBuf>,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "FilenameTemplate::script")]
    pub filename: FilenameTemplate,

    #[serde(default = "FilenameTemplate::stylesheet")]
    pub css_filename: FilenameTemplate,

    /// URL the built assets are served from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            entry: None,
            banner: None,
            output_dir: default_output_dir(),
            filename: FilenameTemplate::script(),
            css_filename: FilenameTemplate::stylesheet(),
            public_path: None,
        }
    }
}

/// Values that take precedence over every other source, typically CLI flags.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load settings for the project rooted at `root`.
    ///
    /// A config file is optional here: a project can be described entirely
    /// through the environment or `overrides`. The entry name is required in
    /// the end.
    pub fn load(root: impl AsRef<Path>, overrides: &ProjectOverrides) -> Result<Self> {
        let source = ProjectDiscovery::new(root).source()?;
        Self::load_from(source, overrides)
    }

    pub(crate) fn load_from(
        source: Option<ProjectSource>,
        overrides: &ProjectOverrides,
    ) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match source {
            Some(ProjectSource::Toml(path)) => {
                debug!(path = %path.display(), "reading project config");
                figment = figment.merge(Toml::file(path));
            }
            Some(ProjectSource::PackageJson { path, value }) => {
                debug!(path = %path.display(), "reading project config from package.json");
                figment = figment.merge(Serialized::defaults(value));
            }
            None => debug!("no project config file, using environment and defaults"),
        }

        figment = figment
            .merge(Serialized::defaults(env_values()))
            .merge(Serialized::defaults(overrides));

        let config: Self = figment.extract()?;
        if config.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "name".to_string(),
                hint: Some(
                    "Set `name` in scriptpack.toml, SCRIPTPACK_NAME, or pass --name".to_string(),
                ),
            });
        }

        Ok(config)
    }

    pub fn entry_path(&self) -> PathBuf {
        self.entry
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("./{}.js", self.name)))
    }

    pub fn banner_path(&self) -> PathBuf {
        self.banner
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.meta.js", self.name)))
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    /// Render this config as `scriptpack.toml` content.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "project".to_string(),
            hint: Some(format!("TOML serialization failed: {e}")),
        })
    }
}

/// `SCRIPTPACK_*` variables keyed by lowercased field name.
///
/// Values stay strings: every project field is textual, and `Env` on its own
/// would turn `SCRIPTPACK_NAME=2048` into an integer.
fn env_values() -> BTreeMap<String, String> {
    Env::prefixed(ENV_PREFIX)
        .iter()
        .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
        .collect()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}
