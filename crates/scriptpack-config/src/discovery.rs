//! File-based project config discovery
//!
//! Handles finding scriptpack configuration in a project root.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::project::{ProjectConfig, ProjectOverrides};

pub const CONFIG_FILE: &str = "scriptpack.toml";
pub const PACKAGE_JSON_FIELD: &str = "scriptpack";

/// Where a project's settings were found.
#[derive(Debug, Clone)]
pub enum ProjectSource {
    Toml(PathBuf),
    PackageJson { path: PathBuf, value: Value },
}

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use scriptpack_config::ProjectDiscovery;
///
/// let discovery = ProjectDiscovery::new(".");
/// let project = discovery.load().unwrap();
/// ```
pub struct ProjectDiscovery {
    root: PathBuf,
}

impl ProjectDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. scriptpack.toml
    /// 2. package.json (scriptpack field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Discovered source, with the `package.json` field already extracted.
    pub fn source(&self) -> Result<Option<ProjectSource>> {
        let Some(path) = self.find() else {
            return Ok(None);
        };

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            let value = read_package_field(&path)?;
            return Ok(Some(ProjectSource::PackageJson { path, value }));
        }

        Ok(Some(ProjectSource::Toml(path)))
    }

    /// Load the project, requiring a config file to exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ProjectConfig> {
        self.load_with(&ProjectOverrides::default())
    }

    pub fn load_with(&self, overrides: &ProjectOverrides) -> Result<ProjectConfig> {
        let source = self.source()?.ok_or(ConfigError::NotFound)?;
        ProjectConfig::load_from(Some(source), overrides)
    }
}

fn read_package_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let mut parsed: Value =
        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(format!("Invalid JSON: {e}")),
        })?;

    match parsed.get_mut(PACKAGE_JSON_FIELD).map(Value::take) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'scriptpack' field to your package.json".to_string()),
        }),
    }
}

/// Discover and load the project in the current directory.
pub fn discover() -> Result<ProjectConfig> {
    let root = std::env::current_dir()?;
    ProjectDiscovery::new(root).load()
}
