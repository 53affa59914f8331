//! Pluggable project validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::project::ProjectConfig;

pub trait ConfigValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use scriptpack_config::{ConfigValidator, ProjectConfig, SchemaValidator};
///
/// let config = ProjectConfig::new("evolve");
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()> {
        let name = config.name.trim();
        if name.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "entry name cannot be empty".to_string(),
                hint: Some("Set `name` in scriptpack.toml".to_string()),
            });
        }

        if name.contains(['/', '\\']) {
            return Err(ConfigError::SchemaValidation {
                message: format!("entry name `{name}` contains a path separator"),
                hint: Some("Use `entry` to point at a module in a subdirectory".to_string()),
            });
        }

        // Without a placeholder every entry would write to the same file.
        if !config.filename.has_name_placeholder() {
            return Err(ConfigError::SchemaValidation {
                message: format!("filename template `{}` has no [name]", config.filename),
                hint: Some("Use a pattern such as \"[name].user.js\"".to_string()),
            });
        }

        if config.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output_dir cannot be empty".to_string(),
                hint: Some("Remove the key to use the default \"dist\"".to_string()),
            });
        }

        if let Some(public_path) = &config.public_path {
            if !public_path.ends_with('/') {
                return Err(ConfigError::SchemaValidation {
                    message: format!("public_path `{public_path}` must end with '/'"),
                    hint: Some(format!("Use \"{public_path}/\"")),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then verifies that the entry module and banner
/// file exist under the project root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        let path = self.root.join(config.entry_path());
        if !path.is_file() {
            return Err(ConfigError::EntryNotFound { path });
        }

        let path = self.root.join(config.banner_path());
        if !path.is_file() {
            return Err(ConfigError::BannerNotFound { path });
        }

        Ok(())
    }
}

pub fn validate_schema(config: &ProjectConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

pub fn validate_fs(config: &ProjectConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::FilenameTemplate;
    use std::fs;
    use tempfile::TempDir;

    fn assert_schema_error(config: &ProjectConfig) {
        let result = SchemaValidator.validate(config);
        assert!(
            matches!(result, Err(ConfigError::SchemaValidation { .. })),
            "expected schema error, got {result:?}"
        );
    }

    #[test]
    fn accepts_defaults() {
        assert!(validate_schema(&ProjectConfig::new("evolve")).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert_schema_error(&ProjectConfig::new("  "));
    }

    #[test]
    fn rejects_name_with_separator() {
        assert_schema_error(&ProjectConfig::new("src/evolve"));
    }

    #[test]
    fn rejects_template_without_placeholder() {
        assert_schema_error(&ProjectConfig {
            filename: FilenameTemplate::new("bundle.user.js"),
            ..ProjectConfig::new("evolve")
        });
    }

    #[test]
    fn rejects_empty_output_dir() {
        assert_schema_error(&ProjectConfig {
            output_dir: PathBuf::new(),
            ..ProjectConfig::new("evolve")
        });
    }

    #[test]
    fn public_path_needs_trailing_slash() {
        assert_schema_error(&ProjectConfig {
            public_path: Some("https://cdn.example.com/gh/user/repo".to_string()),
            ..ProjectConfig::new("evolve")
        });

        let config = ProjectConfig {
            public_path: Some("https://cdn.example.com/gh/user/repo/".to_string()),
            ..ProjectConfig::new("evolve")
        };
        assert!(validate_schema(&config).is_ok());
    }

    #[test]
    fn fs_validator_checks_entry_then_banner() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::new("evolve");

        let err = validate_fs(&config, dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EntryNotFound { .. }));

        fs::write(dir.path().join("evolve.js"), "main();").unwrap();
        let err = validate_fs(&config, dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::BannerNotFound { .. }));

        fs::write(dir.path().join("evolve.meta.js"), "// ==UserScript==").unwrap();
        assert!(validate_fs(&config, dir.path()).is_ok());
    }
}
