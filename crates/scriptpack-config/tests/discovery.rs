//! Tests for project config discovery and layered loading.

use scriptpack_config::{ConfigError, ProjectConfig, ProjectDiscovery, ProjectOverrides};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
#[serial]
fn discovers_scriptpack_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("scriptpack.toml"),
        r#"
name = "evolve_automation"
public_path = "https://cdn.jsdelivr.net/gh/owner/repo/"
"#,
    )
    .unwrap();

    let discovery = ProjectDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert_eq!(found.file_name().unwrap(), "scriptpack.toml");

    let config = discovery.load().unwrap();
    assert_eq!(config.name, "evolve_automation");
    assert_eq!(config.output_dir, PathBuf::from("dist"));
    assert_eq!(config.filename.as_str(), "[name].user.js");
    assert_eq!(
        config.public_path.as_deref(),
        Some("https://cdn.jsdelivr.net/gh/owner/repo/")
    );
}

#[test]
#[serial]
fn discovers_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "test",
  "scriptpack": {
    "name": "evolve",
    "output_dir": "build"
  }
}"#,
    )
    .unwrap();

    let discovery = ProjectDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert_eq!(found.file_name().unwrap(), "package.json");

    let config = discovery.load().unwrap();
    assert_eq!(config.name, "evolve");
    assert_eq!(config.output_dir, PathBuf::from("build"));
}

#[test]
#[serial]
fn toml_takes_precedence_over_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scriptpack.toml"), "name = \"from-toml\"\n").unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "scriptpack": { "name": "from-pkg" } }"#,
    )
    .unwrap();

    let config = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(config.name, "from-toml");
}

#[test]
#[serial]
fn invalid_toml_reports_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scriptpack.toml"), "name = [unterminated").unwrap();

    let err = ProjectDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("scriptpack.toml"),
        "name = \"evolve\"\noutput_dir = \"file-dist\"\n",
    )
    .unwrap();

    // SAFETY: tests touching the environment are serialized.
    unsafe { std::env::set_var("SCRIPTPACK_OUTPUT_DIR", "env-dist") };
    let result = ProjectConfig::load(dir.path(), &ProjectOverrides::default());
    unsafe { std::env::remove_var("SCRIPTPACK_OUTPUT_DIR") };

    let config = result.unwrap();
    assert_eq!(config.name, "evolve");
    assert_eq!(config.output_dir, PathBuf::from("env-dist"));
}

#[test]
#[serial]
fn overrides_beat_environment() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scriptpack.toml"), "name = \"evolve\"\n").unwrap();

    unsafe { std::env::set_var("SCRIPTPACK_OUTPUT_DIR", "env-dist") };
    let overrides = ProjectOverrides {
        output_dir: Some(PathBuf::from("cli-dist")),
        ..ProjectOverrides::default()
    };
    let result = ProjectConfig::load(dir.path(), &overrides);
    unsafe { std::env::remove_var("SCRIPTPACK_OUTPUT_DIR") };

    assert_eq!(result.unwrap().output_dir, PathBuf::from("cli-dist"));
}

#[test]
#[serial]
fn loads_without_file_when_name_is_overridden() {
    let dir = TempDir::new().unwrap();
    let overrides = ProjectOverrides {
        name: Some("bare".to_string()),
        ..ProjectOverrides::default()
    };

    let config = ProjectConfig::load(dir.path(), &overrides).unwrap();
    assert_eq!(config.name, "bare");
    assert_eq!(config.entry_path(), PathBuf::from("./bare.js"));
}

#[test]
#[serial]
fn numeric_environment_name_stays_text() {
    let dir = TempDir::new().unwrap();

    unsafe { std::env::set_var("SCRIPTPACK_NAME", "2048") };
    let result = ProjectConfig::load(dir.path(), &ProjectOverrides::default());
    unsafe { std::env::remove_var("SCRIPTPACK_NAME") };

    let config = result.unwrap();
    assert_eq!(config.name, "2048");
    assert_eq!(config.entry_path(), PathBuf::from("./2048.js"));
}
