//! End-to-end tests for the scriptpack binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const META: &str = "// ==UserScript==\n// @name Demo\n// ==/UserScript==\n";

fn scriptpack() -> Command {
    let mut cmd = cargo_bin_cmd!("scriptpack");
    cmd.env_remove("SCRIPTPACK_NAME")
        .env_remove("SCRIPTPACK_OUTPUT_DIR")
        .env_remove("SCRIPTPACK_PUBLIC_PATH")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_project(dir.path());
    dir
}

fn write_project(dir: &Path) {
    fs::write(dir.join("scriptpack.toml"), "name = \"demo\"\n").unwrap();
    fs::write(dir.join("demo.js"), "main();").unwrap();
    fs::write(dir.join("demo.meta.js"), META).unwrap();
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn help_lists_commands() {
    scriptpack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn options_only_production() {
    let value = stdout_json(scriptpack().args(["resolve", "--options-only", "--mode", "production"]));
    assert_eq!(value["minify"], true);
    assert_eq!(value["sourceMap"], "none");
    assert_eq!(value["styleInjection"], "link-tag");
}

#[test]
fn options_only_development() {
    let value = stdout_json(scriptpack().args(["resolve", "--options-only", "-m", "development"]));
    assert_eq!(value["minify"], false);
    assert_eq!(value["sourceMap"], "full");
    assert_eq!(value["styleInjection"], "singleton-style-tag");
}

#[test]
fn options_only_unrecognized_falls_back() {
    let value = stdout_json(scriptpack().args(["resolve", "--options-only", "--mode", "staging"]));
    assert_eq!(value["minify"], false);
    assert_eq!(value["sourceMap"], "cheap");
    assert_eq!(value["styleInjection"], "singleton-style-tag");
}

#[test]
fn options_only_needs_no_project() {
    let dir = TempDir::new().unwrap();
    scriptpack()
        .current_dir(dir.path())
        .args(["resolve", "--options-only"])
        .assert()
        .success();
}

#[test]
fn strict_rejects_unknown_mode() {
    scriptpack()
        .args(["resolve", "--options-only", "--strict", "--mode", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown build mode `staging`"));
}

#[test]
fn resolve_prints_full_plan() {
    let dir = project();
    let value = stdout_json(scriptpack().args([
        "resolve",
        "--mode",
        "production",
        "--root",
        dir.path().to_str().unwrap(),
    ]));

    assert_eq!(value["mode"], "production");
    assert_eq!(value["output"]["filename"], "demo.user.js");
    assert_eq!(value["banner"]["banner"], META);
    assert_eq!(value["optimization"]["minimize"], true);
    assert_eq!(value["rules"][0]["uses"][1]["loader"], "file-loader");
}

#[test]
fn resolve_applies_cli_overrides() {
    let dir = project();
    let value = stdout_json(scriptpack().current_dir(dir.path()).args([
        "resolve",
        "--compact",
        "--public-path",
        "https://cdn.example.com/demo/",
    ]));

    assert_eq!(value["mode"], "");
    assert_eq!(value["devtool"], "eval-cheap-source-map");
    assert_eq!(value["output"]["publicPath"], "https://cdn.example.com/demo/");
}

#[test]
fn missing_banner_fails_the_build() {
    let dir = project();
    fs::remove_file(dir.path().join("demo.meta.js")).unwrap();

    scriptpack()
        .current_dir(dir.path())
        .args(["resolve", "--mode", "production"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("banner file not found"));
}

#[test]
fn check_succeeds_for_complete_project() {
    let dir = project();
    scriptpack()
        .current_dir(dir.path())
        .args(["check", "--mode", "development"])
        .assert()
        .success()
        .stderr(predicate::str::contains("demo.user.js"));
}

#[test]
fn check_warns_once_for_unnamed_mode() {
    let dir = project();
    let output = scriptpack()
        .current_dir(dir.path())
        .args(["check", "--mode", "staging"])
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8(output).unwrap();
    assert_eq!(stderr.matches("fallback").count(), 1, "{stderr}");
}

#[test]
fn check_reports_missing_entry() {
    let dir = project();
    fs::remove_file(dir.path().join("demo.js")).unwrap();

    scriptpack()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry path not found"));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    scriptpack()
        .current_dir(dir.path())
        .args(["init", "demo"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("scriptpack.toml")).unwrap();
    assert!(written.contains("name = \"demo\""));

    scriptpack()
        .current_dir(dir.path())
        .args(["init", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    scriptpack()
        .current_dir(dir.path())
        .args(["init", "demo", "--force"])
        .assert()
        .success();
}

#[test]
fn modes_lists_fallback() {
    scriptpack()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("production"))
        .stdout(predicate::str::contains("<other>"));
}

#[test]
fn forced_color_output_runs() {
    scriptpack()
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("production"));
}
