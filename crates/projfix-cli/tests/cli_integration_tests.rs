//! CLI integration tests
//!
//! Run the `projfix` binary against project files in a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const OUTDATED_PROJECT: &str = r#"<Project Sdk="Godot.NET.Sdk/4.2.0">
  <PropertyGroup>
    <TargetFramework>net6.0</TargetFramework>
    <EnableDynamicLoading>true</EnableDynamicLoading>
  </PropertyGroup>
</Project>
"#;

const CURRENT_PROJECT: &str = r#"<Project Sdk="Godot.NET.Sdk/4.4.0">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
  </PropertyGroup>
</Project>
"#;

fn write_project(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("Game.csproj");
    fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_projfix"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_normalize_rewrites_outdated_project() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_project(&temp_dir, OUTDATED_PROJECT);

    let output = run(&["normalize", path_arg(&path)]);

    assert!(
        output.status.success(),
        "normalize should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SDK set to Godot.NET.Sdk/4.4.0"));
    assert!(stdout.contains("added TargetFramework net7.0 for android"));
    assert!(stdout.contains("Saved"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<Project Sdk=\"Godot.NET.Sdk/4.4.0\">"));
    assert!(written.contains(
        "<TargetFramework Condition=\" '$(GodotTargetPlatform)' == 'ios' \">net8.0</TargetFramework>"
    ));
}

#[test]
fn test_normalize_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_project(&temp_dir, OUTDATED_PROJECT);

    assert!(run(&["normalize", path_arg(&path)]).status.success());
    let after_first = fs::read_to_string(&path).unwrap();

    let output = run(&["normalize", path_arg(&path)]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("is up to date"));
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn test_dry_run_leaves_file_alone() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_project(&temp_dir, OUTDATED_PROJECT);

    let output = run(&["normalize", path_arg(&path), "--dry-run"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Dry run"));
    assert_eq!(fs::read_to_string(&path).unwrap(), OUTDATED_PROJECT);
}

#[test]
fn test_normalize_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_project(&temp_dir, OUTDATED_PROJECT);

    let output = run(&["normalize", path_arg(&path), "--dry-run", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"sdk_updated\": true"));
    assert!(stdout.contains("\"migrated\": false"));
}

#[test]
fn test_check_reports_pending_changes() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_project(&temp_dir, OUTDATED_PROJECT);

    let output = run(&["check", path_arg(&path)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("needs normalization"));
    assert_eq!(fs::read_to_string(&path).unwrap(), OUTDATED_PROJECT);
}

#[test]
fn test_check_passes_current_project() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_project(&temp_dir, CURRENT_PROJECT);

    let output = run(&["check", path_arg(&path)]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_project_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Missing.csproj");

    let output = run(&["normalize", path_arg(&path)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_NOT_FOUND"));
}

#[test]
fn test_malformed_project_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_project(&temp_dir, "<Project><PropertyGroup>");

    let output = run(&["check", path_arg(&path)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_DOCUMENT"));
}

#[test]
fn test_custom_config_drives_requirements() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_project(&temp_dir, CURRENT_PROJECT);
    let config_path = temp_dir.path().join("projfix.toml");
    fs::write(
        &config_path,
        "[[requirements]]\nplatform = \"web\"\nframework = \"net9.0\"\n",
    )
    .unwrap();

    let output = run(&[
        "normalize",
        path_arg(&path),
        "--config",
        path_arg(&config_path),
    ]);

    assert!(output.status.success());
    assert!(fs::read_to_string(&path)
        .unwrap()
        .contains("== 'web' \">net9.0</TargetFramework>"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("projfix.toml");
    fs::write(&config_path, "requirements = []\n").unwrap();

    let output = run(&["show-config", "--config", path_arg(&config_path)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_CONFIG"));
}

#[test]
fn test_show_config_prints_defaults() {
    let output = run(&["show-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sdk_identifier = \"Godot.NET.Sdk/4.4.0\""));
    assert!(stdout.contains("platform = \"android\""));
}
