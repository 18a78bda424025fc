//! Binary-level checks that need no external tools

use std::path::Path;
use std::process::{Command, Output};

fn devconsole(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_devconsole"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = tempfile::tempdir().unwrap();

    let first = devconsole(dir.path(), &["config", "init"]);
    assert!(first.status.success());
    let written = std::fs::read_to_string(dir.path().join("devconsole.toml")).unwrap();
    assert!(written.contains("core_dir = \"core\""));

    let second = devconsole(dir.path(), &["config", "init"]);
    assert!(!second.status.success());

    let forced = devconsole(dir.path(), &["config", "init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn config_show_reports_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("devconsole.toml"),
        "[project]\ncore_dir = \"rust-core\"\n",
    )
    .unwrap();

    let output = devconsole(dir.path(), &["config", "show"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# loaded from"));
    assert!(stdout.contains("core_dir = \"rust-core\""));
    assert!(stdout.contains("wrapper_dir = \"kotlin-wrapper\""));
}

#[test]
fn build_without_core_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("devconsole.toml"), "").unwrap();

    let output = devconsole(dir.path(), &["build", "core"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("directory not found"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("devconsole.toml"), "[toolchain]\ncomponents = [\"gradle\"]\n")
        .unwrap();

    let output = devconsole(dir.path(), &["config", "show"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("devconsole.toml"));
}
