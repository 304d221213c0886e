use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resolve-env"))
        .args(args)
        .env_remove("RESOLVE_ENV_STORE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run resolve-env")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn populate_store(root: &Path, platform: &str, names: &[&str]) {
    for name in names {
        fs::create_dir_all(root.join(platform).join(name).join("lib")).unwrap();
    }
}

#[test]
fn test_success_prints_key_value_lines() {
    let store = TempDir::new().unwrap();
    populate_store(store.path(), "cross-windows", &["pthreads"]);
    let store_arg = store.path().to_string_lossy().into_owned();

    let output = run_cli(&["--platform", "cross-windows", "--store", &store_arg]);

    assert_eq!(output.status.code(), Some(0));
    let expected_path = store
        .path()
        .join("cross-windows/pthreads/lib")
        .to_string_lossy()
        .into_owned();
    assert_eq!(
        stdout(&output),
        format!("CARGO_BUILD_TARGET=x86_64-pc-windows-gnu\nLIBRARY_PATH={expected_path}\n")
    );
}

#[test]
fn test_store_from_environment_variable() {
    let store = TempDir::new().unwrap();
    populate_store(store.path(), "cross-windows", &["pthreads"]);

    let output = Command::new(env!("CARGO_BIN_EXE_resolve-env"))
        .args(["--platform", "cross-windows"])
        .env("RESOLVE_ENV_STORE", store.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run resolve-env");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("LIBRARY_PATH="));
}

#[test]
fn test_missing_dependency_exits_with_one() {
    let store = TempDir::new().unwrap();
    populate_store(store.path(), "native", &["libGL"]);
    let store_arg = store.path().to_string_lossy().into_owned();

    let output = run_cli(&["--platform", "native", "--store", &store_arg]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("libX11"));
}

#[test]
fn test_unknown_platform_exits_with_two() {
    let output = run_cli(&["--platform", "bsd"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bsd"));
}

#[test]
fn test_list_includes_config_profiles() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("profiles.toml");
    fs::write(&config_path, "[profiles.bsd]\ndependencies = []\n").unwrap();
    let config_arg = config_path.to_string_lossy().into_owned();

    let output = run_cli(&["--list", "--config", &config_arg]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "bsd\ncross-windows\nnative\n");
}

#[test]
fn test_json_format_and_invalid_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("profiles.toml");
    fs::write(
        &config_path,
        "[profiles.bsd]\ndependencies = []\n[profiles.bsd.env]\nCC = \"clang\"\n",
    )
    .unwrap();
    let config_arg = config_path.to_string_lossy().into_owned();

    let output = run_cli(&["--platform", "bsd", "--config", &config_arg, "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["CC"], "clang");
    assert_eq!(parsed["LD_LIBRARY_PATH"], "");

    fs::write(&config_path, "[profiles.bsd]\ndependencies = [\"a\", \"a\"]\n").unwrap();
    let output = run_cli(&["--platform", "bsd", "--config", &config_arg]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_usage_errors_exit_with_three() {
    assert_eq!(run_cli(&[]).status.code(), Some(3));
    assert_eq!(
        run_cli(&["--platform", "native", "--format", "xml"]).status.code(),
        Some(3)
    );
    assert_eq!(run_cli(&["--no-such-flag"]).status.code(), Some(3));

    let help = run_cli(&["--help"]);
    assert_eq!(help.status.code(), Some(0));
    assert!(stdout(&help).contains("--platform"));
}
