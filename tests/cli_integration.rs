use assert_cmd::Command;
use predicates::prelude::*;

fn sizewise() -> Command {
    Command::cargo_bin("sizewise").unwrap()
}

#[test]
fn shows_help() {
    sizewise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rank files and folders by size"));
}

#[test]
fn shows_version() {
    sizewise()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_path_prints_usage_and_exits_1() {
    sizewise()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn nonexistent_path_exits_1() {
    sizewise()
        .arg("/nonexistent/path/12345")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot scan"));
}

#[test]
fn invalid_config_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[tui]\ntick_rate_ms = 0\n").unwrap();

    sizewise()
        .arg("--config")
        .arg(&config)
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("tick_rate_ms"));
}
