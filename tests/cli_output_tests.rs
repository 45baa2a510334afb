//! CLI output integration tests.
//!
//! Everything here runs without the aposta service: unauthenticated
//! sessions never touch the network, and the one networked case points
//! at a closed port.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn apostas() -> Command {
    let mut cmd = cargo_bin_cmd!("apostas");
    // Keep the host environment out of session resolution.
    cmd.env_remove("APOSTAS_TOKEN");
    cmd
}

/// A config path that does not exist, so defaults apply.
fn missing_config() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_help() {
    apostas()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apostas"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("place"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn test_version() {
    apostas()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("apostas"));
}

#[test]
fn list_without_any_auth_makes_no_request_and_succeeds() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");

    apostas()
        .args(["list", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("no request was made"));
}

#[test]
fn list_json_reports_skipped_outcome() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");

    apostas()
        .args(["--json", "list", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\":\"skipped\""))
        .stdout(predicate::str::contains("\"authenticated\":false"));
}

#[test]
fn list_with_anonymous_session_makes_no_request_and_succeeds() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[auth]\n").unwrap();

    apostas()
        .args(["list", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("not authenticated"));
}

#[test]
fn list_with_token_but_dead_endpoint_exits_nonzero() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");
    // Port 1 refuses connections; keep the retries short.
    std::fs::write(
        &config,
        concat!(
            "[api]\n",
            "base_url = \"http://127.0.0.1:1\"\n",
            "[http]\n",
            "timeout_ms = 500\n",
            "connect_timeout_ms = 200\n",
            "retry_max_attempts = 1\n",
            "retry_backoff_ms = 0\n",
        ),
    )
    .unwrap();

    apostas()
        .args(["list", "--token", "tok", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch bets"));
}

#[test]
fn show_without_auth_is_an_error() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");

    apostas()
        .args(["show", "some-id", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authenticated"));
}

#[test]
fn place_without_auth_is_an_error() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");

    apostas()
        .args([
            "place",
            "--partida",
            "7",
            "--resultado",
            "empate",
            "--valor",
            "10.5",
            "--config",
        ])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authenticated"));
}

#[test]
fn place_rejects_unknown_resultado() {
    apostas()
        .args([
            "place",
            "--partida",
            "7",
            "--resultado",
            "VITORIA_DO_JUIZ",
            "--valor",
            "10",
        ])
        .assert()
        .failure();
}

#[test]
fn session_reports_uninitialized_without_config() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");

    apostas()
        .args(["--json", "session", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"initialized\":false"))
        .stdout(predicate::str::contains("\"authenticated\":false"));
}

#[test]
fn session_reports_token_source_with_flag() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");

    apostas()
        .args(["--json", "session", "--token", "tok", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authenticated\":true"))
        .stdout(predicate::str::contains("--token flag"));
}

#[test]
fn session_reads_the_environment_token() {
    let dir = missing_config();
    let config = dir.path().join("config.toml");

    let mut cmd = cargo_bin_cmd!("apostas");
    cmd.env("APOSTAS_TOKEN", "tok-env")
        .args(["--json", "session", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authenticated\":true"))
        .stdout(predicate::str::contains("environment variable"));
}
