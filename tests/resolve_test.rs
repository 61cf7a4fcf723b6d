use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

/// Run runcfg with a clean environment: no TEST_ENV, no secrets.
fn runcfg(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("runcfg");
    cmd.current_dir(dir.path())
        .env_remove("TEST_ENV")
        .env_remove("CYPRESS_LOGIN_URL")
        .env_remove("CYPRESS_USERNAME")
        .env_remove("CYPRESS_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `resolve` and parse the JSON run context from stdout.
fn resolve_json(cmd: &mut Command) -> Value {
    let output = cmd.arg("resolve").output().unwrap();
    assert!(
        output.status.success(),
        "resolve failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn resolve_uses_file_base_url() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "https://dev.example.com", "username": "qa"}"#)
        .unwrap();

    let ctx = resolve_json(&mut runcfg(&dir));

    assert_eq!(ctx["baseUrl"], "https://dev.example.com");
    assert_eq!(ctx["env"]["baseUrl"], "https://dev.example.com");
    assert_eq!(ctx["env"]["username"], "qa");
    assert_eq!(ctx["specPattern"], "tests/ui/e2e/**/*.cy.js");
}

#[test]
fn secret_wins_only_where_present() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "A", "username": "u1"}"#)
        .unwrap();

    let ctx = resolve_json(runcfg(&dir).env("CYPRESS_LOGIN_URL", "B"));

    assert_eq!(ctx["baseUrl"], "B");
    assert_eq!(
        ctx["env"],
        serde_json::json!({"baseUrl": "B", "username": "u1"})
    );
}

#[test]
fn test_env_selects_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "https://dev.example.com"}"#)
        .unwrap();
    dir.child("config/env.ci.json")
        .write_str(r#"{"baseUrl": "https://ci.example.com"}"#)
        .unwrap();

    let ctx = resolve_json(runcfg(&dir).env("TEST_ENV", "ci"));

    assert_eq!(ctx["baseUrl"], "https://ci.example.com");
}

#[test]
fn env_flag_beats_test_env() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.ci.json")
        .write_str(r#"{"baseUrl": "https://ci.example.com"}"#)
        .unwrap();
    dir.child("config/env.qa.json")
        .write_str(r#"{"baseUrl": "https://qa.example.com"}"#)
        .unwrap();

    let ctx = resolve_json(runcfg(&dir).env("TEST_ENV", "ci").args(["--env", "qa"]));

    assert_eq!(ctx["baseUrl"], "https://qa.example.com");
}

#[test]
fn custom_config_dir() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("e2e/settings/env.dev.json")
        .write_str(r#"{"baseUrl": "https://dev.example.com"}"#)
        .unwrap();

    let ctx = resolve_json(runcfg(&dir).args(["--config-dir", "e2e/settings"]));

    assert_eq!(ctx["baseUrl"], "https://dev.example.com");
}

#[test]
fn missing_file_warns_once_and_succeeds() {
    let dir = assert_fs::TempDir::new().unwrap();

    let output = runcfg(&dir).arg("resolve").output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Missing environment config file").count(), 1);
    assert!(stderr.contains("env.dev.json"));

    let ctx: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ctx["baseUrl"], Value::Null);
    assert_eq!(ctx["env"], serde_json::json!({}));
}

#[test]
fn missing_file_with_secrets_uses_secrets() {
    let dir = assert_fs::TempDir::new().unwrap();

    let ctx = resolve_json(
        runcfg(&dir)
            .env("CYPRESS_LOGIN_URL", "https://ci.example.com")
            .env("CYPRESS_USERNAME", "ci-bot"),
    );

    assert_eq!(ctx["baseUrl"], "https://ci.example.com");
    assert_eq!(ctx["env"]["username"], "ci-bot");
    assert!(ctx["env"].get("password").is_none());
}

#[test]
fn empty_secret_counts_as_set() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "A", "username": "u1"}"#)
        .unwrap();

    let ctx = resolve_json(runcfg(&dir).env("CYPRESS_USERNAME", ""));

    assert_eq!(ctx["env"]["username"], "");
}

#[test]
fn missing_base_url_is_fatal() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.qa.json")
        .write_str(r#"{"username": "qa"}"#)
        .unwrap();

    runcfg(&dir)
        .args(["--env", "qa", "resolve"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("baseUrl"))
        .stderr(predicate::str::contains("env.qa.json"));
}

#[test]
fn missing_base_url_is_fatal_even_with_secret() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json").write_str("{}").unwrap();

    runcfg(&dir)
        .env("CYPRESS_LOGIN_URL", "https://ci.example.com")
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required key \"baseUrl\""));
}

#[test]
fn invalid_json_is_fatal() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "https://dev.example.com","#)
        .unwrap();

    runcfg(&dir)
        .arg("resolve")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed environment config file"));
}

#[test]
fn password_masked_unless_requested() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "A"}"#)
        .unwrap();

    runcfg(&dir)
        .env("CYPRESS_PASSWORD", "hunter2")
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("hunter2").not());

    runcfg(&dir)
        .env("CYPRESS_PASSWORD", "hunter2")
        .args(["resolve", "--show-secrets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn dotenv_format() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "https://dev.example.com", "retries": 2}"#)
        .unwrap();

    runcfg(&dir)
        .args(["resolve", "--format", "dotenv"])
        .assert()
        .success()
        .stdout("baseUrl=https://dev.example.com\nretries=2\n");
}

#[test]
fn output_flag_writes_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "https://dev.example.com"}"#)
        .unwrap();

    runcfg(&dir)
        .args(["resolve", "-o", "resolved.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Written to resolved.json"));

    let written = std::fs::read_to_string(dir.path().join("resolved.json")).unwrap();
    let ctx: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(ctx["baseUrl"], "https://dev.example.com");
}

#[test]
fn definitions_have_lowest_precedence() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "A", "username": "file-user"}"#)
        .unwrap();

    let ctx = resolve_json(runcfg(&dir).args([
        "-D",
        "username=cli-user",
        "-D",
        "viewport=1280x720",
    ]));

    assert_eq!(ctx["env"]["username"], "file-user");
    assert_eq!(ctx["env"]["viewport"], "1280x720");
}

#[test]
fn malformed_definition_rejected() {
    let dir = assert_fs::TempDir::new().unwrap();

    runcfg(&dir)
        .args(["-D", "no-equals", "resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn resolution_is_idempotent() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/env.dev.json")
        .write_str(r#"{"baseUrl": "A", "username": "u1", "flags": {"beta": true}}"#)
        .unwrap();

    let first = runcfg(&dir)
        .env("CYPRESS_LOGIN_URL", "B")
        .arg("resolve")
        .output()
        .unwrap();
    let second = runcfg(&dir)
        .env("CYPRESS_LOGIN_URL", "B")
        .arg("resolve")
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
