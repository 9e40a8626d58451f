//! Integration tests for the `ax` binary.
//!
//! Argument parsing, exit codes, and end-to-end command flows against a
//! wiremock control plane — no real account or network required.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use predicates::prelude::*;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// 44 characters, like a real account token.
const TOKEN: &str = "0123456789012345678901234567890123456789abcd";

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `ax` binary with env isolation.
///
/// `HOME` points at the given directory so the token store never touches
/// the user's real one, and the URL env vars are cleared.
fn ax_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("ax").unwrap();
    cmd.env("HOME", home)
        .env_remove("CLI_API_URL")
        .env_remove("CLI_SIGNUP_URL");
    cmd
}

/// Save a token under the given HOME, the way `ax login` would.
fn save_token(home: &Path) {
    ax_config::TokenStore::at(home.join(".ax").join("cache.db"))
        .save(&SecretString::from(TOKEN.to_owned()))
        .unwrap();
}

fn site_json(n: u32) -> serde_json::Value {
    json!({
        "id": format!("site_{n}"),
        "domain": format!("site{n}.example.com"),
        "status": "active",
        "createdAt": format!("2024-06-0{n}T10:00:00Z"),
        "updatedAt": format!("2024-06-0{n}T11:00:00Z"),
    })
}

/// Start a mock control plane returning `body` for `GET /v1/sites`.
fn mock_sites_endpoint(
    rt: &tokio::runtime::Runtime,
    status: u16,
    body: serde_json::Value,
) -> MockServer {
    rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/sites"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;
        server
    })
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = ax_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    ax_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("init")
            .and(predicate::str::contains("login"))
            .and(predicate::str::contains("register"))
            .and(predicate::str::contains("site"))
            .and(predicate::str::contains("settings"))
            .and(predicate::str::contains("purge")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    ax_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ax"));
}

#[test]
fn test_invalid_subcommand() {
    let home = tempfile::tempdir().unwrap();
    let output = ax_cmd(home.path()).arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(
        text.contains("unrecognized") || text.contains("invalid"),
        "Expected parse error:\n{text}"
    );
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    ax_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Missing required flags are parser errors ────────────────────────

#[test]
fn test_purge_requires_url_flag() {
    let home = tempfile::tempdir().unwrap();
    ax_cmd(home.path())
        .args(["purge", "url-purge", "-d", "example.com"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn test_purge_all_requires_domain_flag() {
    let home = tempfile::tempdir().unwrap();
    ax_cmd(home.path())
        .args(["purge", "url-purge", "all"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--domain"));
}

#[test]
fn test_settings_requires_both_flags() {
    let home = tempfile::tempdir().unwrap();
    ax_cmd(home.path())
        .args(["settings", "-d", "example.com"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--config"));
}

// ── Authentication gate ─────────────────────────────────────────────

#[test]
fn test_site_list_without_token_fails_before_any_request() {
    let home = tempfile::tempdir().unwrap();
    // An unroutable API base: reaching the network would fail with a
    // connection error (exit 7), not the auth error asserted here.
    ax_cmd(home.path())
        .env("CLI_API_URL", "http://127.0.0.1:9")
        .args(["site", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No token found"));
}

#[test]
fn test_purge_without_token_fails_before_any_request() {
    let home = tempfile::tempdir().unwrap();
    ax_cmd(home.path())
        .env("CLI_API_URL", "http://127.0.0.1:9")
        .args(["purge", "url-purge", "-d", "example.com", "-u", "https://example.com/x"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No token found"));
}

// ── Settings file errors ────────────────────────────────────────────

#[test]
fn test_settings_missing_config_file() {
    let home = tempfile::tempdir().unwrap();
    ax_cmd(home.path())
        .args(["settings", "-d", "example.com", "-c", "definitely-missing.yaml"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_settings_invalid_domain_flag() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("site.yaml");
    std::fs::write(&config, "target: backend.internal\n").unwrap();

    ax_cmd(home.path())
        .args(["settings", "--domain=-bad.com", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("valid domain name"));
}

// ── End-to-end against a mock control plane ─────────────────────────

#[test]
fn test_site_list_renders_the_table() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = mock_sites_endpoint(
        &rt,
        200,
        json!([site_json(1), site_json(2), site_json(3)]),
    );

    let home = tempfile::tempdir().unwrap();
    save_token(home.path());

    ax_cmd(home.path())
        .env("CLI_API_URL", server.uri())
        .args(["site", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ID")
                .and(predicate::str::contains("Domain"))
                .and(predicate::str::contains("Status"))
                .and(predicate::str::contains("Created At"))
                .and(predicate::str::contains("Updated At"))
                .and(predicate::str::contains("site1.example.com"))
                .and(predicate::str::contains("site2.example.com"))
                .and(predicate::str::contains("site3.example.com")),
        );
}

#[test]
fn test_site_list_empty_prints_notice() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = mock_sites_endpoint(&rt, 200, json!([]));

    let home = tempfile::tempdir().unwrap();
    save_token(home.path());

    ax_cmd(home.path())
        .env("CLI_API_URL", server.uri())
        .args(["site", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No sites found")
                .and(predicate::str::contains("Domain").not()),
        );
}

#[test]
fn test_rejected_token_prints_the_payload_and_aborts() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = mock_sites_endpoint(&rt, 401, json!({"error": "invalid token"}));

    let home = tempfile::tempdir().unwrap();
    save_token(home.path());

    ax_cmd(home.path())
        .env("CLI_API_URL", server.uri())
        .args(["site", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("invalid token"));
}

#[test]
fn test_settings_pushes_the_parsed_document() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/site/settings/example.com"))
            .and(wiremock::matchers::body_json(json!({
                "target": "backend.internal",
                "ssl": "flexible",
                "waf": [],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"applied": true})))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let home = tempfile::tempdir().unwrap();
    save_token(home.path());
    let config = home.path().join("example.com.yaml");
    std::fs::write(&config, "target: backend.internal\nssl: flexible\nwaf: []\n").unwrap();

    ax_cmd(home.path())
        .env("CLI_API_URL", server.uri())
        .args(["settings", "-d", "example.com", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("applied"));
}
