use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn anxious_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "emotion": "anxious",
        "confidence": 0.82,
        "analysis": "Your reflection shows signs of anxiety.",
        "suggestions": ["Take deep breaths", "Prepare talking points"]
    }))
}

#[tokio::test]
async fn test_analyze_prints_result() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({ "text": "I feel nervous about my first job interview" })))
        .respond_with(anxious_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", home.path())
        .env("REFLECT_SERVICE_URL", mock_server.uri())
        .args([
            "analyze",
            "--text",
            "I feel nervous about my first job interview",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("anxious"))
        .stdout(predicate::str::contains("82% confidence"))
        .stdout(predicate::str::contains(
            "1. Take deep breaths\n2. Prepare talking points",
        ));
}

#[tokio::test]
async fn test_analyze_reads_stdin_and_prints_json() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({ "text": "from stdin" })))
        .respond_with(anxious_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", home.path())
        .args(["--service-url", &mock_server.uri(), "analyze", "--json"])
        .write_stdin("  from stdin\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["emotion"], "anxious");
    assert_eq!(value["suggestions"][1], "Prepare talking points");
}

#[tokio::test]
async fn test_long_reflection_is_capped_at_max_chars() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({ "text": "a".repeat(1000) })))
        .respond_with(anxious_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", home.path())
        .env("REFLECT_SERVICE_URL", mock_server.uri())
        .args(["analyze", "--text", "-"])
        .write_stdin("a".repeat(5000))
        .assert()
        .success()
        .stdout(predicate::str::contains("anxious"));
}

#[tokio::test]
async fn test_configured_max_chars_caps_reflection() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();
    std::fs::write(home.path().join("config.toml"), "max_chars = 6\n").unwrap();

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({ "text": "I feel" })))
        .respond_with(anxious_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", home.path())
        .env("REFLECT_SERVICE_URL", mock_server.uri())
        .args(["analyze", "--text", "I feel nervous"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_empty_reflection_is_not_sent() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .respond_with(anxious_response())
        .expect(0)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", home.path())
        .env("REFLECT_SERVICE_URL", mock_server.uri())
        .args(["analyze", "--text", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Please enter your reflection before submitting.",
        ));
}

#[tokio::test]
async fn test_application_error_uses_fallback_message() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": true })))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", home.path())
        .env("REFLECT_SERVICE_URL", mock_server.uri())
        .args(["analyze", "--text", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: An error occurred while analyzing your reflection.",
        ));
}

#[tokio::test]
async fn test_flag_overrides_env_url() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(anxious_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", home.path())
        .env("REFLECT_SERVICE_URL", "http://127.0.0.1:1")
        .args(["analyze", "--service-url", &mock_server.uri(), "--text", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anxious"));
}

#[test]
fn test_unreachable_service_reports_connection_error() {
    let home = tempdir().unwrap();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", home.path())
        .env("REFLECT_SERVICE_URL", format!("http://127.0.0.1:{port}"))
        .args(["analyze", "--text", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to connect to the analysis service"));
}
