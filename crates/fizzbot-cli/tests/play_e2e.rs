//! End-to-end `fizzbot play` runs against a mock quiz server.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fizzbot() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("fizzbot").unwrap()
}

async fn mount_interview(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/fizzbot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Thank you for your application",
            "nextQuestion": "/fizzbot/questions/1"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fizzbot/questions/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Are you ready?",
            "nextQuestion": "/fizzbot/questions/1",
            "exampleResponse": {"answer": "go"}
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fizzbot/questions/1"))
        .and(body_json(json!({"answer": "go"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "correct",
            "message": "Let's go",
            "nextQuestion": "/fizzbot/questions/2"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fizzbot/questions/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Fizzbuzz",
            "nextQuestion": "/fizzbot/questions/2",
            "numbers": [1, 2, 3, 4, 5, 15],
            "rules": [{"number": 3, "response": "Fizz"}, {"number": 5, "response": "Buzz"}],
            "exampleResponse": {"answer": "1 2 Fizz 4 Buzz"}
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fizzbot/questions/2"))
        .and(body_json(json!({"answer": "1 2 Fizz 4 Buzz FizzBuzz"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "interview complete",
            "message": "Congratulations, you passed"
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fizzbot/questions/2"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "result": "incorrect",
            "message": "That answer is wrong"
        })))
        .with_priority(10)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn auto_play_completes_interview() {
    let server = MockServer::start().await;
    mount_interview(&server).await;
    let uri = server.uri();

    tokio::task::spawn_blocking(move || {
        fizzbot()
            .args(["play", "--domain", &uri])
            .env_remove("FIZZBOT_DOMAIN")
            .assert()
            .success()
            .stdout(predicate::str::contains("Starting fizzbot"))
            .stdout(predicate::str::contains("Let's go"))
            .stdout(predicate::str::contains("1 2 Fizz 4 Buzz FizzBuzz"))
            .stdout(predicate::str::contains("Congratulations, you passed"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn interactive_play_reads_stdin() {
    let server = MockServer::start().await;
    mount_interview(&server).await;
    let uri = server.uri();

    tokio::task::spawn_blocking(move || {
        fizzbot()
            .args(["play", "--interactive", "--domain", &uri])
            .env_remove("FIZZBOT_DOMAIN")
            .write_stdin("go\n1 2 3\n1 2 Fizz 4 Buzz FizzBuzz\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("That answer is wrong"))
            .stdout(predicate::str::contains("Congratulations, you passed"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn interactive_play_fails_when_input_ends() {
    let server = MockServer::start().await;
    mount_interview(&server).await;
    let uri = server.uri();

    tokio::task::spawn_blocking(move || {
        fizzbot()
            .args(["play", "--interactive", "--domain", &uri])
            .env_remove("FIZZBOT_DOMAIN")
            .write_stdin("go\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("input closed"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn config_file_supplies_domain() {
    let server = MockServer::start().await;
    mount_interview(&server).await;

    let dir = TempDir::new().unwrap();
    let config = dir.path().join("fizzbot.toml");
    std::fs::write(&config, format!("domain = \"{}\"\n", server.uri())).unwrap();

    tokio::task::spawn_blocking(move || {
        fizzbot()
            .arg("play")
            .arg("--config")
            .arg(&config)
            .env_remove("FIZZBOT_DOMAIN")
            .assert()
            .success()
            .stdout(predicate::str::contains("Congratulations, you passed"));
        drop(dir);
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn rust_log_enables_debug_events() {
    let server = MockServer::start().await;
    mount_interview(&server).await;
    let uri = server.uri();

    tokio::task::spawn_blocking(move || {
        fizzbot()
            .args(["play", "--domain", &uri])
            .env_remove("FIZZBOT_DOMAIN")
            .env("RUST_LOG", "fizzbot=debug")
            .assert()
            .success()
            .stderr(predicate::str::contains("submitting answer"))
            .stderr(predicate::str::contains("response received"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn default_log_level_keeps_stderr_quiet() {
    let server = MockServer::start().await;
    mount_interview(&server).await;
    let uri = server.uri();

    tokio::task::spawn_blocking(move || {
        fizzbot()
            .args(["play", "--domain", &uri])
            .env_remove("FIZZBOT_DOMAIN")
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    })
    .await
    .unwrap();
}
