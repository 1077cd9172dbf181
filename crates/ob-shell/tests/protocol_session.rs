//! Drives the request loop with scripted input, the way the UI process does.

use std::path::Path;
use std::sync::Arc;

use ob_core::config::AppConfig;
use ob_core::ports::ClockPort;
use ob_shell::bootstrap::{run_app, wire_dependencies};
use ob_shell::AppRuntime;
use serde_json::{json, Value};
use tempfile::TempDir;

struct FixedClock;

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        // 2026-10-16T00:00:00Z
        1_792_108_800_000
    }
}

async fn runtime_with(config: AppConfig) -> AppRuntime {
    let mut deps = wire_dependencies(&config).unwrap();
    deps.clock = Arc::new(FixedClock);
    AppRuntime::new(deps).await
}

async fn memory_runtime() -> AppRuntime {
    runtime_with(AppConfig {
        storage_backend: "memory".to_string(),
        ..AppConfig::empty()
    })
    .await
}

async fn file_runtime(dir: &Path) -> AppRuntime {
    runtime_with(AppConfig {
        data_dir: dir.to_path_buf(),
        storage_backend: "file".to_string(),
        ..AppConfig::empty()
    })
    .await
}

/// Sends every request and returns the parsed replies in order.
async fn exchange(runtime: &AppRuntime, requests: &[Value]) -> Vec<Value> {
    let mut input = String::new();
    for request in requests {
        input.push_str(&request.to_string());
        input.push('\n');
    }
    let mut output = Vec::new();
    run_app(runtime, input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn login() -> Value {
    json!({ "command": "login", "username": "admin", "password": "password123" })
}

fn profile() -> Value {
    json!({
        "command": "submit_profile",
        "name": "Ada",
        "age": 36,
        "email": "ada@example.com"
    })
}

fn songs() -> Value {
    json!({
        "command": "submit_favorite_songs",
        "songs": [{ "songName": "So What", "artist": "Miles Davis" }]
    })
}

fn payment() -> Value {
    json!({
        "command": "submit_payment_info",
        "cardNumber": "4111 1111 1111 1111",
        "expiry": "10/26",
        "cvv": "123"
    })
}

#[tokio::test]
async fn test_full_wizard_over_the_wire() {
    let runtime = memory_runtime().await;
    let replies = exchange(
        &runtime,
        &[
            json!({ "command": "navigate", "path": "/" }),
            login(),
            profile(),
            songs(),
            payment(),
            json!({ "command": "complete_onboarding" }),
            json!({ "command": "navigate", "path": "/" }),
        ],
    )
    .await;

    assert_eq!(replies.len(), 7);
    assert!(replies.iter().all(|reply| reply["ok"] == true), "{replies:?}");

    assert_eq!(replies[0]["data"]["location"], "/login");
    assert_eq!(replies[0]["data"]["view"], json!({ "page": "login" }));
    assert_eq!(replies[1]["data"]["location"], "/onboarding/profile");
    assert_eq!(replies[2]["data"]["location"], "/onboarding/favorite-songs");
    assert_eq!(replies[3]["data"]["location"], "/onboarding/payment-info");
    assert_eq!(replies[4]["data"]["location"], "/onboarding/success");
    assert_eq!(replies[5]["data"]["completed"], true);
    assert_eq!(replies[5]["data"]["resolution"]["location"], "/");
    assert_eq!(replies[6]["data"]["location"], "/");
    assert_eq!(replies[6]["data"]["redirects"], json!([]));
}

#[tokio::test]
async fn test_skip_ahead_is_redirected() {
    let runtime = memory_runtime().await;
    let replies = exchange(
        &runtime,
        &[
            login(),
            profile(),
            json!({ "command": "navigate", "path": "/onboarding/payment-info" }),
            payment(),
        ],
    )
    .await;

    assert_eq!(replies[2]["ok"], true);
    assert_eq!(replies[2]["data"]["location"], "/onboarding/favorite-songs");

    assert_eq!(replies[3]["ok"], false);
    assert_eq!(replies[3]["error"]["kind"], "not_reachable");
    assert_eq!(replies[3]["error"]["redirect"], "/onboarding/favorite-songs");
}

#[tokio::test]
async fn test_expired_card_is_rejected_against_the_clock() {
    let runtime = memory_runtime().await;
    let mut expired = payment();
    expired["expiry"] = json!("09/26");

    let replies = exchange(&runtime, &[login(), profile(), songs(), expired]).await;

    assert_eq!(replies[3]["error"]["kind"], "validation");
    assert_eq!(replies[3]["error"]["fields"][0]["field"], "expiry");
}

#[tokio::test]
async fn test_revisit_shows_stepper_of_rendered_page() {
    let runtime = memory_runtime().await;
    let replies = exchange(
        &runtime,
        &[
            login(),
            profile(),
            json!({ "command": "navigate", "path": "/onboarding/profile" }),
        ],
    )
    .await;

    let stepper = &replies[2]["data"]["stepper"];
    assert_eq!(stepper[0]["status"], "current");
    assert_eq!(stepper[1]["status"], "upcoming");
}

#[tokio::test]
async fn test_failures_are_reported_and_the_loop_continues() {
    let runtime = memory_runtime().await;
    let replies = exchange(
        &runtime,
        &[
            json!({ "command": "login", "username": "admin", "password": "nope" }),
            json!({ "command": "reset" }),
            login(),
            json!({ "command": "submit_profile", "name": "", "age": "abc", "email": "x" }),
            json!({ "command": "get_onboarding_state" }),
        ],
    )
    .await;

    assert_eq!(replies.len(), 5);
    assert_eq!(replies[0]["error"]["kind"], "invalid_credentials");
    assert_eq!(replies[1]["error"]["kind"], "bad_request");
    assert_eq!(replies[2]["ok"], true);

    assert_eq!(replies[3]["error"]["kind"], "validation");
    let fields: Vec<&str> = replies[3]["error"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "age", "email"]);

    let state = &replies[4]["data"];
    assert_eq!(state["isAuthenticated"], true);
    assert_eq!(state["currentStepPath"], "/onboarding/profile");
    assert_eq!(state["steps"][0]["isDone"], false);
}

#[tokio::test]
async fn test_blank_and_garbage_lines() {
    let runtime = memory_runtime().await;
    let mut output = Vec::new();
    let input = "\n   \n{not json\n{\"command\":\"logout\"}\n";
    run_app(&runtime, input.as_bytes(), &mut output).await.unwrap();

    let replies: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["error"]["kind"], "bad_request");
    assert_eq!(replies[1]["ok"], true);
    assert_eq!(replies[1]["data"]["location"], "/login");
}

#[tokio::test]
async fn test_progress_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let runtime = file_runtime(dir.path()).await;
        let replies = exchange(
            &runtime,
            &[
                login(),
                profile(),
                json!({ "command": "save_favorite_songs_draft", "songs": [{ "songName": "Blue in Green" }] }),
            ],
        )
        .await;
        assert!(replies.iter().all(|reply| reply["ok"] == true), "{replies:?}");
    }

    let runtime = file_runtime(dir.path()).await;
    let replies = exchange(
        &runtime,
        &[
            json!({ "command": "get_onboarding_state" }),
            json!({ "command": "navigate", "path": "/login" }),
        ],
    )
    .await;

    let state = &replies[0]["data"];
    assert_eq!(state["isAuthenticated"], true);
    assert_eq!(state["username"], "admin");
    assert_eq!(state["currentStepPath"], "/onboarding/favorite-songs");
    assert_eq!(
        state["progress"]["favoriteSongs"]["songs"][0]["songName"],
        "Blue in Green"
    );
    assert_eq!(replies[1]["data"]["location"], "/onboarding/favorite-songs");
}
