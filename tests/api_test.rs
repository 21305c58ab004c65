//! HTTP API tests driving the router directly.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use guesswork::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(state)
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn check_request(post_id: Option<&str>, user_id: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/check")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(post_id) = post_id {
        builder = builder.header("x-post-id", post_id);
    }
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn seeded_state(post_id: &str, word: &str) -> AppState {
    let state = AppState::new();
    state
        .store
        .create_with_word(post_id, word.parse().unwrap())
        .unwrap();
    state
}

#[tokio::test]
async fn test_init_requires_post_id() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/init")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(AppState::new(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "postId is required but missing from context");
}

#[tokio::test]
async fn test_init_creates_config_lazily() {
    let state = AppState::new();
    let request = Request::builder()
        .method("GET")
        .uri("/api/init")
        .header("x-post-id", "t3_abc")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(state.clone(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "postId": "t3_abc"}));
    assert!(state.store.maybe_get("t3_abc").unwrap().is_some());
}

#[tokio::test]
async fn test_init_keeps_existing_word() {
    let state = seeded_state("t3_abc", "crane");
    let request = Request::builder()
        .method("GET")
        .uri("/api/init")
        .header("x-post-id", "t3_abc")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(state.clone(), request).await;

    assert_eq!(status, StatusCode::OK);
    let config = state.store.get("t3_abc").unwrap();
    assert_eq!(config.word_of_the_day.to_string(), "crane");
}

#[tokio::test]
async fn test_check_evaluates_a_guess() {
    let state = seeded_state("t3_abc", "crane");
    let request = check_request(Some("t3_abc"), Some("u_1"), json!({"guess": "slate"}));
    let (status, body) = send(state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "exists": true,
            "solved": false,
            "correct": ["absent", "absent", "correct", "absent", "correct"],
        })
    );
}

#[tokio::test]
async fn test_check_reports_the_solve() {
    let state = seeded_state("t3_abc", "crane");
    let request = check_request(Some("t3_abc"), Some("u_1"), json!({"guess": "crane"}));
    let (_, body) = send(state, request).await;

    assert_eq!(body["solved"], true);
    assert_eq!(
        body["correct"],
        json!(["correct", "correct", "correct", "correct", "correct"])
    );
}

#[tokio::test]
async fn test_check_rejects_unknown_words_without_leaking_states() {
    let state = seeded_state("t3_abc", "crane");
    let request = check_request(Some("t3_abc"), Some("u_1"), json!({"guess": "zzzzz"}));
    let (status, body) = send(state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exists"], false);
    assert_eq!(body["solved"], false);
    assert_eq!(
        body["correct"],
        json!(["initial", "initial", "initial", "initial", "initial"])
    );
}

#[tokio::test]
async fn test_check_requires_identity() {
    let state = seeded_state("t3_abc", "crane");

    let request = check_request(None, Some("u_1"), json!({"guess": "slate"}));
    let (status, body) = send(state.clone(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "postId is required");

    let request = check_request(Some("t3_abc"), None, json!({"guess": "slate"}));
    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Must be logged in");
}

#[tokio::test]
async fn test_check_validates_the_guess() {
    let state = seeded_state("t3_abc", "crane");

    let request = check_request(Some("t3_abc"), Some("u_1"), json!({}));
    let (status, body) = send(state.clone(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Guess is required");

    let request = check_request(Some("t3_abc"), Some("u_1"), json!({"guess": "cat"}));
    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Guess must be 5 letters long");
}

#[tokio::test]
async fn test_check_without_config_is_an_internal_error() {
    let request = check_request(Some("t3_new"), Some("u_1"), json!({"guess": "slate"}));
    let (status, body) = send(AppState::new(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_reveal_returns_the_secret_word() {
    let state = seeded_state("t3_abc", "crane");
    let request = Request::builder()
        .method("GET")
        .uri("/api/reveal")
        .header("x-post-id", "t3_abc")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "word": "crane"}));
}
