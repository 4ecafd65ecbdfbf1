//! Integration tests for the poker HTTP endpoints.
//!
//! These tests drive the full router (extractors, handlers, store) with
//! `tower::ServiceExt::oneshot`:
//! 1. Create and join hand out tokens via body and cookie
//! 2. Votes stay hidden until the moderator reveals them
//! 3. Moderator-only actions are refused for everyone else
//! 4. Static assets are served from the configured directory

use std::fs;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use futures::future::join_all;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use scrum_poker::adapters::{app_router, InMemorySessionStore, SessionHandlers};
use scrum_poker::config::ServerConfig;
use scrum_poker::ports::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    store: Arc<InMemorySessionStore>,
    _static_dir: TempDir,
}

fn test_app() -> TestApp {
    let static_dir = tempfile::tempdir().unwrap();
    fs::write(
        static_dir.path().join("index.html"),
        "<html><body>Scrum Poker</body></html>",
    )
    .unwrap();
    fs::create_dir(static_dir.path().join("js")).unwrap();
    fs::write(static_dir.path().join("js").join("main.js"), "getStatus();").unwrap();

    let server = ServerConfig {
        static_dir: static_dir.path().to_string_lossy().into_owned(),
        ..Default::default()
    };
    let store = Arc::new(InMemorySessionStore::new());
    let router = app_router(SessionHandlers::new(store.clone()), &server);

    TestApp {
        router,
        store,
        _static_dir: static_dir,
    }
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
    text: String,
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse {
        status,
        headers,
        body,
        text,
    }
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn reveal(session_id: &str, token: &str, show: bool) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri(format!("/session/{}", session_id))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "ShouldShow": show }).to_string()))
        .unwrap()
}

/// Creates a session and returns (session_id, moderator_token).
async fn create(app: &Router, username: &str, cards: &str) -> (String, String) {
    let response = send(
        app,
        form("/create", &format!("username={}&cards={}", username, cards)),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    (
        response.body["session_id"].as_str().unwrap().to_string(),
        response.body["token"].as_str().unwrap().to_string(),
    )
}

/// Joins a session and returns the participant token.
async fn join(app: &Router, session_id: &str, username: &str) -> String {
    let response = send(
        app,
        form(
            "/join",
            &format!("username={}&session_id={}", username, session_id),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    response.body["token"].as_str().unwrap().to_string()
}

async fn vote(app: &Router, session_id: &str, token: &str, label: &str) -> StatusCode {
    send(
        app,
        authed(
            Method::PUT,
            &format!("/session/{}/{}", session_id, label),
            token,
        ),
    )
    .await
    .status
}

async fn status(app: &Router, session_id: &str, token: &str) -> Value {
    let response = send(
        app,
        authed(Method::GET, &format!("/session/{}/status", session_id), token),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    response.body
}

fn votes_of(status: &Value) -> Vec<(String, String)> {
    status["Votes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| {
            (
                v["Name"].as_str().unwrap().to_string(),
                v["Vote"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

// =============================================================================
// Create / Join
// =============================================================================

#[tokio::test]
async fn create_returns_token_in_body_and_cookie() {
    let app = test_app();
    let response = send(&app.router, form("/create", "username=Ana&cards=1,2,3")).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let token = response.body["token"].as_str().unwrap();
    let cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with(&format!("uuid_token={};", token)));
    assert!(cookie.contains("HttpOnly"));
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn create_accepts_capitalised_form_fields() {
    let app = test_app();
    let response = send(&app.router, form("/create", "Username=Ana&Cards=S,M,L")).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
}

#[tokio::test]
async fn create_with_single_card_is_invalid_deck() {
    let app = test_app();
    let response = send(&app.router, form("/create", "username=Ana&cards=x")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_DECK");
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn create_with_blank_name_is_rejected() {
    let app = test_app();
    let response = send(&app.router, form("/create", "username=%20%20&cards=1,2")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn create_filters_blank_and_reserved_cards() {
    let app = test_app();
    let (session_id, token) = create(&app.router, "Ana", ",status,3,5").await;

    let view = send(
        &app.router,
        authed(Method::GET, &format!("/session/{}", session_id), &token),
    )
    .await;
    assert_eq!(view.status, StatusCode::OK);
    assert_eq!(view.body["cards"], json!(["3", "5"]));
    assert_eq!(view.body["is_moderator"], true);
    assert_eq!(view.body["poll_interval_ms"], 2500);
    assert_eq!(view.body["participants"], json!(["Ana"]));
}

#[tokio::test]
async fn join_unknown_session_is_not_found() {
    let app = test_app();
    let missing = uuid::Uuid::new_v4();
    let response = send(
        &app.router,
        form("/join", &format!("username=Bo&session_id={}", missing)),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn join_with_garbage_session_id_is_bad_request() {
    let app = test_app();
    let response = send(&app.router, form("/join", "username=Bo&session_id=nope")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "MALFORMED_INPUT");
}

#[tokio::test]
async fn joined_participant_appears_in_roster_and_is_not_moderator() {
    let app = test_app();
    let (session_id, _) = create(&app.router, "Ana", "1,2,3").await;
    let bo = join(&app.router, &session_id, "Bo").await;

    let view = send(
        &app.router,
        authed(Method::GET, &format!("/session/{}", session_id), &bo),
    )
    .await;
    assert_eq!(view.body["participants"], json!(["Ana", "Bo"]));
    assert_eq!(view.body["is_moderator"], false);
    assert_eq!(view.body["name"], "Bo");
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn missing_token_is_unauthenticated() {
    let app = test_app();
    let (session_id, _) = create(&app.router, "Ana", "1,2").await;

    let request = Request::builder()
        .uri(format!("/session/{}/status", session_id))
        .body(Body::empty())
        .unwrap();
    let response = send(&app.router, request).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn token_from_another_session_is_rejected() {
    let app = test_app();
    let (first, _) = create(&app.router, "Ana", "1,2").await;
    let (_, other_token) = create(&app.router, "Cy", "1,2").await;

    let response = send(
        &app.router,
        authed(Method::GET, &format!("/session/{}/status", first), &other_token),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = send(
        &app.router,
        authed(Method::GET, &format!("/session/{}/status", first), "not-a-token"),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn cookie_authenticates_browser_requests() {
    let app = test_app();
    let created = send(&app.router, form("/create", "username=Ana&cards=1,2")).await;
    let session_id = created.body["session_id"].as_str().unwrap();
    let cookie = created.headers[header::SET_COOKIE].to_str().unwrap();
    let pair = cookie.split(';').next().unwrap();

    let request = Request::builder()
        .uri(format!("/session/{}", session_id))
        .header(header::COOKIE, pair)
        .body(Body::empty())
        .unwrap();
    let response = send(&app.router, request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Ana");
}

// =============================================================================
// Voting round
// =============================================================================

#[tokio::test]
async fn own_vote_is_visible_before_reveal_others_are_blank() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "1,2,3").await;
    let bo = join(&app.router, &session_id, "Bo").await;

    assert_eq!(vote(&app.router, &session_id, &ana, "2").await, StatusCode::NO_CONTENT);
    assert_eq!(vote(&app.router, &session_id, &bo, "3").await, StatusCode::NO_CONTENT);

    let seen_by_bo = status(&app.router, &session_id, &bo).await;
    assert_eq!(
        votes_of(&seen_by_bo),
        vec![
            ("Ana".to_string(), String::new()),
            ("Bo".to_string(), "3".to_string())
        ]
    );
    assert_eq!(seen_by_bo["Average"], "");
    assert_eq!(seen_by_bo["Closest"], "");
}

#[tokio::test]
async fn moderator_reveal_shows_all_votes_and_average() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "1,2,3").await;
    let bo = join(&app.router, &session_id, "Bo").await;
    vote(&app.router, &session_id, &ana, "2").await;
    vote(&app.router, &session_id, &bo, "3").await;

    let response = send(&app.router, reveal(&session_id, &ana, true)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let seen_by_bo = status(&app.router, &session_id, &bo).await;
    assert_eq!(
        votes_of(&seen_by_bo),
        vec![
            ("Ana".to_string(), "2".to_string()),
            ("Bo".to_string(), "3".to_string())
        ]
    );
    assert_eq!(seen_by_bo["Average"], "2.50");
    assert_eq!(seen_by_bo["Closest"], "2");

    let response = send(&app.router, reveal(&session_id, &ana, false)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let hidden = status(&app.router, &session_id, &bo).await;
    assert_eq!(votes_of(&hidden)[0].1, "");
}

#[tokio::test]
async fn non_moderator_reveal_is_forbidden_and_changes_nothing() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "1,2,3").await;
    let bo = join(&app.router, &session_id, "Bo").await;
    vote(&app.router, &session_id, &ana, "1").await;

    let response = send(&app.router, reveal(&session_id, &bo, true)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["code"], "FORBIDDEN");

    let seen_by_bo = status(&app.router, &session_id, &bo).await;
    assert_eq!(votes_of(&seen_by_bo)[0].1, "");
}

#[tokio::test]
async fn reveal_without_flag_is_bad_request() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "1,2").await;

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/session/{}", session_id))
        .header(header::AUTHORIZATION, format!("Bearer {}", ana))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = send(&app.router, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "MALFORMED_INPUT");
}

#[tokio::test]
async fn vote_for_card_outside_deck_is_rejected() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "1,2,3").await;

    let response = send(
        &app.router,
        authed(Method::PUT, &format!("/session/{}/99", session_id), &ana),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_VOTE");
}

#[tokio::test]
async fn non_numeric_deck_has_no_average_after_reveal() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "S,M,L").await;
    vote(&app.router, &session_id, &ana, "M").await;
    send(&app.router, reveal(&session_id, &ana, true)).await;

    let body = status(&app.router, &session_id, &ana).await;
    assert_eq!(votes_of(&body)[0].1, "M");
    assert_eq!(body["Average"], "");
    assert_eq!(body["Closest"], "");
}

#[tokio::test]
async fn reset_clears_votes_but_keeps_reveal() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "1,2,3").await;
    let bo = join(&app.router, &session_id, "Bo").await;
    vote(&app.router, &session_id, &ana, "3").await;
    send(&app.router, reveal(&session_id, &ana, true)).await;

    // Any member may reset; the page uses GET.
    let response = send(
        &app.router,
        authed(Method::GET, &format!("/session/{}/reset", session_id), &bo),
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let body = status(&app.router, &session_id, &bo).await;
    assert!(votes_of(&body).iter().all(|(_, v)| v.is_empty()));
    assert_eq!(body["Average"], "0.00");

    let response = send(
        &app.router,
        authed(Method::POST, &format!("/session/{}/reset", session_id), &ana),
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn card_named_reset_can_still_be_voted() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "reset,skip").await;

    assert_eq!(
        vote(&app.router, &session_id, &ana, "reset").await,
        StatusCode::NO_CONTENT
    );
    let body = status(&app.router, &session_id, &ana).await;
    assert_eq!(votes_of(&body)[0].1, "reset");
}

#[tokio::test]
async fn concurrent_voters_never_lose_a_vote() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "1,2").await;

    let tokens = join_all((0..24).map(|i| {
        let router = app.router.clone();
        let session_id = session_id.clone();
        async move { join(&router, &session_id, &format!("voter{}", i)).await }
    }))
    .await;

    let statuses = join_all(tokens.iter().map(|token| {
        let router = app.router.clone();
        let session_id = session_id.clone();
        let token = token.clone();
        tokio::spawn(async move { vote(&router, &session_id, &token, "2").await })
    }))
    .await;
    assert!(statuses
        .into_iter()
        .all(|s| s.unwrap() == StatusCode::NO_CONTENT));

    send(&app.router, reveal(&session_id, &ana, true)).await;
    let body = status(&app.router, &session_id, &ana).await;
    let votes = votes_of(&body);
    assert_eq!(votes.len(), 25);
    assert_eq!(votes[0], ("Ana".to_string(), String::new()));
    assert_eq!(votes.iter().filter(|(_, v)| v == "2").count(), 24);
    // 24 votes of 2 over a roster of 25.
    assert_eq!(body["Average"], "1.92");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn only_moderator_may_delete() {
    let app = test_app();
    let (session_id, ana) = create(&app.router, "Ana", "1,2").await;
    let bo = join(&app.router, &session_id, "Bo").await;

    let response = send(
        &app.router,
        authed(Method::DELETE, &format!("/session/{}", session_id), &bo),
    )
    .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.store.len(), 1);

    let response = send(
        &app.router,
        authed(Method::DELETE, &format!("/session/{}", session_id), &ana),
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(app.store.is_empty());

    let response = send(
        &app.router,
        authed(Method::GET, &format!("/session/{}/status", session_id), &ana),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Static assets
// =============================================================================

#[tokio::test]
async fn landing_page_and_static_assets_are_served() {
    let app = test_app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = send(&app.router, request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Scrum Poker"));

    let request = Request::builder()
        .uri("/static/js/main.js")
        .body(Body::empty())
        .unwrap();
    let response = send(&app.router, request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "getStatus();");

    let request = Request::builder()
        .uri("/static/missing.css")
        .body(Body::empty())
        .unwrap();
    let response = send(&app.router, request).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
