//! Black-box exercises of the HTTP surface against in-memory backends.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use diskus_api::app::services::build_in_memory_services;
use diskus_api::app::{build_app, services::AppServices};
use diskus_auth::{AuthenticationTokenManager, JwtTokenManager};

fn app() -> Router {
    let token_manager: Arc<dyn AuthenticationTokenManager> = Arc::new(JwtTokenManager::new(
        b"access_test_key",
        b"refresh_test_key",
        Duration::from_secs(3000),
    ));
    let services: Arc<AppServices> = Arc::new(build_in_memory_services(token_manager.clone()));
    build_app(services, token_manager)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(app: &Router, username: &str) {
    let (status, _) = send(
        app,
        "POST",
        "/users",
        None,
        Some(json!({
            "username": username,
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn login(app: &Router, username: &str) -> (String, String) {
    let (status, body) = send(
        app,
        "POST",
        "/authentications",
        None,
        Some(json!({ "username": username, "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    (
        body["data"]["accessToken"].as_str().unwrap().to_string(),
        body["data"]["refreshToken"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn full_forum_lifecycle() {
    let app = app();

    register(&app, "dicoding").await;
    register(&app, "johndoe").await;

    let (author_access, _) = login(&app, "dicoding").await;
    let (commenter_access, _) = login(&app, "johndoe").await;

    // Author opens a thread.
    let (status, body) = send(
        &app,
        "POST",
        "/threads",
        Some(&author_access),
        Some(json!({ "title": "sebuah thread", "body": "sebuah body thread" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    let thread_id = body["data"]["addedThread"]["id"].as_str().unwrap().to_string();

    // Someone else comments twice.
    let comments_uri = format!("/threads/{thread_id}/comments");
    let (status, body) = send(
        &app,
        "POST",
        &comments_uri,
        Some(&commenter_access),
        Some(json!({ "content": "komentar pertama" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let first_comment = body["data"]["addedComment"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        &comments_uri,
        Some(&commenter_access),
        Some(json!({ "content": "komentar kedua" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let second_comment = body["data"]["addedComment"]["id"].as_str().unwrap().to_string();

    // The author cannot delete the commenter's comment.
    let delete_uri = format!("/threads/{thread_id}/comments/{second_comment}");
    let (status, body) = send(&app, "DELETE", &delete_uri, Some(&author_access), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], "fail");

    // The commenter can.
    let (status, body) = send(&app, "DELETE", &delete_uri, Some(&commenter_access), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    // Anyone can read the thread; the deleted comment is redacted in place.
    let (status, body) = send(&app, "GET", &format!("/threads/{thread_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    let thread = &body["data"]["thread"];
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["username"], "dicoding");
    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], first_comment.as_str());
    assert_eq!(comments[0]["username"], "johndoe");
    assert_eq!(comments[0]["content"], "komentar pertama");
    assert_eq!(comments[1]["id"], second_comment.as_str());
    assert_eq!(comments[1]["content"], "**komentar telah dihapus**");
}

#[tokio::test]
async fn session_refresh_and_logout() {
    let app = app();
    register(&app, "dicoding").await;
    let (_, refresh_token) = login(&app, "dicoding").await;

    // Refresh mints a usable access token.
    let (status, body) = send(
        &app,
        "PUT",
        "/authentications",
        None,
        Some(json!({ "refreshToken": refresh_token })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let refreshed_access = body["data"]["accessToken"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/threads",
        Some(&refreshed_access),
        Some(json!({ "title": "sebuah thread", "body": "sebuah body thread" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Logout revokes; refresh is refused afterwards, logout stays idempotent.
    let logout_body = json!({ "refreshToken": refresh_token });
    let (status, _) = send(&app, "DELETE", "/authentications", None, Some(logout_body.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "PUT",
        "/authentications",
        None,
        Some(json!({ "refreshToken": refresh_token })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "refresh token tidak ditemukan di database");

    let (status, _) = send(&app, "DELETE", "/authentications", None, Some(logout_body)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_refuse_anonymous_and_tampered_tokens() {
    let app = app();
    register(&app, "dicoding").await;
    let (access_token, _) = login(&app, "dicoding").await;

    let thread = json!({ "title": "sebuah thread", "body": "sebuah body thread" });

    let (status, body) = send(&app, "POST", "/threads", None, Some(thread.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "fail");

    let mut tampered = access_token.into_bytes();
    let last = tampered.last_mut().unwrap();
    *last = if *last == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();

    let (status, body) = send(&app, "POST", "/threads", Some(&tampered), Some(thread)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "access token tidak valid");
}

#[tokio::test]
async fn shape_violations_surface_translated_messages() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({ "username": "dicoding", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
    );

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({
            "username": "dicoding!",
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "tidak dapat membuat user baru karena username mengandung karakter terlarang"
    );
}

#[tokio::test]
async fn missing_resources_are_not_found() {
    let app = app();
    register(&app, "dicoding").await;
    let (access_token, _) = login(&app, "dicoding").await;

    let (status, body) = send(&app, "GET", "/threads/thread-404", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "thread tidak ditemukan");

    let (status, body) = send(
        &app,
        "POST",
        "/threads/thread-404/comments",
        Some(&access_token),
        Some(json!({ "content": "sebuah comment" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "thread tidak ditemukan");
}

#[tokio::test]
async fn health_needs_no_credentials() {
    let app = app();
    let (status, _) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
}
