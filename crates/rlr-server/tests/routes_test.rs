//! HTTP-level tests driving the router with `tower::ServiceExt::oneshot`.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rlr_core::models::service_account::API_USER_EMAIL;
use rlr_server::routes;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn admin(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", common::ADMIN_KEY))
        .body(Body::empty())
        .unwrap()
}

fn graphql(query: &str, authorization: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

fn basic(username: &str, password: &str) -> Option<String> {
    Some(format!(
        "Basic {}",
        BASE64.encode(format!("{username}:{password}"))
    ))
}

fn claim(token: &str, password: &str) -> Request<Body> {
    graphql(
        &format!(
            r#"mutation {{ requestLoggerSetPassword(token: "{token}", password: "{password}") }}"#
        ),
        None,
    )
}

#[tokio::test]
async fn health_is_public() {
    let app = routes::router(common::app_state(false).await);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn admin_endpoints_require_admin_key() {
    let app = routes::router(common::app_state(true).await);

    let request = Request::builder()
        .uri("/admin/setup-status")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["category"], "unauthenticated");

    let request = Request::builder()
        .method("POST")
        .uri("/admin/password-reset")
        .header(header::AUTHORIZATION, "Bearer not-the-key")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn setup_status_follows_the_workflow() {
    let state = common::app_state(true).await;
    let token = common::pending_token(&state).await;
    let app = routes::router(state);

    let (status, body) = send(&app, admin("GET", "/admin/setup-status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "migrationExecuted": true,
            "moduleActivated": true,
            "tokenPending": true,
            "setupToken": token,
            "setupComplete": false,
        })
    );

    let (status, body) = send(&app, claim(&token, "longenough1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["requestLoggerSetPassword"], true);

    let (_, body) = send(&app, admin("GET", "/admin/setup-status")).await;
    assert_eq!(
        body,
        json!({
            "migrationExecuted": true,
            "moduleActivated": true,
            "tokenPending": false,
            "setupComplete": true,
        })
    );
}

#[tokio::test]
async fn setup_status_before_install() {
    let app = routes::router(common::app_state(false).await);

    let (_, body) = send(&app, admin("GET", "/admin/setup-status")).await;
    assert_eq!(body["migrationExecuted"], false);
    assert_eq!(body["moduleActivated"], false);
    assert_eq!(body["tokenPending"], false);
    assert_eq!(body["setupComplete"], false);
}

#[tokio::test]
async fn claimed_password_authenticates_graphql_calls() {
    let state = common::app_state(true).await;
    let token = common::pending_token(&state).await;
    let app = routes::router(state);

    // Placeholder credential: no login possible yet.
    let (_, body) = send(
        &app,
        graphql("{ requestLoggerIsActive }", basic(API_USER_EMAIL, "longenough1")),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["category"], "unauthenticated");

    send(&app, claim(&token, "longenough1")).await;

    let (_, body) = send(
        &app,
        graphql("{ requestLoggerIsActive }", basic(API_USER_EMAIL, "longenough1")),
    )
    .await;
    assert_eq!(body["data"]["requestLoggerIsActive"], false);

    let (_, body) = send(
        &app,
        graphql("{ requestLoggerIsActive }", basic(API_USER_EMAIL, "wrongpassword")),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["category"], "unauthenticated");
}

#[tokio::test]
async fn admin_reset_revokes_claimed_password() {
    let state = common::app_state(true).await;
    let token = common::pending_token(&state).await;
    let app = routes::router(state);

    send(&app, claim(&token, "longenough1")).await;

    let (status, body) = send(&app, admin("POST", "/admin/password-reset")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resetSuccess"], true);
    let new_token = body["newToken"].as_str().unwrap().to_string();
    assert_ne!(new_token, token);

    // The old password stops working.
    let (_, body) = send(
        &app,
        graphql("{ requestLoggerIsActive }", basic(API_USER_EMAIL, "longenough1")),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["category"], "unauthenticated");

    let (_, body) = send(&app, claim(&new_token, "longenough2")).await;
    assert_eq!(body["data"]["requestLoggerSetPassword"], true);
}

#[tokio::test]
async fn admin_reset_without_api_user() {
    let app = routes::router(common::app_state(false).await);

    let (status, body) = send(&app, admin("POST", "/admin/password-reset")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "resetError": "USER_NOT_FOUND" }));
}

#[tokio::test]
async fn admin_key_authorizes_graphql() {
    let app = routes::router(common::app_state(true).await);

    let (_, body) = send(
        &app,
        graphql(
            "mutation { requestLoggerActivate }",
            Some(format!("Bearer {}", common::ADMIN_KEY)),
        ),
    )
    .await;
    assert_eq!(body["data"]["requestLoggerActivate"], true);
}
