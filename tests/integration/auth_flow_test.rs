// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, cookie, create_test_app, PASSWORD};
use axum::http::{header, StatusCode};
use serde_json::{json, Value};
use warden::domain::shared::events::DomainEventKind;

#[tokio::test]
async fn register_returns_created_user() {
    let app = create_test_app().await;

    let body = app.register("ada").await;

    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["username"], "ada");
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"].get("password").is_none());

    let kinds: Vec<_> = app
        .container
        .event_publisher()
        .events()
        .iter()
        .map(|event| event.kind())
        .collect();
    assert_eq!(kinds, vec![DomainEventKind::UserCreated]);
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let app = create_test_app().await;
    app.register("ada").await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "ada",
            "email": "other@example.com",
            "password": PASSWORD,
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Username 'ada' is already taken");
    assert_eq!(body["extra"]["field"], "username");
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "ada",
            "email": "not-an-email",
            "password": PASSWORD,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Validation error");
    assert!(body["extra"]["fields"]["email"].is_array());
}

#[tokio::test]
async fn session_login_sets_cookie_and_authenticates() {
    let app = create_test_app().await;
    app.register("ada").await;

    let response = app
        .server
        .post("/api/auth/session/login")
        .json(&json!({ "username": "ada", "password": PASSWORD }))
        .await;
    response.assert_status_ok();

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(set_cookie.starts_with("sessionid="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=1209600"));

    let body = response.json::<Value>();
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert_eq!(body["data"]["is_active"], true);
    let session = body["session"].as_str().unwrap().to_string();

    let me = app
        .server
        .get("/api/auth/me")
        .add_header(header::COOKIE, cookie("sessionid", &session))
        .await;
    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["username"], "ada");

    let logout = app
        .server
        .post("/api/auth/session/logout")
        .add_header(header::COOKIE, cookie("sessionid", &session))
        .await;
    logout.assert_status_ok();
    assert_eq!(logout.json::<Value>()["message"], "Logged out successfully");

    let after = app
        .server
        .get("/api/auth/me")
        .add_header(header::COOKIE, cookie("sessionid", &session))
        .await;
    after.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_login_with_bad_password_is_unauthorized() {
    let app = create_test_app().await;
    app.register("ada").await;

    let response = app
        .server
        .post("/api/auth/session/login")
        .json(&json!({ "username": "ada", "password": "wrong" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "message": "Invalid credentials", "extra": {} }));
}

#[tokio::test]
async fn jwt_login_refresh_and_logout() {
    let app = create_test_app().await;
    app.register("ada").await;

    let login = app
        .server
        .post("/api/auth/jwt/login")
        .json(&json!({ "username": "ada", "password": PASSWORD }))
        .await;
    login.assert_status_ok();
    let set_cookie = login
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(set_cookie.starts_with("jwt-auth="));

    let body = login.json::<Value>();
    let access = body["access"].as_str().unwrap().to_string();
    let refresh = body["refresh"].as_str().unwrap().to_string();

    let me = app
        .server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .await;
    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["email"], "ada@example.com");

    let refreshed = app
        .server
        .post("/api/auth/jwt/refresh")
        .json(&json!({ "refresh": refresh }))
        .await;
    refreshed.assert_status_ok();
    assert!(refreshed.json::<Value>()["access"].is_string());

    let logout = app
        .server
        .post("/api/auth/jwt/logout")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .json(&json!({ "refresh": refresh }))
        .await;
    logout.assert_status_ok();

    let revoked = app
        .server
        .post("/api/auth/jwt/refresh")
        .json(&json!({ "refresh": refresh }))
        .await;
    revoked.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn jwt_logout_accepts_empty_body() {
    let app = create_test_app().await;
    app.register("ada").await;
    let (access, _) = app.jwt_login("ada").await;

    let response = app
        .server
        .post("/api/auth/jwt/logout")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Logged out successfully");
}

#[tokio::test]
async fn jwt_cookie_authenticates_requests() {
    let app = create_test_app().await;
    app.register("ada").await;
    let (access, _) = app.jwt_login("ada").await;

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(header::COOKIE, cookie("jwt-auth", &access))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn refresh_token_cannot_be_used_as_access() {
    let app = create_test_app().await;
    app.register("ada").await;
    let (_, refresh) = app.jwt_login("ada").await;

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, bearer(&refresh))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["message"],
        "Given token not valid for any token type"
    );
}

#[tokio::test]
async fn update_profile_changes_only_given_fields() {
    let app = create_test_app().await;
    app.register("ada").await;
    let (access, _) = app.jwt_login("ada").await;

    let response = app
        .server
        .post("/api/auth/me")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .json(&json!({ "first_name": "Ada" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn change_password_flow() {
    let app = create_test_app().await;
    app.register("ada").await;
    let (access, _) = app.jwt_login("ada").await;

    let mismatch = app
        .server
        .post("/api/auth/change-password")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .json(&json!({
            "old_password": PASSWORD,
            "password1": "Brand-new-pass-9",
            "password2": "Different-pass-9",
        }))
        .await;
    mismatch.assert_status(StatusCode::BAD_REQUEST);
    assert!(mismatch.json::<Value>()["extra"]["fields"]["password2"].is_array());

    let wrong_old = app
        .server
        .post("/api/auth/change-password")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .json(&json!({
            "old_password": "nope",
            "password1": "Brand-new-pass-9",
            "password2": "Brand-new-pass-9",
        }))
        .await;
    wrong_old.assert_status(StatusCode::BAD_REQUEST);

    let changed = app
        .server
        .post("/api/auth/change-password")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .json(&json!({
            "old_password": PASSWORD,
            "password1": "Brand-new-pass-9",
            "password2": "Brand-new-pass-9",
        }))
        .await;
    changed.assert_status_ok();
    assert_eq!(changed.json::<Value>()["message"], "Password changed successfully");

    let login = app
        .server
        .post("/api/auth/jwt/login")
        .json(&json!({ "username": "ada", "password": "Brand-new-pass-9" }))
        .await;
    login.assert_status_ok();
}

#[tokio::test]
async fn change_password_enforces_policy() {
    let app = create_test_app().await;
    app.register("ada").await;
    let (access, _) = app.jwt_login("ada").await;

    let response = app
        .server
        .post("/api/auth/change-password")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .json(&json!({
            "old_password": PASSWORD,
            "password1": "12345678",
            "password2": "12345678",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["extra"]["password"].is_array());
}

#[tokio::test]
async fn session_logout_with_bearer_still_ends_cookie_session() {
    let app = create_test_app().await;
    app.register("ada").await;

    let session = app
        .server
        .post("/api/auth/session/login")
        .json(&json!({ "username": "ada", "password": PASSWORD }))
        .await
        .json::<Value>()["session"]
        .as_str()
        .unwrap()
        .to_string();
    let (access, _) = app.jwt_login("ada").await;

    app.server
        .post("/api/auth/session/logout")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .add_header(header::COOKIE, cookie("sessionid", &session))
        .await
        .assert_status_ok();

    app.server
        .get("/api/auth/me")
        .add_header(header::COOKIE, cookie("sessionid", &session))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_logout_with_bearer_ignores_foreign_cookie() {
    let app = create_test_app().await;
    app.register("ada").await;
    app.register("bob").await;

    let ada_session = app
        .server
        .post("/api/auth/session/login")
        .json(&json!({ "username": "ada", "password": PASSWORD }))
        .await
        .json::<Value>()["session"]
        .as_str()
        .unwrap()
        .to_string();
    let (bob_access, _) = app.jwt_login("bob").await;

    app.server
        .post("/api/auth/session/logout")
        .add_header(header::AUTHORIZATION, bearer(&bob_access))
        .add_header(header::COOKIE, cookie("sessionid", &ada_session))
        .await
        .assert_status_ok();

    app.server
        .get("/api/auth/me")
        .add_header(header::COOKIE, cookie("sessionid", &ada_session))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn expiration_worker_purges_revoked_refresh_tokens() {
    let app = create_test_app().await;
    app.register("ada").await;
    let (access, refresh) = app.jwt_login("ada").await;
    app.jwt_login("ada").await;

    app.server
        .post("/api/auth/jwt/logout")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .json(&json!({ "refresh": refresh }))
        .await
        .assert_status_ok();

    let worker = app
        .container
        .expiration_worker(std::time::Duration::from_secs(60));
    assert_eq!(worker.cleanup().await.unwrap(), (0, 1));
    assert_eq!(worker.cleanup().await.unwrap(), (0, 0));
}
