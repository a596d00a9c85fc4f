// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app};
use axum::http::{header, StatusCode};
use serde_json::Value;

#[tokio::test]
async fn list_users_paginates_with_links() {
    let app = create_test_app().await;
    for name in ["ada", "bob", "cyd", "dan", "eve"] {
        app.register(name).await;
    }
    let (access, _) = app.jwt_login("ada").await;

    let response = app
        .server
        .get("/api/users")
        .add_query_param("limit", 2)
        .add_query_param("offset", 2)
        .add_header(header::AUTHORIZATION, bearer(&access))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["count"], 5);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["offset"], 2);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["results"][0]["username"], "cyd");

    let next = body["next"].as_str().unwrap();
    assert!(next.ends_with("/api/users?limit=2&offset=4"));
    let previous = body["previous"].as_str().unwrap();
    assert!(previous.ends_with("/api/users?limit=2"));
}

#[tokio::test]
async fn list_users_falls_back_to_default_limit() {
    let app = create_test_app().await;
    app.register("ada").await;
    let (access, _) = app.jwt_login("ada").await;

    let response = app
        .server
        .get("/api/users")
        .add_query_param("limit", "bogus")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["limit"], app.settings.pagination.default_limit);
    assert_eq!(body["offset"], 0);
    assert!(body["next"].is_null());
    assert!(body["previous"].is_null());
}

#[tokio::test]
async fn regular_user_cannot_deactivate_others() {
    let app = create_test_app().await;
    let target = app.register("bob").await;
    app.register("ada").await;
    let (access, _) = app.jwt_login("ada").await;
    let target_id = target["user"]["id"].as_str().unwrap();

    let response = app
        .server
        .post(&format!("/api/users/{}/deactivate", target_id))
        .add_header(header::AUTHORIZATION, bearer(&access))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>()["message"],
        "You do not have permission to perform this action."
    );
}

#[tokio::test]
async fn admin_deactivates_and_reactivates_user() {
    let app = create_test_app().await;
    app.register_admin("root").await;
    let target = app.register("bob").await;
    let target_id = target["user"]["id"].as_str().unwrap().to_string();
    let (admin_access, _) = app.jwt_login("root").await;
    let (bob_access, _) = app.jwt_login("bob").await;

    let response = app
        .server
        .post(&format!("/api/users/{}/deactivate", target_id))
        .add_header(header::AUTHORIZATION, bearer(&admin_access))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["is_active"], false);

    let rejected = app
        .server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, bearer(&bob_access))
        .await;
    rejected.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        rejected.json::<Value>()["message"],
        "User is inactive or deleted."
    );

    let response = app
        .server
        .post(&format!("/api/users/{}/activate", target_id))
        .add_header(header::AUTHORIZATION, bearer(&admin_access))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["is_active"], true);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = create_test_app().await;
    app.register_admin("root").await;
    let (access, _) = app.jwt_login("root").await;

    let response = app
        .server
        .post(&format!("/api/users/{}/activate", uuid::Uuid::new_v4()))
        .add_header(header::AUTHORIZATION, bearer(&access))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_user_id_is_rejected() {
    let app = create_test_app().await;
    app.register_admin("root").await;
    let (access, _) = app.jwt_login("root").await;

    let response = app
        .server
        .post("/api/users/not-a-uuid/activate")
        .add_header(header::AUTHORIZATION, bearer(&access))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
