// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn version_reports_crate_version() {
    let app = create_test_app().await;

    let response = app.server.get("/version").await;
    response.assert_text(env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn protected_route_requires_credentials() {
    let app = create_test_app().await;

    let response = app.server.get("/api/auth/me").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}
