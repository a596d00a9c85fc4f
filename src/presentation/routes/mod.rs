// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::infrastructure::container::ServiceContainer;
use crate::presentation::handlers::{auth_handler, user_handler};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    extract::Extension,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 创建应用路由
///
/// # 参数
///
/// * `container` - 服务容器
/// * `settings` - 应用配置
///
/// # 返回值
///
/// 返回配置好的路由
pub fn app(container: Arc<ServiceContainer>, settings: Arc<Settings>) -> Router {
    let auth_state = AuthState {
        container: container.clone(),
        settings: settings.clone(),
    };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/api/auth/register", post(auth_handler::register))
        .route("/api/auth/session/login", post(auth_handler::session_login))
        .route("/api/auth/jwt/login", post(auth_handler::jwt_login))
        .route("/api/auth/jwt/refresh", post(auth_handler::jwt_refresh));

    let protected_routes = Router::new()
        .route(
            "/api/auth/session/logout",
            get(auth_handler::session_logout).post(auth_handler::session_logout),
        )
        .route("/api/auth/jwt/logout", post(auth_handler::jwt_logout))
        .route(
            "/api/auth/me",
            get(auth_handler::me).post(auth_handler::update_me),
        )
        .route("/api/auth/change-password", post(auth_handler::change_password))
        .route("/api/users", get(user_handler::list_users))
        .route("/api/users/{id}/activate", post(user_handler::activate_user))
        .route(
            "/api/users/{id}/deactivate",
            post(user_handler::deactivate_user),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(container))
        .layer(Extension(settings))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
