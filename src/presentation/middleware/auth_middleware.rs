// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;
use tracing::debug;

use crate::application::errors::ApplicationError;
use crate::application::use_cases::authentication::resolve_current_user::CREDENTIALS_NOT_PROVIDED;
use crate::config::settings::Settings;
use crate::infrastructure::container::ServiceContainer;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::AuthenticatedUser;

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 服务容器
    pub container: Arc<ServiceContainer>,
    /// 应用配置，用于读取 Cookie 名称
    pub settings: Arc<Settings>,
}

/// 请求携带的凭据
enum Credential {
    Bearer(String),
    Session(String),
}

/// 按优先级提取凭据：Authorization 头、JWT Cookie、会话 Cookie
fn credential(req: &Request, settings: &Settings) -> Option<Credential> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());
    if let Some(token) = bearer {
        return Some(Credential::Bearer(token.to_string()));
    }

    let jar = CookieJar::from_headers(req.headers());
    if let Some(name) = settings.jwt.auth_cookie.as_deref() {
        if let Some(cookie) = jar.get(name) {
            return Some(Credential::Bearer(cookie.value().to_string()));
        }
    }

    jar.get(&settings.session.cookie_name)
        .map(|cookie| Credential::Session(cookie.value().to_string()))
}

/// 认证中间件
///
/// 解析当前用户并写入请求扩展，失败时返回 401
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    debug!("AuthMiddleware processing path: {}", req.uri().path());

    let resolver = state.container.resolve_current_user_use_case();
    let authenticated = match credential(&req, &state.settings) {
        Some(Credential::Bearer(token)) => AuthenticatedUser {
            user: resolver.from_access_token(&token).await?,
            session_key: None,
        },
        Some(Credential::Session(key)) => AuthenticatedUser {
            user: resolver.from_session(&key).await?,
            session_key: Some(key),
        },
        None => return Err(ApplicationError::unauthorized(CREDENTIALS_NOT_PROVIDED).into()),
    };

    debug!("Authenticated user {}", authenticated.user.id);
    req.extensions_mut().insert(authenticated);
    Ok(next.run(req).await)
}
