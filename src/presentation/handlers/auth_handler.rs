// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{body::Bytes, extract::Extension, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::application::dto::{ChangePasswordDto, UserCreateDto, UserDto, UserUpdateDto};
use crate::application::errors::ApplicationError;
use crate::config::settings::{JwtSettings, Settings};
use crate::infrastructure::container::ServiceContainer;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::{AuthenticatedUser, ValidatedJson};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const LOGGED_OUT: &str = "Logged out successfully";

/// 登录请求
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub username: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

/// 刷新令牌请求
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub refresh: String,
}

/// JWT 注销请求，refresh 可省略
#[derive(Debug, Default, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub refresh: Option<String>,
}

/// 修改密码请求
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub old_password: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password1: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password2: String,
}

/// 用户注册
pub async fn register(
    Extension(container): Extension<Arc<ServiceContainer>>,
    ValidatedJson(payload): ValidatedJson<UserCreateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = container.create_user_use_case().execute(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully",
            "user": {
                "id": user.id,
                "username": user.username,
                "email": user.email,
            }
        })),
    ))
}

/// 会话登录
///
/// 成功后写入会话 Cookie
pub async fn session_login(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Extension(settings): Extension<Arc<Settings>>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = container
        .authenticate_user_use_case()
        .execute(&payload.username, &payload.password)
        .await?;

    let (user, session_key) = match result {
        Some(result) => match result.session_key {
            Some(key) => (result.user, key),
            None => return Err(ApplicationError::Internal("Session key missing".into()).into()),
        },
        None => return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS).into()),
    };

    let mut cookie = Cookie::build((settings.session.cookie_name.clone(), session_key.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    // lifetime 0 means the session never expires, leave it a browser-session cookie
    if settings.session.lifetime > 0 {
        let max_age = i64::try_from(settings.session.lifetime).unwrap_or(i64::MAX);
        cookie = cookie.max_age(time::Duration::seconds(max_age));
    }

    Ok((
        jar.add(cookie),
        Json(json!({
            "session": session_key,
            "data": {
                "id": user.id,
                "email": user.email,
                "is_active": user.is_active,
                "is_admin": user.is_admin,
                "is_superuser": user.is_superuser,
            }
        })),
    ))
}

/// 会话注销
///
/// 通过令牌认证时仍会停用请求携带的会话 Cookie（仅限当前用户的会话）
pub async fn session_logout(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Extension(settings): Extension<Arc<Settings>>,
    current: AuthenticatedUser,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let session_key = current.session_key.clone().or_else(|| {
        jar.get(&settings.session.cookie_name)
            .map(|cookie| cookie.value().to_string())
    });
    container
        .logout_use_case()
        .logout_session(current.user.id, session_key.as_deref())
        .await?;

    let jar = jar.remove(Cookie::build(settings.session.cookie_name.clone()).path("/"));
    Ok((jar, Json(json!({ "message": LOGGED_OUT }))))
}

/// JWT 登录
///
/// 配置了 `jwt.auth_cookie` 时同时把访问令牌写入 Cookie
pub async fn jwt_login(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Extension(settings): Extension<Arc<Settings>>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = container
        .authenticate_user_jwt_use_case()
        .execute(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

    let (Some(access), Some(refresh)) = (result.access_token, result.refresh_token) else {
        return Err(ApplicationError::Internal("Token pair missing".into()).into());
    };

    let jar = match settings.jwt.auth_cookie.clone() {
        Some(name) => jar.add(jwt_cookie(&settings.jwt, name, access.clone())),
        None => jar,
    };

    Ok((jar, Json(json!({ "access": access, "refresh": refresh }))))
}

fn jwt_cookie(settings: &JwtSettings, name: String, value: String) -> Cookie<'static> {
    let same_site = match settings.auth_cookie_samesite.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    };
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(settings.auth_cookie_secure)
        .same_site(same_site)
        .build()
}

/// 刷新访问令牌
pub async fn jwt_refresh(
    Extension(container): Extension<Arc<ServiceContainer>>,
    ValidatedJson(payload): ValidatedJson<RefreshRequest>,
) -> Result<impl IntoResponse, AppError> {
    let access = container
        .refresh_token_use_case()
        .execute(&payload.refresh)
        .await?;
    Ok(Json(json!({ "access": access })))
}

/// JWT 注销
///
/// 请求体可为空；提供 refresh 时将其吊销
pub async fn jwt_logout(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Extension(settings): Extension<Arc<Settings>>,
    current: AuthenticatedUser,
    jar: CookieJar,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: LogoutRequest = if body.is_empty() {
        LogoutRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|err| {
            ApplicationError::validation("Validation error")
                .with_extra("fields", json!({ "non_field_errors": [err.to_string()] }))
        })?
    };

    container
        .logout_use_case()
        .logout_jwt(current.user.id, payload.refresh.as_deref())
        .await?;

    let jar = match settings.jwt.auth_cookie.clone() {
        Some(name) => jar.remove(Cookie::build(name).path("/")),
        None => jar,
    };
    info!("JWT logout for user {}", current.user.id);
    Ok((jar, Json(json!({ "message": LOGGED_OUT }))))
}

fn profile(user: &UserDto) -> serde_json::Value {
    json!({
        "id": user.id,
        "email": user.email,
        "username": user.username,
        "first_name": user.first_name,
        "last_name": user.last_name,
        "is_active": user.is_active,
        "is_admin": user.is_admin,
        "is_superuser": user.is_superuser,
    })
}

/// 当前用户资料
pub async fn me(
    Extension(container): Extension<Arc<ServiceContainer>>,
    current: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let user = container.get_user_use_case().execute(current.user.id).await?;
    Ok(Json(profile(&user)))
}

/// 部分更新当前用户资料
pub async fn update_me(
    Extension(container): Extension<Arc<ServiceContainer>>,
    current: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<UserUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = container
        .update_user_use_case()
        .execute(current.user.id, payload)
        .await?;
    Ok(Json(profile(&user)))
}

/// 修改密码
pub async fn change_password(
    Extension(container): Extension<Arc<ServiceContainer>>,
    current: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    container
        .change_password_use_case()
        .execute(
            current.user.id,
            ChangePasswordDto {
                old_password: payload.old_password,
                new_password: payload.password1,
                confirm_password: payload.password2,
            },
        )
        .await?;
    Ok(Json(json!({ "message": "Password changed successfully" })))
}
