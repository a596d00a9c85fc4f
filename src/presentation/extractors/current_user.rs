// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::application::dto::UserDto;
use crate::application::errors::ApplicationError;
use crate::application::use_cases::authentication::resolve_current_user::CREDENTIALS_NOT_PROVIDED;
use crate::presentation::errors::AppError;

/// 当前登录用户
///
/// 由认证中间件写入请求扩展，通过会话登录时带有会话键
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: UserDto,
    pub session_key: Option<String>,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized(CREDENTIALS_NOT_PROVIDED).into())
    }
}
