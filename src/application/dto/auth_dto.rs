// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use super::user_dto::UserDto;

/// 认证结果
///
/// 会话登录只带 `session_key`，JWT 登录只带令牌对
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationResultDto {
    pub user: UserDto,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub session_key: Option<String>,
}

impl AuthenticationResultDto {
    pub fn with_session(user: UserDto, session_key: String) -> Self {
        Self {
            user,
            access_token: None,
            refresh_token: None,
            session_key: Some(session_key),
        }
    }

    pub fn with_tokens(user: UserDto, access_token: String, refresh_token: String) -> Self {
        Self {
            user,
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
            session_key: None,
        }
    }
}

/// 修改密码请求
#[derive(Debug, Clone)]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
