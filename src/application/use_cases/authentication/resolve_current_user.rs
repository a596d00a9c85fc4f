// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::debug;

use crate::application::dto::UserDto;
use crate::application::errors::ApplicationError;
use crate::domain::authentication::ports::{TokenKind, TokenService};
use crate::domain::authentication::repositories::SessionRepository;
use crate::domain::authentication::services::AuthenticationDomainService;
use crate::domain::shared::repositories::Repository;
use crate::domain::user::entities::User;
use crate::domain::user::repositories::UserRepository;

pub const CREDENTIALS_NOT_PROVIDED: &str = "Authentication credentials were not provided.";
pub const TOKEN_NOT_VALID: &str = "Given token not valid for any token type";
pub const USER_INACTIVE: &str = "User is inactive or deleted.";

/// 根据请求携带的凭据解析当前用户
pub struct ResolveCurrentUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    session_repository: Arc<dyn SessionRepository>,
    auth_domain_service: Arc<AuthenticationDomainService>,
    token_service: Arc<dyn TokenService>,
}

impl ResolveCurrentUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        session_repository: Arc<dyn SessionRepository>,
        auth_domain_service: Arc<AuthenticationDomainService>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            auth_domain_service,
            token_service,
        }
    }

    /// 通过访问令牌解析用户
    pub async fn from_access_token(&self, token: &str) -> Result<UserDto, ApplicationError> {
        let claims = self
            .token_service
            .decode(token, TokenKind::Access)
            .map_err(|e| {
                debug!("Access token rejected: {}", e);
                ApplicationError::unauthorized(TOKEN_NOT_VALID)
            })?;

        let user = self.user_repository.get_by_id(claims.user_id).await?;
        self.ensure_active(user)
    }

    /// 通过会话键解析用户，无效会话视为未提供凭据
    pub async fn from_session(&self, session_key: &str) -> Result<UserDto, ApplicationError> {
        let session = self
            .session_repository
            .get_by_key(session_key)
            .await?
            .filter(|session| session.is_valid())
            .ok_or_else(|| ApplicationError::unauthorized(CREDENTIALS_NOT_PROVIDED))?;

        let user = self.user_repository.get_by_id(session.user_id).await?;
        self.ensure_active(user)
    }

    fn ensure_active(&self, user: Option<User>) -> Result<UserDto, ApplicationError> {
        match user {
            Some(user) if self.auth_domain_service.can_user_authenticate(&user) => {
                Ok(UserDto::from(&user))
            }
            _ => Err(ApplicationError::unauthorized(USER_INACTIVE)),
        }
    }
}
