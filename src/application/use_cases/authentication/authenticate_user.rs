// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

use crate::application::dto::{AuthenticationResultDto, UserDto};
use crate::application::errors::ApplicationError;
use crate::domain::authentication::entities::Session;
use crate::domain::authentication::repositories::SessionRepository;
use crate::domain::authentication::services::AuthenticationDomainService;
use crate::domain::shared::repositories::Repository;
use crate::domain::user::repositories::UserRepository;

/// 会话登录用例
pub struct AuthenticateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    session_repository: Arc<dyn SessionRepository>,
    auth_domain_service: Arc<AuthenticationDomainService>,
    session_lifetime: Option<Duration>,
}

impl AuthenticateUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        session_repository: Arc<dyn SessionRepository>,
        auth_domain_service: Arc<AuthenticationDomainService>,
        session_lifetime: Option<Duration>,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            auth_domain_service,
            session_lifetime,
        }
    }

    /// 校验凭据并创建会话
    ///
    /// 凭据无效或用户不可登录时返回 `Ok(None)`
    pub async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthenticationResultDto>, ApplicationError> {
        let Some(mut user) = self
            .auth_domain_service
            .authenticate_user(username, password)
            .await?
        else {
            info!("Session login failed for {}", username);
            return Ok(None);
        };

        let expires_at = self.session_lifetime.map(|lifetime| Utc::now() + lifetime);
        let session = Session::new(user.id, Session::generate_key(), expires_at);
        let session = self.session_repository.save(&session).await?;

        user.record_login();
        let user = self.user_repository.save(&user).await?;
        info!("User {} logged in with a session", user.id);

        Ok(Some(AuthenticationResultDto::with_session(
            UserDto::from(&user),
            session.session_key,
        )))
    }
}
