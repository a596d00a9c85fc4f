// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tracing::info;

use crate::application::dto::{AuthenticationResultDto, UserDto};
use crate::application::errors::ApplicationError;
use crate::domain::authentication::entities::AuthenticationToken;
use crate::domain::authentication::ports::TokenService;
use crate::domain::authentication::repositories::TokenRepository;
use crate::domain::authentication::services::AuthenticationDomainService;
use crate::domain::shared::repositories::Repository;
use crate::domain::user::repositories::UserRepository;

/// JWT 登录用例
pub struct AuthenticateUserJwtUseCase {
    user_repository: Arc<dyn UserRepository>,
    token_repository: Arc<dyn TokenRepository>,
    auth_domain_service: Arc<AuthenticationDomainService>,
    token_service: Arc<dyn TokenService>,
}

impl AuthenticateUserJwtUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        token_repository: Arc<dyn TokenRepository>,
        auth_domain_service: Arc<AuthenticationDomainService>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            auth_domain_service,
            token_service,
        }
    }

    /// 校验凭据并签发访问令牌和刷新令牌
    ///
    /// 刷新令牌会被持久化，注销时据此吊销
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
            info!("JWT login failed for {}", username);
            return Ok(None);
        };

        let pair = self.token_service.issue_pair(&user)?;
        let expires_at = Utc.timestamp_opt(pair.refresh_claims.exp, 0).single();
        let token = AuthenticationToken::new(user.id, pair.refresh_claims.jti.clone(), expires_at);
        self.token_repository.save(&token).await?;

        user.record_login();
        let user = self.user_repository.save(&user).await?;
        info!("User {} logged in with JWT", user.id);

        Ok(Some(AuthenticationResultDto::with_tokens(
            UserDto::from(&user),
            pair.access,
            pair.refresh,
        )))
    }
}
