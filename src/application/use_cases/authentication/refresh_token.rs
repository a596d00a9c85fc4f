// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::debug;

use crate::application::errors::ApplicationError;
use crate::domain::authentication::ports::{TokenKind, TokenService};
use crate::domain::authentication::repositories::TokenRepository;
use crate::domain::authentication::services::AuthenticationDomainService;
use crate::domain::shared::repositories::Repository;
use crate::domain::user::repositories::UserRepository;

const TOKEN_INVALID: &str = "Token is invalid or expired";

/// 刷新访问令牌用例
pub struct RefreshTokenUseCase {
    user_repository: Arc<dyn UserRepository>,
    token_repository: Arc<dyn TokenRepository>,
    auth_domain_service: Arc<AuthenticationDomainService>,
    token_service: Arc<dyn TokenService>,
}

impl RefreshTokenUseCase {
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

    /// 用刷新令牌换取新的访问令牌
    pub async fn execute(&self, refresh: &str) -> Result<String, ApplicationError> {
        let claims = self
            .token_service
            .decode(refresh, TokenKind::Refresh)
            .map_err(|e| {
                debug!("Refresh token rejected: {}", e);
                ApplicationError::unauthorized(TOKEN_INVALID)
            })?;

        let stored = self.token_repository.get_by_token(&claims.jti).await?;
        if !stored.is_some_and(|token| token.is_valid() && token.user_id == claims.user_id) {
            return Err(ApplicationError::unauthorized(TOKEN_INVALID));
        }

        let user = self.user_repository.get_by_id(claims.user_id).await?;
        match user {
            Some(user) if self.auth_domain_service.can_user_authenticate(&user) => {
                Ok(self.token_service.issue_access(user.id)?)
            }
            _ => Err(ApplicationError::unauthorized(TOKEN_INVALID)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::tests_support::Fixture;

    #[tokio::test]
    async fn test_refresh_issues_new_access_token() {
        let fixture = Fixture::new();
        let user = fixture.seed_user("ada", "Sup3r-secret").await;
        let refresh = fixture.jwt_login("ada", "Sup3r-secret").await.1;

        let access = fixture.refresh_token().execute(&refresh).await.unwrap();
        let claims = fixture.token_service.decode(&access, TokenKind::Access).unwrap();
        assert_eq!(claims.user_id, user.id);
    }

    #[tokio::test]
    async fn test_revoked_refresh_token_is_rejected() {
        let fixture = Fixture::new();
        fixture.seed_user("ada", "Sup3r-secret").await;
        let refresh = fixture.jwt_login("ada", "Sup3r-secret").await.1;

        let jti = fixture.token_service.decode(&refresh, TokenKind::Refresh).unwrap().jti;
        fixture.tokens.revoke(&jti).await.unwrap();

        let err = fixture.refresh_token().execute(&refresh).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized { .. }));
        assert_eq!(err.to_string(), TOKEN_INVALID);
    }

    #[tokio::test]
    async fn test_access_token_cannot_be_used_to_refresh() {
        let fixture = Fixture::new();
        fixture.seed_user("ada", "Sup3r-secret").await;
        let access = fixture.jwt_login("ada", "Sup3r-secret").await.0;

        let err = fixture.refresh_token().execute(&access).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized { .. }));
    }
}
