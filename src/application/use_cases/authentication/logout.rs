// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::errors::ApplicationError;
use crate::domain::authentication::ports::{TokenKind, TokenService};
use crate::domain::authentication::repositories::{SessionRepository, TokenRepository};

/// 注销用例
///
/// 会话注销停用会话；JWT 注销在提供刷新令牌时将其吊销
pub struct LogoutUseCase {
    session_repository: Arc<dyn SessionRepository>,
    token_repository: Arc<dyn TokenRepository>,
    token_service: Arc<dyn TokenService>,
}

impl LogoutUseCase {
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        token_repository: Arc<dyn TokenRepository>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            session_repository,
            token_repository,
            token_service,
        }
    }

    /// 停用当前用户的会话
    ///
    /// 会话不存在或属于其他用户时不做任何事
    pub async fn logout_session(
        &self,
        user_id: Uuid,
        session_key: Option<&str>,
    ) -> Result<(), ApplicationError> {
        let Some(key) = session_key else {
            return Ok(());
        };

        match self.session_repository.get_by_key(key).await? {
            Some(session) if session.user_id == user_id => {
                self.session_repository.deactivate(key).await?;
                info!("Session logout completed for user {}", user_id);
            }
            Some(_) => warn!("Ignoring logout of a session owned by another user"),
            None => {}
        }
        Ok(())
    }

    /// 吊销当前用户的刷新令牌
    ///
    /// # 错误
    ///
    /// * `Unauthorized` - 刷新令牌无效或过期
    /// * `Forbidden` - 刷新令牌属于其他用户
    pub async fn logout_jwt(&self, user_id: Uuid, refresh: Option<&str>) -> Result<(), ApplicationError> {
        let Some(refresh) = refresh else {
            return Ok(());
        };

        let claims = self
            .token_service
            .decode(refresh, TokenKind::Refresh)
            .map_err(|_| ApplicationError::unauthorized("Token is invalid or expired"))?;

        if claims.user_id != user_id {
            return Err(ApplicationError::forbidden(
                "Token does not belong to the current user.",
            ));
        }

        if self.token_repository.revoke(&claims.jti).await? {
            info!("Refresh token revoked for user {}", user_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::tests_support::Fixture;

    #[tokio::test]
    async fn test_session_logout_deactivates_session() {
        let fixture = Fixture::new();
        let ada = fixture.seed_user("ada", "Sup3r-secret").await;
        let key = fixture
            .authenticate_user()
            .execute("ada", "Sup3r-secret")
            .await
            .unwrap()
            .and_then(|r| r.session_key)
            .unwrap();

        fixture.logout().logout_session(ada.id, Some(&key)).await.unwrap();

        let session = fixture.sessions.get_by_key(&key).await.unwrap().unwrap();
        assert!(!session.is_valid());
        fixture.logout().logout_session(ada.id, None).await.unwrap();
        fixture.logout().logout_session(ada.id, Some("missing")).await.unwrap();
    }

    #[tokio::test]
    async fn test_session_logout_leaves_foreign_session_alone() {
        let fixture = Fixture::new();
        fixture.seed_user("ada", "Sup3r-secret").await;
        let bob = fixture.seed_user("bob", "Sup3r-secret").await;
        let key = fixture
            .authenticate_user()
            .execute("ada", "Sup3r-secret")
            .await
            .unwrap()
            .and_then(|r| r.session_key)
            .unwrap();

        fixture.logout().logout_session(bob.id, Some(&key)).await.unwrap();

        let session = fixture.sessions.get_by_key(&key).await.unwrap().unwrap();
        assert!(session.is_valid());
    }

    #[tokio::test]
    async fn test_jwt_logout_revokes_refresh_token() {
        let fixture = Fixture::new();
        let user = fixture.seed_user("ada", "Sup3r-secret").await;
        let refresh = fixture.jwt_login("ada", "Sup3r-secret").await.1;

        fixture.logout().logout_jwt(user.id, Some(&refresh)).await.unwrap();

        let jti = fixture.token_service.decode(&refresh, TokenKind::Refresh).unwrap().jti;
        let stored = fixture.tokens.get_by_token(&jti).await.unwrap().unwrap();
        assert!(stored.is_revoked);
    }

    #[tokio::test]
    async fn test_jwt_logout_rejects_foreign_token() {
        let fixture = Fixture::new();
        fixture.seed_user("ada", "Sup3r-secret").await;
        let bob = fixture.seed_user("bob", "Sup3r-secret").await;
        let refresh = fixture.jwt_login("ada", "Sup3r-secret").await.1;

        let err = fixture
            .logout()
            .logout_jwt(bob.id, Some(&refresh))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Forbidden { .. }));

        let err = fixture
            .logout()
            .logout_jwt(bob.id, Some("garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized { .. }));
    }
}
