// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use super::entities::{AuthenticationToken, Session};
use crate::domain::shared::repositories::RepositoryError;

/// 会话仓库特质
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn save(&self, session: &Session) -> Result<Session, RepositoryError>;

    /// 根据会话键查找
    async fn get_by_key(&self, session_key: &str) -> Result<Option<Session>, RepositoryError>;

    /// 停用会话，返回是否存在该会话
    async fn deactivate(&self, session_key: &str) -> Result<bool, RepositoryError>;

    /// 删除所有已过期会话，返回删除数量
    async fn delete_expired(&self) -> Result<u64, RepositoryError>;
}

/// 令牌仓库特质
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn save(&self, token: &AuthenticationToken)
        -> Result<AuthenticationToken, RepositoryError>;

    async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<AuthenticationToken>, RepositoryError>;

    /// 吊销令牌，返回是否存在该令牌
    async fn revoke(&self, token: &str) -> Result<bool, RepositoryError>;
    /// 删除已过期或已吊销的令牌，返回删除数量
    async fn delete_expired(&self) -> Result<u64, RepositoryError>;
}
