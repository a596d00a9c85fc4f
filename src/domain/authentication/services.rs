// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::debug;

use super::ports::PasswordHasher;
use crate::domain::shared::repositories::RepositoryError;
use crate::domain::user::entities::User;
use crate::domain::user::repositories::UserRepository;

/// 认证领域服务
pub struct AuthenticationDomainService {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl AuthenticationDomainService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// 使用用户名和密码认证
    ///
    /// 用户不存在、未激活、没有设置密码或密码错误时都返回 `None`。
    /// 哈希参数过期时返回的用户已带上新哈希，由调用方保存。
    pub async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let Some(mut user) = self.user_repository.get_by_username(username).await? else {
            return Ok(None);
        };

        if !self.can_user_authenticate(&user) || !self.verify_password(&user, password) {
            return Ok(None);
        }

        let outdated = user
            .password_hash
            .as_deref()
            .is_some_and(|encoded| self.password_hasher.needs_rehash(encoded));
        if outdated {
            debug!("Upgrading password hash for user {}", user.id);
            user.set_password_hash(self.password_hasher.hash(password));
        }
        Ok(Some(user))
    }

    /// 校验密码是否与用户当前密码一致
    pub fn verify_password(&self, user: &User, password: &str) -> bool {
        user.password_hash
            .as_deref()
            .map(|encoded| self.password_hasher.verify(password, encoded))
            .unwrap_or(false)
    }

    pub fn can_user_authenticate(&self, user: &User) -> bool {
        user.is_active
    }
}
