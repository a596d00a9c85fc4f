// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use super::entities::User;
use crate::domain::shared::repositories::{Repository, RepositoryError};

/// 用户仓库特质
///
/// 在通用仓库之上提供按用户名、邮箱查询以及分页能力
#[async_trait]
pub trait UserRepository: Repository<User> {
    /// 根据用户名精确查找
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// 根据邮箱查找，不区分大小写
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        Ok(self.get_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        Ok(self.get_by_email(email).await?.is_some())
    }

    /// 获取所有激活用户
    async fn get_active_users(&self) -> Result<Vec<User>, RepositoryError>;

    /// 用户总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 按创建时间、ID 排序后取一页
    async fn get_page(&self, limit: u64, offset: u64) -> Result<Vec<User>, RepositoryError>;
}
