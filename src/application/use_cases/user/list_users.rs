// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::application::dto::{Page, UserDto};
use crate::application::errors::ApplicationError;
use crate::domain::user::repositories::UserRepository;

/// 分页列出用户用例
pub struct ListUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// 按创建时间返回一页用户以及用户总数
    pub async fn execute(&self, limit: u64, offset: u64) -> Result<Page<UserDto>, ApplicationError> {
        let count = self.user_repository.count().await?;
        let items = self.user_repository.get_page(limit, offset).await?;

        Ok(Page {
            items,
            count,
            limit,
            offset,
        }
        .map(UserDto::from))
    }
}
