// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::UserDto;
use crate::application::errors::ApplicationError;
use crate::domain::shared::repositories::Repository;
use crate::domain::user::repositories::UserRepository;

/// 查询单个用户用例
pub struct GetUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn execute(&self, user_id: Uuid) -> Result<UserDto, ApplicationError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("User with ID {} not found", user_id)))
    }
}
