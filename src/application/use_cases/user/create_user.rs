// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::info;

use crate::application::dto::{UserCreateDto, UserDto};
use crate::application::errors::ApplicationError;
use crate::application::use_cases::publish_event;
use crate::domain::authentication::ports::PasswordHasher;
use crate::domain::shared::events::{DomainEvent, DomainEventPublisher};
use crate::domain::shared::repositories::Repository;
use crate::domain::user::entities::User;
use crate::domain::user::repositories::UserRepository;
use crate::domain::user::services::UserDomainService;

/// 创建用户用例
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    user_domain_service: Arc<UserDomainService>,
    password_hasher: Arc<dyn PasswordHasher>,
    event_publisher: Option<Arc<dyn DomainEventPublisher>>,
}

impl CreateUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        user_domain_service: Arc<UserDomainService>,
        password_hasher: Arc<dyn PasswordHasher>,
        event_publisher: Option<Arc<dyn DomainEventPublisher>>,
    ) -> Self {
        Self {
            user_repository,
            user_domain_service,
            password_hasher,
            event_publisher,
        }
    }

    /// 创建新用户
    ///
    /// # 错误
    ///
    /// * `Conflict` - 用户名或邮箱已被占用，`extra.field` 指明字段
    /// * `Validation` - 用户名或邮箱格式无效
    pub async fn execute(&self, dto: UserCreateDto) -> Result<UserDto, ApplicationError> {
        self.user_domain_service
            .validate_user_creation(&dto.username, &dto.email)
            .await?;

        let mut user = User::new(&dto.username, &dto.email)?.with_names(dto.first_name, dto.last_name);
        user.set_password_hash(self.password_hasher.hash(&dto.password));

        let saved = self.user_repository.save(&user).await?;
        info!("Created user {} ({})", saved.username, saved.id);

        publish_event(
            self.event_publisher.as_ref(),
            DomainEvent::user_created(saved.id, &saved.username, &saved.email),
        );

        Ok(UserDto::from(&saved))
    }
}
