// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::application::dto::{UserDto, UserUpdateDto};
use crate::application::errors::ApplicationError;
use crate::application::use_cases::publish_event;
use crate::domain::shared::events::{DomainEvent, DomainEventPublisher};
use crate::domain::shared::repositories::Repository;
use crate::domain::user::repositories::UserRepository;
use crate::domain::user::services::UserDomainService;
use crate::domain::user::value_objects::Email;

/// 更新用户资料用例
pub struct UpdateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    user_domain_service: Arc<UserDomainService>,
    event_publisher: Option<Arc<dyn DomainEventPublisher>>,
}

impl UpdateUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        user_domain_service: Arc<UserDomainService>,
        event_publisher: Option<Arc<dyn DomainEventPublisher>>,
    ) -> Self {
        Self {
            user_repository,
            user_domain_service,
            event_publisher,
        }
    }

    /// 更新用户，只修改请求中提供的字段
    pub async fn execute(
        &self,
        user_id: Uuid,
        dto: UserUpdateDto,
    ) -> Result<UserDto, ApplicationError> {
        let mut user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("User with ID {} not found", user_id)))?;

        if let Some(email) = dto.email.as_deref() {
            let email = Email::parse(email)?;
            if email.as_str() != user.email
                && !self
                    .user_domain_service
                    .is_email_unique(email.as_str(), Some(user_id))
                    .await?
            {
                return Err(
                    ApplicationError::conflict(format!("Email '{}' is already taken", email))
                        .with_extra("field", "email"),
                );
            }
        }

        let mut updated_fields = Vec::new();
        if let Some(first_name) = dto.first_name {
            user.set_first_name(first_name);
            updated_fields.push("first_name".to_string());
        }
        if let Some(last_name) = dto.last_name {
            user.set_last_name(last_name);
            updated_fields.push("last_name".to_string());
        }
        if let Some(email) = dto.email {
            user.change_email(&email)?;
            updated_fields.push("email".to_string());
        }

        let saved = self.user_repository.save(&user).await?;

        if !updated_fields.is_empty() {
            info!("Updated user {}: {:?}", saved.id, updated_fields);
            publish_event(
                self.event_publisher.as_ref(),
                DomainEvent::user_updated(saved.id, updated_fields),
            );
        }

        Ok(UserDto::from(&saved))
    }
}
