// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::dto::UserDto;
use crate::application::errors::ApplicationError;
use crate::application::use_cases::publish_event;
use crate::domain::shared::events::{DomainEvent, DomainEventPublisher};
use crate::domain::shared::repositories::Repository;
use crate::domain::user::repositories::UserRepository;

/// 启用或停用用户用例
///
/// 只有员工、管理员或超级用户可以执行
pub struct SetUserActiveUseCase {
    user_repository: Arc<dyn UserRepository>,
    event_publisher: Option<Arc<dyn DomainEventPublisher>>,
}

impl SetUserActiveUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        event_publisher: Option<Arc<dyn DomainEventPublisher>>,
    ) -> Self {
        Self {
            user_repository,
            event_publisher,
        }
    }

    pub async fn execute(
        &self,
        actor_id: Uuid,
        target_id: Uuid,
        active: bool,
    ) -> Result<UserDto, ApplicationError> {
        let actor = self
            .user_repository
            .get_by_id(actor_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("User with ID {} not found", actor_id)))?;

        if !actor.can_manage_users() {
            warn!("User {} tried to change activation of {}", actor_id, target_id);
            return Err(ApplicationError::forbidden(
                "You do not have permission to perform this action.",
            ));
        }

        if actor_id == target_id && !active {
            return Err(ApplicationError::forbidden("You cannot deactivate your own account."));
        }

        let mut target = self
            .user_repository
            .get_by_id(target_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("User with ID {} not found", target_id)))?;

        if target.is_active == active {
            return Ok(UserDto::from(&target));
        }

        let event = if active {
            target.activate();
            DomainEvent::user_activated(target.id)
        } else {
            target.deactivate();
            DomainEvent::user_deactivated(target.id)
        };

        let saved = self.user_repository.save(&target).await?;
        info!(
            "User {} {} by {}",
            saved.id,
            if active { "activated" } else { "deactivated" },
            actor_id
        );
        publish_event(self.event_publisher.as_ref(), event);

        Ok(UserDto::from(&saved))
    }
}
