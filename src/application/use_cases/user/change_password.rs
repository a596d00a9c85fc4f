// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::application::dto::ChangePasswordDto;
use crate::application::errors::ApplicationError;
use crate::application::use_cases::publish_event;
use crate::domain::authentication::password_policy::PasswordPolicy;
use crate::domain::authentication::ports::PasswordHasher;
use crate::domain::authentication::services::AuthenticationDomainService;
use crate::domain::shared::events::{DomainEvent, DomainEventPublisher};
use crate::domain::shared::repositories::Repository;
use crate::domain::user::repositories::UserRepository;

const OLD_PASSWORD_INCORRECT: &str =
    "Your old password was entered incorrectly. Please enter it again.";
const PASSWORDS_DO_NOT_MATCH: &str = "The two password fields didn't match.";

/// 修改密码用例
pub struct ChangePasswordUseCase {
    user_repository: Arc<dyn UserRepository>,
    auth_domain_service: Arc<AuthenticationDomainService>,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: PasswordPolicy,
    event_publisher: Option<Arc<dyn DomainEventPublisher>>,
}

impl ChangePasswordUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        auth_domain_service: Arc<AuthenticationDomainService>,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: PasswordPolicy,
        event_publisher: Option<Arc<dyn DomainEventPublisher>>,
    ) -> Self {
        Self {
            user_repository,
            auth_domain_service,
            password_hasher,
            password_policy,
            event_publisher,
        }
    }

    /// 校验旧密码和新密码强度后保存新密码
    ///
    /// # 错误
    ///
    /// * `NotFound` - 用户不存在
    /// * `Validation` - 旧密码错误、两次输入不一致或新密码不满足策略
    pub async fn execute(&self, user_id: Uuid, dto: ChangePasswordDto) -> Result<(), ApplicationError> {
        let mut user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("User with ID {} not found", user_id)))?;

        if !self.auth_domain_service.verify_password(&user, &dto.old_password) {
            return Err(ApplicationError::validation(OLD_PASSWORD_INCORRECT)
                .with_extra("fields", serde_json::json!({ "old_password": [OLD_PASSWORD_INCORRECT] })));
        }

        if dto.new_password != dto.confirm_password {
            return Err(ApplicationError::validation(PASSWORDS_DO_NOT_MATCH)
                .with_extra("fields", serde_json::json!({ "password2": [PASSWORDS_DO_NOT_MATCH] })));
        }

        self.password_policy.validate(&dto.new_password, &user)?;

        user.set_password_hash(self.password_hasher.hash(&dto.new_password));
        self.user_repository.save(&user).await?;
        info!("Password changed for user {}", user.id);

        publish_event(
            self.event_publisher.as_ref(),
            DomainEvent::password_changed(user.id),
        );

        Ok(())
    }
}
