// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use uuid::Uuid;

use super::repositories::UserRepository;
use super::value_objects::{Email, Username};
use crate::domain::shared::errors::{DomainError, DomainServiceError, CODE_ALREADY_TAKEN};

/// 用户领域服务
///
/// 处理需要访问仓库的用户规则，例如用户名和邮箱的唯一性
pub struct UserDomainService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserDomainService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// 邮箱是否未被其他用户占用
    ///
    /// `exclude_user_id` 为当前用户时，自己持有该邮箱不算冲突
    pub async fn is_email_unique(
        &self,
        email: &str,
        exclude_user_id: Option<Uuid>,
    ) -> Result<bool, DomainServiceError> {
        let existing = self.user_repository.get_by_email(email).await?;
        Ok(match existing {
            None => true,
            Some(user) => Some(user.id) == exclude_user_id,
        })
    }

    /// 用户名是否未被其他用户占用
    pub async fn is_username_unique(
        &self,
        username: &str,
        exclude_user_id: Option<Uuid>,
    ) -> Result<bool, DomainServiceError> {
        let existing = self.user_repository.get_by_username(username).await?;
        Ok(match existing {
            None => true,
            Some(user) => Some(user.id) == exclude_user_id,
        })
    }

    /// 校验新用户的用户名和邮箱
    pub async fn validate_user_creation(
        &self,
        username: &str,
        email: &str,
    ) -> Result<(), DomainServiceError> {
        let username = Username::parse(username).map_err(|e| {
            DomainError::business_rule(format!("Invalid username: {}", e.message()))
                .with_detail("field", "username")
        })?;
        let email = Email::parse(email).map_err(|e| {
            DomainError::business_rule(format!("Invalid email: {}", e.message()))
                .with_detail("field", "email")
        })?;

        if !self.is_username_unique(username.as_str(), None).await? {
            return Err(DomainError::business_rule(format!(
                "Username '{}' is already taken",
                username
            ))
            .with_detail("field", "username")
            .with_detail("code", CODE_ALREADY_TAKEN)
            .into());
        }

        if !self.is_email_unique(email.as_str(), None).await? {
            return Err(
                DomainError::business_rule(format!("Email '{}' is already taken", email))
                    .with_detail("field", "email")
                    .with_detail("code", CODE_ALREADY_TAKEN)
                    .into(),
            );
        }

        Ok(())
    }
}
