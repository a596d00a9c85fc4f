// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::shared::events::{DomainEvent, EventMetadata};

/// 用户已创建
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCreated {
    #[serde(flatten)]
    pub meta: EventMetadata,
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

/// 用户资料已更新
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdated {
    #[serde(flatten)]
    pub meta: EventMetadata,
    pub user_id: Uuid,
    /// 被修改的字段名
    pub updated_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserActivated {
    #[serde(flatten)]
    pub meta: EventMetadata,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDeactivated {
    #[serde(flatten)]
    pub meta: EventMetadata,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordChanged {
    #[serde(flatten)]
    pub meta: EventMetadata,
    pub user_id: Uuid,
}

impl DomainEvent {
    pub fn user_created(user_id: Uuid, username: &str, email: &str) -> Self {
        DomainEvent::UserCreated(UserCreated {
            meta: EventMetadata::for_aggregate(user_id),
            user_id,
            username: username.to_string(),
            email: email.to_string(),
        })
    }

    pub fn user_updated(user_id: Uuid, updated_fields: Vec<String>) -> Self {
        DomainEvent::UserUpdated(UserUpdated {
            meta: EventMetadata::for_aggregate(user_id),
            user_id,
            updated_fields,
        })
    }

    pub fn user_activated(user_id: Uuid) -> Self {
        DomainEvent::UserActivated(UserActivated {
            meta: EventMetadata::for_aggregate(user_id),
            user_id,
        })
    }

    pub fn user_deactivated(user_id: Uuid) -> Self {
        DomainEvent::UserDeactivated(UserDeactivated {
            meta: EventMetadata::for_aggregate(user_id),
            user_id,
        })
    }

    pub fn password_changed(user_id: Uuid) -> Self {
        DomainEvent::PasswordChanged(PasswordChanged {
            meta: EventMetadata::for_aggregate(user_id),
            user_id,
        })
    }
}
