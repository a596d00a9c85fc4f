// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::domain::user::events::{
    PasswordChanged, UserActivated, UserCreated, UserDeactivated, UserUpdated,
};

/// 事件元数据
///
/// 每个领域事件都携带的标识、发生时间和所属聚合
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMetadata {
    /// 事件唯一标识符
    pub event_id: Uuid,
    /// 事件发生时间
    pub occurred_at: DateTime<Utc>,
    /// 所属聚合根ID
    pub aggregate_id: Option<Uuid>,
}

impl EventMetadata {
    pub fn new(aggregate_id: Option<Uuid>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aggregate_id,
        }
    }

    pub fn for_aggregate(aggregate_id: Uuid) -> Self {
        Self::new(Some(aggregate_id))
    }
}

/// 领域事件
///
/// 表示领域中已经发生的事实
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    UserCreated(UserCreated),
    UserUpdated(UserUpdated),
    UserActivated(UserActivated),
    UserDeactivated(UserDeactivated),
    PasswordChanged(PasswordChanged),
}

/// 领域事件类型，用于按类型订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainEventKind {
    UserCreated,
    UserUpdated,
    UserActivated,
    UserDeactivated,
    PasswordChanged,
}

impl fmt::Display for DomainEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainEventKind::UserCreated => write!(f, "user.created"),
            DomainEventKind::UserUpdated => write!(f, "user.updated"),
            DomainEventKind::UserActivated => write!(f, "user.activated"),
            DomainEventKind::UserDeactivated => write!(f, "user.deactivated"),
            DomainEventKind::PasswordChanged => write!(f, "user.password_changed"),
        }
    }
}

impl DomainEvent {
    pub fn kind(&self) -> DomainEventKind {
        match self {
            DomainEvent::UserCreated(_) => DomainEventKind::UserCreated,
            DomainEvent::UserUpdated(_) => DomainEventKind::UserUpdated,
            DomainEvent::UserActivated(_) => DomainEventKind::UserActivated,
            DomainEvent::UserDeactivated(_) => DomainEventKind::UserDeactivated,
            DomainEvent::PasswordChanged(_) => DomainEventKind::PasswordChanged,
        }
    }

    pub fn metadata(&self) -> &EventMetadata {
        match self {
            DomainEvent::UserCreated(e) => &e.meta,
            DomainEvent::UserUpdated(e) => &e.meta,
            DomainEvent::UserActivated(e) => &e.meta,
            DomainEvent::UserDeactivated(e) => &e.meta,
            DomainEvent::PasswordChanged(e) => &e.meta,
        }
    }

    pub fn aggregate_id(&self) -> Option<Uuid> {
        self.metadata().aggregate_id
    }
}

/// 领域事件发布者
///
/// 领域层只依赖该接口，具体的分发方式由基础设施层决定
pub trait DomainEventPublisher: Send + Sync {
    /// 发布一个领域事件
    fn publish(&self, event: DomainEvent);
}
