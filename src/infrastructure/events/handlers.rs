// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::info;

use super::publisher::InMemoryEventPublisher;
use crate::domain::shared::events::{DomainEvent, DomainEventKind};

pub fn handle_user_created(event: &DomainEvent) -> anyhow::Result<()> {
    if let DomainEvent::UserCreated(e) = event {
        info!(user_id = %e.user_id, "User {} created", e.username);
    }
    Ok(())
}

pub fn handle_user_updated(event: &DomainEvent) -> anyhow::Result<()> {
    if let DomainEvent::UserUpdated(e) = event {
        info!(user_id = %e.user_id, "User updated fields: {:?}", e.updated_fields);
    }
    Ok(())
}

pub fn handle_password_changed(event: &DomainEvent) -> anyhow::Result<()> {
    if let DomainEvent::PasswordChanged(e) = event {
        info!(user_id = %e.user_id, "User changed password");
    }
    Ok(())
}

/// 注册默认处理器
pub fn register_default_handlers(publisher: &InMemoryEventPublisher) {
    publisher.subscribe(
        DomainEventKind::UserCreated,
        "handle_user_created",
        handle_user_created,
    );
    publisher.subscribe(
        DomainEventKind::UserUpdated,
        "handle_user_updated",
        handle_user_updated,
    );
    publisher.subscribe(
        DomainEventKind::PasswordChanged,
        "handle_password_changed",
        handle_password_changed,
    );
}
