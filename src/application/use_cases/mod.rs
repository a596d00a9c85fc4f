// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::debug;

use crate::domain::shared::events::{DomainEvent, DomainEventPublisher};

/// 认证相关用例
pub mod authentication;
/// 用户相关用例
pub mod user;

/// 发布事件，未配置发布者时忽略
pub(crate) fn publish_event(publisher: Option<&Arc<dyn DomainEventPublisher>>, event: DomainEvent) {
    match publisher {
        Some(publisher) => publisher.publish(event),
        None => debug!("No event publisher configured, dropping {}", event.kind()),
    }
}

#[cfg(test)]
pub(crate) mod tests_support;
