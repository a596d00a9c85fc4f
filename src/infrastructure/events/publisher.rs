// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::shared::events::{DomainEvent, DomainEventKind, DomainEventPublisher};

/// 事件处理器
pub type EventHandler = Arc<dyn Fn(&DomainEvent) -> anyhow::Result<()> + Send + Sync>;

/// 默认保留的最近事件数量
const DEFAULT_EVENT_HISTORY: usize = 1024;

struct Subscriber {
    name: String,
    handler: EventHandler,
}

/// 进程内事件发布者
///
/// 支持按事件类型订阅和订阅全部事件。处理器失败只记录日志，不影响发布方。
/// 最近发布的事件会保留下来，便于测试和排查。
pub struct InMemoryEventPublisher {
    by_kind: RwLock<HashMap<DomainEventKind, Vec<Subscriber>>>,
    all: RwLock<Vec<Subscriber>>,
    events: RwLock<VecDeque<DomainEvent>>,
    history: usize,
}

impl Default for InMemoryEventPublisher {
    fn default() -> Self {
        Self::with_history(DEFAULT_EVENT_HISTORY)
    }
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定保留的事件数量
    pub fn with_history(history: usize) -> Self {
        Self {
            by_kind: RwLock::new(HashMap::new()),
            all: RwLock::new(Vec::new()),
            events: RwLock::new(VecDeque::new()),
            history,
        }
    }

    /// 订阅指定类型的事件
    pub fn subscribe<F>(&self, kind: DomainEventKind, name: &str, handler: F)
    where
        F: Fn(&DomainEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.by_kind.write().entry(kind).or_default().push(Subscriber {
            name: name.to_string(),
            handler: Arc::new(handler),
        });
    }

    /// 订阅全部事件
    pub fn subscribe_all<F>(&self, name: &str, handler: F)
    where
        F: Fn(&DomainEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.all.write().push(Subscriber {
            name: name.to_string(),
            handler: Arc::new(handler),
        });
    }

    /// 已发布的事件（按发布顺序）
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.read().iter().cloned().collect()
    }

    pub fn clear_events(&self) {
        self.events.write().clear();
    }

    fn record(&self, event: &DomainEvent) {
        if self.history == 0 {
            return;
        }
        let mut events = self.events.write();
        if events.len() == self.history {
            events.pop_front();
        }
        events.push_back(event.clone());
    }

    fn notify(name: &str, handler: &EventHandler, event: &DomainEvent) {
        match catch_unwind(AssertUnwindSafe(|| handler(event))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Error handling event {} in {}: {:#}", event.kind(), name, e),
            Err(_) => error!("Handler {} panicked while handling event {}", name, event.kind()),
        }
    }
}

impl DomainEventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: DomainEvent) {
        debug!("Publishing event {}", event.kind());
        self.record(&event);

        // handlers run without holding the subscription locks
        let typed: Vec<(String, EventHandler)> = self
            .by_kind
            .read()
            .get(&event.kind())
            .map(|subs| subs.iter().map(|s| (s.name.clone(), s.handler.clone())).collect())
            .unwrap_or_default();
        let all: Vec<(String, EventHandler)> = self
            .all
            .read()
            .iter()
            .map(|s| (s.name.clone(), s.handler.clone()))
            .collect();

        for (name, handler) in typed.iter().chain(all.iter()) {
            Self::notify(name, handler, &event);
        }
    }
}
