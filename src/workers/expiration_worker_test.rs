// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::*;
use crate::domain::authentication::entities::{AuthenticationToken, Session};
use crate::infrastructure::repositories::{InMemorySessionRepository, InMemoryTokenRepository};
use chrono::Utc;
use uuid::Uuid;

struct Stores {
    sessions: Arc<InMemorySessionRepository>,
    tokens: Arc<InMemoryTokenRepository>,
}

impl Stores {
    async fn seeded() -> Self {
        let sessions = Arc::new(InMemorySessionRepository::new());
        let tokens = Arc::new(InMemoryTokenRepository::new());
        let user_id = Uuid::new_v4();
        let past = Some(Utc::now() - chrono::Duration::hours(1));

        sessions
            .save(&Session::new(user_id, "live".into(), None))
            .await
            .unwrap();
        sessions
            .save(&Session::new(user_id, "stale".into(), past))
            .await
            .unwrap();

        tokens
            .save(&AuthenticationToken::new(user_id, "live".into(), None))
            .await
            .unwrap();
        tokens
            .save(&AuthenticationToken::new(user_id, "old".into(), past))
            .await
            .unwrap();
        tokens
            .save(&AuthenticationToken::new(user_id, "revoked".into(), None))
            .await
            .unwrap();
        tokens.revoke("revoked").await.unwrap();

        Self { sessions, tokens }
    }

    fn worker(&self) -> ExpirationWorker {
        ExpirationWorker::new(self.sessions.clone(), self.tokens.clone())
    }
}

#[tokio::test]
async fn test_cleanup_removes_expired_credentials() {
    let stores = Stores::seeded().await;

    let result = stores.worker().cleanup().await.unwrap();

    assert_eq!(result, (1, 2));
    assert!(stores.sessions.get_by_key("live").await.unwrap().is_some());
    assert!(stores.sessions.get_by_key("stale").await.unwrap().is_none());
    assert!(stores.tokens.get_by_token("live").await.unwrap().is_some());
    assert!(stores.tokens.get_by_token("old").await.unwrap().is_none());
    assert!(stores.tokens.get_by_token("revoked").await.unwrap().is_none());
}

#[tokio::test]
async fn test_cleanup_with_nothing_to_remove() {
    let stores = Stores::seeded().await;
    let worker = stores.worker();
    worker.cleanup().await.unwrap();

    assert_eq!(worker.cleanup().await.unwrap(), (0, 0));
}

#[tokio::test(start_paused = true)]
async fn test_started_worker_cleans_on_first_tick() {
    let stores = Stores::seeded().await;
    let handle = stores
        .worker()
        .with_interval(Duration::from_secs(30))
        .start();

    // let the spawned task reach its first tick
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    assert!(stores.sessions.get_by_key("stale").await.unwrap().is_none());
    assert!(stores.tokens.get_by_token("old").await.unwrap().is_none());
    assert!(!handle.is_finished());
    handle.abort();
}
