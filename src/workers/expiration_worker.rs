// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::domain::authentication::repositories::{SessionRepository, TokenRepository};
use crate::domain::shared::repositories::RepositoryError;

/// 凭据过期清理工作器
///
/// 定期删除过期会话，以及过期或已吊销的刷新令牌
pub struct ExpirationWorker {
    session_repository: Arc<dyn SessionRepository>,
    token_repository: Arc<dyn TokenRepository>,
    interval: Duration,
}

impl ExpirationWorker {
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        token_repository: Arc<dyn TokenRepository>,
    ) -> Self {
        Self {
            session_repository,
            token_repository,
            interval: Duration::from_secs(60 * 60), // 每小时运行一次
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// 运行工作器，首次清理立即执行
    pub async fn run(&self) {
        info!("Credential expiration worker started");

        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;

            match self.cleanup().await {
                Ok((sessions, tokens)) => {
                    if sessions > 0 || tokens > 0 {
                        info!(
                            "Cleaned up {} expired sessions and {} stale tokens",
                            sessions, tokens
                        );
                    }
                }
                Err(e) => {
                    error!("Failed to cleanup expired credentials: {}", e);
                }
            }
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// 执行一次清理，返回删除的会话数和令牌数
    pub async fn cleanup(&self) -> Result<(u64, u64), RepositoryError> {
        let sessions = self.session_repository.delete_expired().await?;
        let tokens = self.token_repository.delete_expired().await?;
        Ok((sessions, tokens))
    }
}

#[cfg(test)]
#[path = "expiration_worker_test.rs"]
mod tests;
