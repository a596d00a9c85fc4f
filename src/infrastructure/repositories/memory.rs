// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::authentication::entities::{AuthenticationToken, Session};
use crate::domain::authentication::repositories::{SessionRepository, TokenRepository};
use crate::domain::shared::repositories::{Repository, RepositoryError};
use crate::domain::user::entities::User;
use crate::domain::user::repositories::UserRepository;

/// 内存用户仓库
///
/// 与数据库实现保持相同的唯一性约束（用户名、邮箱）
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(&self) -> Vec<User> {
        let mut users = self.users.read().clone();
        // same order as the database: created_at, then id
        users.sort_by_key(|user| (user.created_at, user.id));
        users
    }
}

#[async_trait]
impl Repository<User> for InMemoryUserRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.sorted())
    }

    async fn save(&self, entity: &User) -> Result<User, RepositoryError> {
        let mut users = self.users.write();

        if let Some(other) = users.iter().find(|u| u.id != entity.id && u.username == entity.username) {
            return Err(RepositoryError::Conflict(format!("users.username: {}", other.username)));
        }
        if let Some(other) = users.iter().find(|u| u.id != entity.id && u.email == entity.email) {
            return Err(RepositoryError::Conflict(format!("users.email: {}", other.email)));
        }

        match users.iter_mut().find(|u| u.id == entity.id) {
            Some(existing) => *existing = entity.clone(),
            None => users.push(entity.clone()),
        }
        Ok(entity.clone())
    }

    async fn delete(&self, entity: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|u| u.id != entity.id);
        if users.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().iter().find(|u| u.username == username).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let email = email.trim().to_lowercase();
        Ok(self.users.read().iter().find(|u| u.email == email).cloned())
    }

    async fn get_active_users(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.sorted().into_iter().filter(|u| u.is_active).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.users.read().len() as u64)
    }

    async fn get_page(&self, limit: u64, offset: u64) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .sorted()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

/// 内存会话仓库，以会话键为索引
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &Session) -> Result<Session, RepositoryError> {
        self.sessions
            .write()
            .insert(session.session_key.clone(), session.clone());
        Ok(session.clone())
    }

    async fn get_by_key(&self, session_key: &str) -> Result<Option<Session>, RepositoryError> {
        Ok(self.sessions.read().get(session_key).cloned())
    }

    async fn deactivate(&self, session_key: &str) -> Result<bool, RepositoryError> {
        Ok(match self.sessions.write().get_mut(session_key) {
            Some(session) => {
                session.deactivate();
                true
            }
            None => false,
        })
    }

    async fn delete_expired(&self) -> Result<u64, RepositoryError> {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

/// 内存令牌仓库，以令牌标识为索引
#[derive(Default)]
pub struct InMemoryTokenRepository {
    tokens: RwLock<HashMap<String, AuthenticationToken>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn save(
        &self,
        token: &AuthenticationToken,
    ) -> Result<AuthenticationToken, RepositoryError> {
        self.tokens.write().insert(token.token.clone(), token.clone());
        Ok(token.clone())
    }

    async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<AuthenticationToken>, RepositoryError> {
        Ok(self.tokens.read().get(token).cloned())
    }

    async fn revoke(&self, token: &str) -> Result<bool, RepositoryError> {
        Ok(match self.tokens.write().get_mut(token) {
            Some(stored) => {
                stored.revoke();
                true
            }
            None => false,
        })
    }

    async fn delete_expired(&self) -> Result<u64, RepositoryError> {
        let mut tokens = self.tokens.write();
        let before = tokens.len();
        tokens.retain(|_, token| token.is_valid());
        Ok((before - tokens.len()) as u64)
    }
}
