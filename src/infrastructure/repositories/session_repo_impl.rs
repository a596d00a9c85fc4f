// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

use super::map_db_err;
use crate::domain::authentication::entities::Session;
use crate::domain::authentication::repositories::SessionRepository;
use crate::domain::shared::repositories::RepositoryError;
use crate::infrastructure::database::entities::user_session;

/// 会话仓库的SeaORM实现
#[derive(Clone)]
pub struct SeaOrmSessionRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSessionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SeaOrmSessionRepository {
    async fn save(&self, session: &Session) -> Result<Session, RepositoryError> {
        let exists = user_session::Entity::find_by_id(session.id)
            .one(self.db.as_ref())
            .await?
            .is_some();

        let active = user_session::ActiveModel {
            id: Set(session.id),
            user_id: Set(session.user_id),
            session_key: Set(session.session_key.clone()),
            expires_at: Set(session.expires_at.map(Into::into)),
            is_active: Set(session.is_active),
            created_at: Set(session.created_at.into()),
            updated_at: Set(Utc::now().into()),
        };

        let model = if exists {
            active.update(self.db.as_ref()).await
        } else {
            active.insert(self.db.as_ref()).await
        }
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn get_by_key(&self, session_key: &str) -> Result<Option<Session>, RepositoryError> {
        let model = user_session::Entity::find()
            .filter(user_session::Column::SessionKey.eq(session_key))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn deactivate(&self, session_key: &str) -> Result<bool, RepositoryError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let result = user_session::Entity::update_many()
            .col_expr(user_session::Column::IsActive, Expr::value(false))
            .col_expr(user_session::Column::UpdatedAt, Expr::value(now))
            .filter(user_session::Column::SessionKey.eq(session_key))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_expired(&self) -> Result<u64, RepositoryError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let result = user_session::Entity::delete_many()
            .filter(user_session::Column::ExpiresAt.is_not_null())
            .filter(user_session::Column::ExpiresAt.lt(now))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}

impl From<user_session::Model> for Session {
    fn from(model: user_session::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            session_key: model.session_key,
            expires_at: model.expires_at.map(Into::into),
            is_active: model.is_active,
            created_at: model.created_at.into(),
        }
    }
}
