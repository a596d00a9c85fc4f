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
use crate::domain::authentication::entities::AuthenticationToken;
use crate::domain::authentication::repositories::TokenRepository;
use crate::domain::shared::repositories::RepositoryError;
use crate::infrastructure::database::entities::auth_token;

/// 令牌仓库的SeaORM实现
#[derive(Clone)]
pub struct SeaOrmTokenRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTokenRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenRepository for SeaOrmTokenRepository {
    async fn save(
        &self,
        token: &AuthenticationToken,
    ) -> Result<AuthenticationToken, RepositoryError> {
        let exists = auth_token::Entity::find_by_id(token.id)
            .one(self.db.as_ref())
            .await?
            .is_some();

        let active = auth_token::ActiveModel {
            id: Set(token.id),
            user_id: Set(token.user_id),
            token: Set(token.token.clone()),
            token_type: Set(token.token_type.clone()),
            expires_at: Set(token.expires_at.into()),
            is_revoked: Set(token.is_revoked),
            created_at: Set(token.created_at.into()),
        };

        let model = if exists {
            active.update(self.db.as_ref()).await
        } else {
            active.insert(self.db.as_ref()).await
        }
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<AuthenticationToken>, RepositoryError> {
        let model = auth_token::Entity::find()
            .filter(auth_token::Column::Token.eq(token))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn revoke(&self, token: &str) -> Result<bool, RepositoryError> {
        let result = auth_token::Entity::update_many()
            .col_expr(auth_token::Column::IsRevoked, Expr::value(true))
            .filter(auth_token::Column::Token.eq(token))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_expired(&self) -> Result<u64, RepositoryError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let result = auth_token::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(auth_token::Column::ExpiresAt.lt(now))
                    .add(auth_token::Column::IsRevoked.eq(true)),
            )
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}

impl From<auth_token::Model> for AuthenticationToken {
    fn from(model: auth_token::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            token: model.token,
            token_type: model.token_type,
            expires_at: model.expires_at.into(),
            is_revoked: model.is_revoked,
            created_at: model.created_at.into(),
        }
    }
}
