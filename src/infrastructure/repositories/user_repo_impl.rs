// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

use super::map_db_err;
use crate::domain::shared::repositories::{Repository, RepositoryError};
use crate::domain::user::entities::User;
use crate::domain::user::repositories::UserRepository;
use crate::infrastructure::database::entities::user;

/// 用户仓库的SeaORM实现
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    /// 创建新的用户仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<User> for SeaOrmUserRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let model = user::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, entity: &User) -> Result<User, RepositoryError> {
        let exists = user::Entity::find_by_id(entity.id)
            .one(self.db.as_ref())
            .await?
            .is_some();

        let active = to_active_model(entity);
        let model = if exists {
            active.update(self.db.as_ref()).await
        } else {
            active.insert(self.db.as_ref()).await
        }
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, entity: &User) -> Result<(), RepositoryError> {
        let result = user::Entity::delete_by_id(entity.id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        // emails are stored lower-cased
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let count = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email.trim().to_lowercase()))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    async fn get_active_users(&self) -> Result<Vec<User>, RepositoryError> {
        let models = user::Entity::find()
            .filter(user::Column::IsActive.eq(true))
            .order_by_asc(user::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(user::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn get_page(&self, limit: u64, offset: u64) -> Result<Vec<User>, RepositoryError> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}

fn to_active_model(entity: &User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(entity.id),
        username: Set(entity.username.clone()),
        email: Set(entity.email.clone()),
        first_name: Set(entity.first_name.clone()),
        last_name: Set(entity.last_name.clone()),
        is_active: Set(entity.is_active),
        is_staff: Set(entity.is_staff),
        is_admin: Set(entity.is_admin),
        is_superuser: Set(entity.is_superuser),
        password_hash: Set(entity.password_hash.clone()),
        last_login: Set(entity.last_login.map(Into::into)),
        created_at: Set(entity.created_at.into()),
        updated_at: Set(entity.updated_at.into()),
    }
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            is_active: model.is_active,
            is_staff: model.is_staff,
            is_admin: model.is_admin,
            is_superuser: model.is_superuser,
            password_hash: model.password_hash,
            last_login: model.last_login.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
