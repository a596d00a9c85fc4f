// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

use super::entity::Entity;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一约束冲突
    #[error("Unique constraint violated: {0}")]
    Conflict(String),
}

/// 通用仓库特质
///
/// 所有聚合仓库的基础数据访问接口，具体实现由基础设施层提供
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + Sync + 'static,
{
    /// 根据ID查找实体
    async fn get_by_id(&self, id: E::Id) -> Result<Option<E>, RepositoryError>;
    /// 获取全部实体
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError>;
    /// 新增或更新实体
    async fn save(&self, entity: &E) -> Result<E, RepositoryError>;
    /// 删除实体
    async fn delete(&self, entity: &E) -> Result<(), RepositoryError>;
}
