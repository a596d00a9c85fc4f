// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};

use crate::domain::shared::repositories::RepositoryError;

/// 仓库实现模块
///
/// - SeaORM 实现：用户、会话、令牌
/// - 内存实现：用于测试和无数据库装配
pub mod memory;
pub mod session_repo_impl;
pub mod token_repo_impl;
pub mod user_repo_impl;

pub use memory::{InMemorySessionRepository, InMemoryTokenRepository, InMemoryUserRepository};
pub use session_repo_impl::SeaOrmSessionRepository;
pub use token_repo_impl::SeaOrmTokenRepository;
pub use user_repo_impl::SeaOrmUserRepository;

/// 将唯一约束冲突转换为 `Conflict`，其他错误保持为数据库错误
pub(crate) fn map_db_err(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => RepositoryError::Conflict(message),
        _ => RepositoryError::Database(err),
    }
}
