// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 使用SeaORM定义的表映射：
/// - `users`：用户
/// - `user_sessions`：登录会话
/// - `auth_tokens`：已签发的刷新令牌
pub mod auth_token;
pub mod user;
pub mod user_session;
