// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 认证限界上下文
///
/// 令牌、会话、密码哈希与令牌签发端口，以及密码强度策略
pub mod entities;
pub mod password_policy;
pub mod ports;
pub mod repositories;
pub mod services;
