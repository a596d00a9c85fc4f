// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// - auth_handler：注册、会话/JWT 登录注销、当前用户资料与修改密码
/// - user_handler：用户列表与启用/停用
pub mod auth_handler;
pub mod user_handler;
