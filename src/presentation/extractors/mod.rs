// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器
///
/// - current_user：认证中间件注入的当前用户
/// - validated_json：反序列化并校验请求体
pub mod current_user;
pub mod validated_json;

pub use current_user::AuthenticatedUser;
pub use validated_json::ValidatedJson;
