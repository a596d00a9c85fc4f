// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 安全原语
///
/// - password_hasher：PBKDF2-SHA256 密码哈希
/// - jwt：HS256 JWT 签发与校验
pub mod jwt;
pub mod password_hasher;
