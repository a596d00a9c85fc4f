// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::user::entities::User;

/// 密码哈希器
///
/// 领域层只关心哈希和校验两个动作，具体算法由基础设施层实现
pub trait PasswordHasher: Send + Sync {
    /// 对明文密码进行哈希，返回带算法前缀的编码字符串
    fn hash(&self, plain: &str) -> String;

    /// 校验明文密码是否与编码后的哈希匹配
    fn verify(&self, plain: &str, encoded: &str) -> bool;

    /// 哈希参数与当前配置不一致时返回 true，登录成功后据此升级哈希
    fn needs_rehash(&self, _encoded: &str) -> bool {
        false
    }
}

/// 令牌类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// 令牌声明
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub token_type: TokenKind,
    pub user_id: Uuid,
    /// 令牌唯一标识
    pub jti: String,
    /// 签发时间（Unix 秒）
    pub iat: i64,
    /// 过期时间（Unix 秒）
    pub exp: i64,
}

/// 一次登录签发的令牌对
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
    /// 刷新令牌的声明，用于持久化
    pub refresh_claims: Claims,
}

/// 令牌错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,
    #[error("Token signature is invalid")]
    InvalidSignature,
    #[error("Token is expired")]
    Expired,
    #[error("Token has wrong type: expected {expected}")]
    WrongType { expected: TokenKind },
    #[error("Token could not be encoded: {0}")]
    Encoding(String),
}

/// 令牌服务
pub trait TokenService: Send + Sync {
    /// 为用户签发访问令牌和刷新令牌
    fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError>;

    /// 为用户签发新的访问令牌
    fn issue_access(&self, user_id: Uuid) -> Result<String, TokenError>;

    /// 解码并校验令牌，类型必须与期望一致
    fn decode(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError>;
}
