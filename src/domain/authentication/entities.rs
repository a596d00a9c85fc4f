// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::entity::Entity;

/// 令牌默认有效期（秒）
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// 认证令牌实体
///
/// 保存已签发的刷新令牌，用于注销和吊销检查
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticationToken {
    pub id: Uuid,
    pub user_id: Uuid,
    /// 令牌标识（刷新令牌的 jti）
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub is_revoked: bool,
    pub created_at: DateTime<Utc>,
}

impl AuthenticationToken {
    /// 创建令牌，未指定过期时间时默认一小时后过期
    pub fn new(user_id: Uuid, token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token,
            token_type: "Bearer".to_string(),
            expires_at: expires_at
                .unwrap_or_else(|| now + Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS)),
            is_revoked: false,
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// 未过期且未被吊销
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked
    }

    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

impl Entity for AuthenticationToken {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl PartialEq for AuthenticationToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// 会话实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    /// 会话键，写入 Cookie
    pub session_key: String,
    /// 为空表示永不过期
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: Uuid, session_key: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            session_key,
            expires_at,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// 生成随机会话键（32 字节，十六进制编码）
    pub fn generate_key() -> String {
        let bytes: [u8; 32] = rand::random();
        hex::encode(bytes)
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|expires_at| Utc::now() > expires_at)
            .unwrap_or(false)
    }

    /// 处于激活状态且未过期
    pub fn is_valid(&self) -> bool {
        self.is_active && !self.is_expired()
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Entity for Session {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
