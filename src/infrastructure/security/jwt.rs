// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::config::settings::JwtSettings;
use crate::domain::authentication::ports::{Claims, TokenError, TokenKind, TokenPair, TokenService};
use crate::domain::user::entities::User;

type HmacSha256 = Hmac<Sha256>;

#[derive(Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// HS256 JWT 令牌服务
///
/// 令牌格式为 `base64url(header).base64url(claims).base64url(signature)`，
/// 签名为 HMAC-SHA256
pub struct JwtTokenService {
    secret: Vec<u8>,
    access_lifetime: i64,
    refresh_lifetime: i64,
}

impl JwtTokenService {
    /// 创建令牌服务
    ///
    /// # 参数
    ///
    /// * `secret` - 签名密钥
    /// * `access_lifetime` - 访问令牌有效期（秒）
    /// * `refresh_lifetime` - 刷新令牌有效期（秒）
    pub fn new(secret: &str, access_lifetime: u64, refresh_lifetime: u64) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            access_lifetime: access_lifetime as i64,
            refresh_lifetime: refresh_lifetime as i64,
        }
    }

    pub fn from_settings(settings: &JwtSettings) -> Self {
        Self::new(
            &settings.secret,
            settings.access_token_lifetime,
            settings.refresh_token_lifetime,
        )
    }

    fn claims(&self, kind: TokenKind, user_id: Uuid) -> Claims {
        let now = Utc::now().timestamp();
        let lifetime = match kind {
            TokenKind::Access => self.access_lifetime,
            TokenKind::Refresh => self.refresh_lifetime,
        };
        Claims {
            token_type: kind,
            user_id,
            jti: Uuid::new_v4().simple().to_string(),
            iat: now,
            exp: now + lifetime,
        }
    }

    fn mac(&self) -> Result<HmacSha256, TokenError> {
        HmacSha256::new_from_slice(&self.secret).map_err(|e| TokenError::Encoding(e.to_string()))
    }

    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        };
        let header = serde_json::to_vec(&header).map_err(|e| TokenError::Encoding(e.to_string()))?;
        let payload = serde_json::to_vec(claims).map_err(|e| TokenError::Encoding(e.to_string()))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload)
        );
        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", signing_input, signature))
    }
}

impl TokenService for JwtTokenService {
    fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError> {
        let refresh_claims = self.claims(TokenKind::Refresh, user.id);
        let access_claims = self.claims(TokenKind::Access, user.id);

        Ok(TokenPair {
            access: self.encode(&access_claims)?,
            refresh: self.encode(&refresh_claims)?,
            refresh_claims,
        })
    }

    fn issue_access(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.encode(&self.claims(TokenKind::Access, user_id))
    }

    fn decode(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed);
        };

        let header: Header = URL_SAFE_NO_PAD
            .decode(header_b64)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Malformed)?;
        if header.alg != "HS256" {
            return Err(TokenError::Malformed);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| TokenError::Malformed)?;
        let mut mac = self.mac()?;
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        let claims: Claims = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Malformed)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
        if claims.token_type != expected {
            return Err(TokenError::WrongType { expected });
        }

        Ok(claims)
    }
}
