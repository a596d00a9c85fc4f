// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{distr::Alphanumeric, Rng};
use sha2::Sha256;

use crate::domain::authentication::ports::PasswordHasher;

const ALGORITHM: &str = "pbkdf2_sha256";
const SALT_LENGTH: usize = 22;
const HASH_LENGTH: usize = 32;

/// PBKDF2-SHA256 密码哈希器
///
/// 编码格式为 `pbkdf2_sha256$<iterations>$<salt>$<base64 hash>`，
/// 与 Django 默认哈希器兼容，迁移过来的密码可以直接校验。
#[derive(Debug, Clone)]
pub struct Pbkdf2PasswordHasher {
    iterations: u32,
}

impl Pbkdf2PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    fn derive(password: &str, salt: &str, iterations: u32) -> [u8; HASH_LENGTH] {
        let mut out = [0u8; HASH_LENGTH];
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut out);
        out
    }
}

struct EncodedParts<'a> {
    iterations: u32,
    salt: &'a str,
    hash: Vec<u8>,
}

fn decode(encoded: &str) -> Option<EncodedParts<'_>> {
    let mut parts = encoded.splitn(4, '$');
    let algorithm = parts.next()?;
    let iterations = parts.next()?.parse().ok()?;
    let salt = parts.next()?;
    let hash = BASE64.decode(parts.next()?).ok()?;

    if algorithm != ALGORITHM || iterations == 0 || salt.is_empty() {
        return None;
    }
    Some(EncodedParts {
        iterations,
        salt,
        hash,
    })
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

impl PasswordHasher for Pbkdf2PasswordHasher {
    fn hash(&self, plain: &str) -> String {
        let salt: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SALT_LENGTH)
            .map(char::from)
            .collect();
        let hash = Self::derive(plain, &salt, self.iterations);
        format!("{}${}${}${}", ALGORITHM, self.iterations, salt, BASE64.encode(hash))
    }

    fn verify(&self, plain: &str, encoded: &str) -> bool {
        match decode(encoded) {
            Some(parts) => {
                let hash = Self::derive(plain, parts.salt, parts.iterations);
                constant_time_eq(&hash, &parts.hash)
            }
            None => false,
        }
    }

    /// 已编码哈希的迭代次数与当前配置不同时需要重新哈希
    fn needs_rehash(&self, encoded: &str) -> bool {
        decode(encoded)
            .map(|parts| parts.iterations != self.iterations)
            .unwrap_or(true)
    }
}
