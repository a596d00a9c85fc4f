// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

use crate::domain::shared::errors::DomainError;
use crate::domain::user::entities::User;

/// 常见弱密码
const COMMON_PASSWORDS: &[&str] = &[
    "123456", "password", "12345678", "qwerty", "123456789", "12345", "1234", "111111",
    "1234567", "dragon", "123123", "baseball", "abc123", "football", "monkey", "letmein",
    "696969", "shadow", "master", "666666", "qwertyuiop", "123321", "mustang", "1234567890",
    "michael", "654321", "superman", "1qaz2wsx", "7777777", "121212", "000000", "qazwsx",
    "123qwe", "killer", "trustno1", "jordan", "jennifer", "zxcvbnm", "asdfgh", "hunter",
    "buster", "soccer", "harley", "batman", "andrew", "tigger", "sunshine", "iloveyou",
    "2000", "charlie", "robert", "thomas", "hockey", "ranger", "daniel", "starwars", "klaster",
    "112233", "george", "computer", "michelle", "jessica", "pepper", "1111", "zxcvbn",
    "555555", "11111111", "131313", "freedom", "777777", "pass", "maggie", "159753",
    "aaaaaa", "ginger", "princess", "joshua", "cheese", "amanda", "summer", "love", "ashley",
    "nicole", "chelsea", "biteme", "matthew", "access", "yankees", "987654321", "dallas",
    "austin", "thunder", "taylor", "matrix", "passw0rd", "password1", "password123",
    "welcome", "admin", "administrator", "changeme", "qwerty123", "letmein123", "abcdef",
    "abcd1234", "iloveyou1", "football1", "secret", "login", "whatever", "trustme",
];

/// 密码强度策略
///
/// 依次检查长度、纯数字、常见密码和与用户属性的相似度，所有问题一起返回
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// 校验新密码
    ///
    /// 失败时返回 `InvalidValue`，`details.password` 为全部违规信息
    pub fn validate(&self, password: &str, user: &User) -> Result<(), DomainError> {
        let violations = self.violations(password, user);
        if violations.is_empty() {
            return Ok(());
        }

        let message = violations.join(" ");
        let messages: Vec<Value> = violations.into_iter().map(Value::from).collect();
        Err(DomainError::invalid_value(message).with_detail("password", messages))
    }

    fn violations(&self, password: &str, user: &User) -> Vec<String> {
        let mut violations = Vec::new();

        if let Some(attribute) = similar_attribute(password, user) {
            violations.push(format!("The password is too similar to the {attribute}."));
        }

        if password.chars().count() < self.min_length {
            violations.push(format!(
                "This password is too short. It must contain at least {} characters.",
                self.min_length
            ));
        }

        let lowered = password.trim().to_lowercase();
        if COMMON_PASSWORDS.contains(&lowered.as_str()) {
            violations.push("This password is too common.".to_string());
        }

        if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
            violations.push("This password is entirely numeric.".to_string());
        }

        violations
    }
}

fn similar_attribute(password: &str, user: &User) -> Option<&'static str> {
    let password = password.to_lowercase();
    if password.is_empty() {
        return None;
    }

    let local_part = user.email.split('@').next().unwrap_or_default().to_lowercase();
    let candidates = [
        ("username", user.username.to_lowercase()),
        ("email address", local_part),
        ("first name", user.first_name.clone().unwrap_or_default().to_lowercase()),
        ("last name", user.last_name.clone().unwrap_or_default().to_lowercase()),
    ];

    candidates
        .into_iter()
        .filter(|(_, value)| value.chars().count() >= 3)
        .find(|(_, value)| password == *value || password.contains(value.as_str()))
        .map(|(attribute, _)| attribute)
}
