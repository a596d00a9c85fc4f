// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};
use thiserror::Error;

use super::repositories::RepositoryError;

/// 错误附加信息
pub type Details = Map<String, Value>;

/// 重复数据的错误代码，写入 `details.code`
pub const CODE_ALREADY_TAKEN: &str = "already_taken";

/// 领域错误类型
///
/// 表示业务规则被违反或值对象校验失败
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 领域实体不存在
    #[error("{message}")]
    EntityNotFound { message: String, details: Details },
    /// 违反业务规则
    #[error("{message}")]
    BusinessRuleViolation { message: String, details: Details },
    /// 值对象校验失败
    #[error("{message}")]
    InvalidValue { message: String, details: Details },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::EntityNotFound {
            message: message.into(),
            details: Details::new(),
        }
    }

    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRuleViolation {
            message: message.into(),
            details: Details::new(),
        }
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            message: message.into(),
            details: Details::new(),
        }
    }

    /// 追加一条附加信息
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        match &mut self {
            Self::EntityNotFound { details, .. }
            | Self::BusinessRuleViolation { details, .. }
            | Self::InvalidValue { details, .. } => {
                details.insert(key.to_string(), value.into());
            }
        }
        self
    }

    pub fn message(&self) -> &str {
        match self {
            Self::EntityNotFound { message, .. }
            | Self::BusinessRuleViolation { message, .. }
            | Self::InvalidValue { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Details {
        match self {
            Self::EntityNotFound { details, .. }
            | Self::BusinessRuleViolation { details, .. }
            | Self::InvalidValue { details, .. } => details,
        }
    }

    /// 是否为唯一性冲突（用户名或邮箱已被占用）
    pub fn is_already_taken(&self) -> bool {
        self.details().get("code").and_then(Value::as_str) == Some(CODE_ALREADY_TAKEN)
    }
}

/// 领域服务错误
///
/// 领域服务既可能违反业务规则，也可能在访问仓库时失败
#[derive(Error, Debug)]
pub enum DomainServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
