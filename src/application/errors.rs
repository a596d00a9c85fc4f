// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use thiserror::Error;

use crate::domain::authentication::ports::TokenError;
use crate::domain::shared::errors::{Details, DomainError, DomainServiceError};
use crate::domain::shared::repositories::RepositoryError;

/// 应用层错误
///
/// 每个变体都带有面向客户端的消息和附加信息 `extra`
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// 输入校验失败
    #[error("{message}")]
    Validation { message: String, extra: Details },
    /// 资源不存在
    #[error("{message}")]
    NotFound { message: String, extra: Details },
    /// 未认证
    #[error("{message}")]
    Unauthorized { message: String, extra: Details },
    /// 无权限
    #[error("{message}")]
    Forbidden { message: String, extra: Details },
    /// 资源冲突
    #[error("{message}")]
    Conflict { message: String, extra: Details },
    /// 仓库错误
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            extra: Details::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            extra: Details::new(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            extra: Details::new(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            extra: Details::new(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            extra: Details::new(),
        }
    }

    /// 追加一条附加信息，对仓库和内部错误无效
    pub fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        if let Some(extra) = self.extra_mut() {
            extra.insert(key.to_string(), value.into());
        }
        self
    }

    /// 面向客户端的附加信息
    pub fn extra(&self) -> Details {
        match self {
            Self::Validation { extra, .. }
            | Self::NotFound { extra, .. }
            | Self::Unauthorized { extra, .. }
            | Self::Forbidden { extra, .. }
            | Self::Conflict { extra, .. } => extra.clone(),
            Self::Repository(_) | Self::Internal(_) => Details::new(),
        }
    }

    fn extra_mut(&mut self) -> Option<&mut Details> {
        match self {
            Self::Validation { extra, .. }
            | Self::NotFound { extra, .. }
            | Self::Unauthorized { extra, .. }
            | Self::Forbidden { extra, .. }
            | Self::Conflict { extra, .. } => Some(extra),
            Self::Repository(_) | Self::Internal(_) => None,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        let conflict = err.is_already_taken();
        match err {
            DomainError::EntityNotFound { message, details } => Self::NotFound {
                message,
                extra: details,
            },
            DomainError::BusinessRuleViolation { message, mut details } if conflict => {
                details.remove("code");
                Self::Conflict {
                    message,
                    extra: details,
                }
            }
            DomainError::BusinessRuleViolation { message, details }
            | DomainError::InvalidValue { message, details } => Self::Validation {
                message,
                extra: details,
            },
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::not_found("Record not found"),
            RepositoryError::Conflict(message) => Self::conflict(message),
            other => Self::Repository(other),
        }
    }
}

impl From<DomainServiceError> for ApplicationError {
    fn from(err: DomainServiceError) -> Self {
        match err {
            DomainServiceError::Domain(e) => e.into(),
            DomainServiceError::Repository(e) => e.into(),
        }
    }
}

impl From<TokenError> for ApplicationError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(message) => Self::Internal(message),
            _ => Self::unauthorized("Token is invalid or expired"),
        }
    }
}
