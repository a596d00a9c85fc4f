// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use tracing::error;
use validator::ValidationErrors;

use crate::application::errors::ApplicationError;
use crate::domain::shared::errors::DomainError;
use crate::domain::shared::repositories::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的错误，统一渲染为 `{"message": ..., "extra": {...}}`
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn parts(&self) -> (StatusCode, String, Map<String, Value>) {
        if let Some(err) = self.0.downcast_ref::<ApplicationError>() {
            let status = match err {
                ApplicationError::Validation { .. } => StatusCode::BAD_REQUEST,
                ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
                ApplicationError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
                ApplicationError::Forbidden { .. } => StatusCode::FORBIDDEN,
                ApplicationError::Conflict { .. } => StatusCode::CONFLICT,
                ApplicationError::Repository(_) | ApplicationError::Internal(_) => {
                    return internal(&self.0);
                }
            };
            return (status, err.to_string(), err.extra());
        }

        if let Some(err) = self.0.downcast_ref::<DomainError>() {
            return (
                StatusCode::BAD_REQUEST,
                err.message().to_string(),
                err.details().clone(),
            );
        }

        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return match err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found.".to_string(), Map::new()),
                RepositoryError::Conflict(_) => (StatusCode::CONFLICT, err.to_string(), Map::new()),
                RepositoryError::Database(_) => internal(&self.0),
            };
        }

        if let Some(err) = self.0.downcast_ref::<ValidationErrors>() {
            let mut extra = Map::new();
            extra.insert("fields".to_string(), field_errors(err));
            return (StatusCode::BAD_REQUEST, "Validation error".to_string(), extra);
        }

        internal(&self.0)
    }
}

fn internal(err: &anyhow::Error) -> (StatusCode, String, Map<String, Value>) {
    error!("Unhandled error: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
        Map::new(),
    )
}

/// 字段名到错误消息列表的映射
fn field_errors(errors: &ValidationErrors) -> Value {
    let fields: Map<String, Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<Value> = errs
                .iter()
                .map(|e| {
                    Value::from(
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string()),
                    )
                })
                .collect();
            (field.to_string(), Value::Array(messages))
        })
        .collect();
    Value::Object(fields)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, extra) = self.parts();
        let body = Json(json!({ "message": message, "extra": extra }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
