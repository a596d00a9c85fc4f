// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::application::errors::ApplicationError;
use crate::presentation::errors::AppError;

/// 反序列化并校验的 JSON 请求体
///
/// 格式错误和校验失败都返回 400
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApplicationError::validation("Validation error")
                .with_extra("fields", json!({ "non_field_errors": [rejection.body_text()] }))
        })?;
        value.validate()?;
        Ok(Self(value))
    }
}
