// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, OriginalUri, Path, Query},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::settings::Settings;
use crate::infrastructure::container::ServiceContainer;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::AuthenticatedUser;
use crate::presentation::pagination::{
    request_url, LimitOffsetPagination, PaginatedResponse, PaginationQuery,
};

/// 分页列出用户
pub async fn list_users(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Extension(settings): Extension<Arc<Settings>>,
    _current: AuthenticatedUser,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (limit, offset) = LimitOffsetPagination::from_settings(&settings.pagination).resolve(&query);
    let page = container.list_users_use_case().execute(limit, offset).await?;
    let url = request_url(&headers, &uri);

    Ok(Json(PaginatedResponse::from_page(page, url.as_ref())))
}

/// 激活用户
pub async fn activate_user(
    Extension(container): Extension<Arc<ServiceContainer>>,
    current: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = container
        .set_user_active_use_case()
        .execute(current.user.id, user_id, true)
        .await?;
    Ok(Json(user))
}

/// 停用用户
pub async fn deactivate_user(
    Extension(container): Extension<Arc<ServiceContainer>>,
    current: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = container
        .set_user_active_use_case()
        .execute(current.user.id, user_id, false)
        .await?;
    Ok(Json(user))
}
