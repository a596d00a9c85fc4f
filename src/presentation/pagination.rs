// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::{header, HeaderMap, Uri};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::application::dto::Page;
use crate::config::settings::PaginationSettings;

/// 分页查询参数
///
/// 以字符串接收，无法解析的值回退到默认值而不是拒绝请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// limit/offset 分页
#[derive(Debug, Clone, Copy)]
pub struct LimitOffsetPagination {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl LimitOffsetPagination {
    pub fn from_settings(settings: &PaginationSettings) -> Self {
        Self {
            default_limit: settings.default_limit,
            max_limit: settings.max_limit,
        }
    }

    /// 解析查询参数，返回 `(limit, offset)`
    pub fn resolve(&self, query: &PaginationQuery) -> (u64, u64) {
        let limit = query
            .limit
            .as_deref()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|value| *value > 0)
            .map(|value| (value as u64).min(self.max_limit))
            .unwrap_or(self.default_limit);
        let offset = query
            .offset
            .as_deref()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|value| *value >= 0)
            .map(|value| value as u64)
            .unwrap_or(0);
        (limit, offset)
    }
}

/// 分页响应体
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub limit: u64,
    pub offset: u64,
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// 根据当前请求地址生成上一页和下一页链接
    pub fn from_page(page: Page<T>, request_url: Option<&Url>) -> Self {
        let next = request_url.and_then(|url| next_link(url, page.limit, page.offset, page.count));
        let previous = request_url.and_then(|url| previous_link(url, page.limit, page.offset));
        Self {
            limit: page.limit,
            offset: page.offset,
            count: page.count,
            next,
            previous,
            results: page.items,
        }
    }
}

/// 从请求头和原始 URI 重建请求的绝对地址
pub fn request_url(headers: &HeaderMap, uri: &Uri) -> Option<Url> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    Url::parse(&format!("{}://{}{}", scheme, host, path_and_query)).ok()
}

fn next_link(url: &Url, limit: u64, offset: u64, count: u64) -> Option<String> {
    if offset + limit >= count {
        return None;
    }
    let next_offset = (offset + limit).to_string();
    let limit = limit.to_string();
    Some(with_params(url, &[("limit", Some(&limit)), ("offset", Some(&next_offset))]))
}

fn previous_link(url: &Url, limit: u64, offset: u64) -> Option<String> {
    if offset == 0 {
        return None;
    }
    let limit_value = limit.to_string();
    if offset <= limit {
        return Some(with_params(url, &[("limit", Some(&limit_value)), ("offset", None)]));
    }
    let previous_offset = (offset - limit).to_string();
    Some(with_params(
        url,
        &[("limit", Some(&limit_value)), ("offset", Some(&previous_offset))],
    ))
}

/// 替换或移除查询参数，结果按参数名排序
fn with_params(url: &Url, params: &[(&str, Option<&str>)]) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|(name, _)| name == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    for (name, value) in params {
        if let Some(value) = value {
            pairs.push((name.to_string(), value.to_string()));
        }
    }
    pairs.sort();

    let mut url = url.clone();
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    url.to_string()
}
