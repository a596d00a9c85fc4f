// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::LogSettings;

const DEFAULT_FILTER: &str = "info,warden=debug,tower_http=debug";

/// 初始化日志订阅器
///
/// `RUST_LOG` 优先于默认过滤规则，`log.format = "json"` 时输出结构化日志
pub fn init_telemetry(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (json_layer, text_layer) = if settings.is_json() {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
