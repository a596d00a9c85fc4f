// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use warden::config::settings::Settings;
use warden::infrastructure::container::ServiceContainer;
use warden::infrastructure::database::connection;
use warden::presentation::routes;
use warden::utils::telemetry;

use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Arc::new(Settings::new()?);

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.log);
    info!("Starting warden...");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Wire services
    let container = Arc::new(ServiceContainer::new(db, &settings));

    // 5. Start background workers
    let cleanup_interval = Duration::from_secs(settings.session.cleanup_interval.max(1));
    container.expiration_worker(cleanup_interval).start();
    info!("Expiration worker scheduled every {:?}", cleanup_interval);

    // 6. Start HTTP server
    let app = routes::app(container, settings.clone()).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
