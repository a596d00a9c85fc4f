// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::HeaderValue;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use warden::config::settings::Settings;
use warden::infrastructure::container::ServiceContainer;
use warden::infrastructure::database::connection;
use warden::presentation::routes;

pub const PASSWORD: &str = "Correct-Horse-42";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub container: Arc<ServiceContainer>,
    pub settings: Arc<Settings>,
}

/// 测试配置：内存 SQLite，降低哈希迭代次数
pub fn test_settings() -> Settings {
    let mut settings = Settings::new().expect("default settings");
    settings.database.url = "sqlite::memory:".to_string();
    settings.database.max_connections = Some(1);
    settings.database.min_connections = Some(1);
    settings.password.iterations = 1_000;
    settings.jwt.secret = "integration-secret".to_string();
    settings.jwt.auth_cookie = Some("jwt-auth".to_string());
    settings
}

pub async fn test_db(settings: &Settings) -> Arc<DatabaseConnection> {
    let db = connection::create_pool(&settings.database)
        .await
        .expect("Failed to connect to sqlite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub async fn create_test_app() -> TestApp {
    let settings = Arc::new(test_settings());
    let db = test_db(&settings).await;
    let container = Arc::new(ServiceContainer::new(db.clone(), &settings));
    let app = routes::app(container.clone(), settings.clone());
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        db,
        container,
        settings,
    }
}

impl TestApp {
    pub async fn register(&self, username: &str) -> Value {
        let response = self
            .server
            .post("/api/auth/register")
            .json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": PASSWORD,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()
    }

    pub async fn jwt_login(&self, username: &str) -> (String, String) {
        let body = self
            .server
            .post("/api/auth/jwt/login")
            .json(&json!({ "username": username, "password": PASSWORD }))
            .await
            .json::<Value>();
        (
            body["access"].as_str().expect("access token").to_string(),
            body["refresh"].as_str().expect("refresh token").to_string(),
        )
    }

    /// 注册用户并授予管理员权限
    pub async fn register_admin(&self, username: &str) {
        self.register(username).await;
        let repo = self.container.user_repository();
        let mut user = repo
            .get_by_username(username)
            .await
            .unwrap()
            .expect("registered user");
        user.promote_to_admin();
        repo.save(&user).await.unwrap();
    }
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

pub fn cookie(name: &str, value: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{}={}", name, value)).unwrap()
}
