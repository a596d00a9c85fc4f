// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 用例单元测试共用的内存装配

use chrono::Duration;
use std::sync::Arc;

use super::authentication::{
    AuthenticateUserJwtUseCase, AuthenticateUserUseCase, LogoutUseCase, RefreshTokenUseCase,
    ResolveCurrentUserUseCase,
};
use super::user::{ChangePasswordUseCase, CreateUserUseCase, SetUserActiveUseCase, UpdateUserUseCase};
use crate::domain::authentication::password_policy::PasswordPolicy;
use crate::domain::authentication::ports::{PasswordHasher, TokenService};
use crate::domain::authentication::services::AuthenticationDomainService;
use crate::domain::shared::events::DomainEventPublisher;
use crate::domain::shared::repositories::Repository;
use crate::domain::user::entities::User;
use crate::domain::user::repositories::UserRepository;
use crate::domain::user::services::UserDomainService;
use crate::infrastructure::events::publisher::InMemoryEventPublisher;
use crate::infrastructure::repositories::memory::{
    InMemorySessionRepository, InMemoryTokenRepository, InMemoryUserRepository,
};
use crate::infrastructure::security::jwt::JwtTokenService;
use crate::infrastructure::security::password_hasher::Pbkdf2PasswordHasher;

pub(crate) struct Fixture {
    pub users: Arc<InMemoryUserRepository>,
    pub sessions: Arc<InMemorySessionRepository>,
    pub tokens: Arc<InMemoryTokenRepository>,
    pub hasher: Arc<Pbkdf2PasswordHasher>,
    pub token_service: Arc<JwtTokenService>,
    pub publisher: Arc<InMemoryEventPublisher>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            sessions: Arc::new(InMemorySessionRepository::new()),
            tokens: Arc::new(InMemoryTokenRepository::new()),
            hasher: Arc::new(Pbkdf2PasswordHasher::new(1_000)),
            token_service: Arc::new(JwtTokenService::new("test-secret", 300, 3_600)),
            publisher: Arc::new(InMemoryEventPublisher::new()),
        }
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn publisher(&self) -> Option<Arc<dyn DomainEventPublisher>> {
        Some(self.publisher.clone())
    }

    fn user_domain_service(&self) -> Arc<UserDomainService> {
        Arc::new(UserDomainService::new(self.user_repository()))
    }

    fn auth_domain_service(&self) -> Arc<AuthenticationDomainService> {
        Arc::new(AuthenticationDomainService::new(
            self.user_repository(),
            self.hasher.clone(),
        ))
    }

    fn token_service(&self) -> Arc<dyn TokenService> {
        self.token_service.clone()
    }

    pub fn create_user(&self) -> CreateUserUseCase {
        CreateUserUseCase::new(
            self.user_repository(),
            self.user_domain_service(),
            self.hasher.clone(),
            self.publisher(),
        )
    }

    pub fn update_user(&self) -> UpdateUserUseCase {
        UpdateUserUseCase::new(
            self.user_repository(),
            self.user_domain_service(),
            self.publisher(),
        )
    }

    pub fn change_password(&self) -> ChangePasswordUseCase {
        ChangePasswordUseCase::new(
            self.user_repository(),
            self.auth_domain_service(),
            self.hasher.clone(),
            PasswordPolicy::default(),
            self.publisher(),
        )
    }

    pub fn set_user_active(&self) -> SetUserActiveUseCase {
        SetUserActiveUseCase::new(self.user_repository(), self.publisher())
    }

    pub fn authenticate_user(&self) -> AuthenticateUserUseCase {
        AuthenticateUserUseCase::new(
            self.user_repository(),
            self.sessions.clone(),
            self.auth_domain_service(),
            Some(Duration::hours(1)),
        )
    }

    pub fn authenticate_user_jwt(&self) -> AuthenticateUserJwtUseCase {
        AuthenticateUserJwtUseCase::new(
            self.user_repository(),
            self.tokens.clone(),
            self.auth_domain_service(),
            self.token_service(),
        )
    }

    pub fn refresh_token(&self) -> RefreshTokenUseCase {
        RefreshTokenUseCase::new(
            self.user_repository(),
            self.tokens.clone(),
            self.auth_domain_service(),
            self.token_service(),
        )
    }

    pub fn logout(&self) -> LogoutUseCase {
        LogoutUseCase::new(self.sessions.clone(), self.tokens.clone(), self.token_service())
    }

    pub fn resolve_current_user(&self) -> ResolveCurrentUserUseCase {
        ResolveCurrentUserUseCase::new(
            self.user_repository(),
            self.sessions.clone(),
            self.auth_domain_service(),
            self.token_service(),
        )
    }

    /// 保存一个邮箱为 `<username>@example.com` 的普通用户
    pub async fn seed_user(&self, username: &str, password: &str) -> User {
        let mut user = User::new(username, &format!("{username}@example.com")).unwrap();
        user.set_password_hash(self.hasher.hash(password));
        self.users.save(&user).await.unwrap()
    }

    pub async fn seed_staff(&self, username: &str) -> User {
        let mut user = User::new(username, &format!("{username}@example.com")).unwrap();
        user.is_staff = true;
        self.users.save(&user).await.unwrap()
    }

    /// 返回 (access, refresh)
    pub async fn jwt_login(&self, username: &str, password: &str) -> (String, String) {
        let result = self
            .authenticate_user_jwt()
            .execute(username, password)
            .await
            .unwrap()
            .unwrap();
        (result.access_token.unwrap(), result.refresh_token.unwrap())
    }
}
