// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Duration;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::application::use_cases::authentication::{
    AuthenticateUserJwtUseCase, AuthenticateUserUseCase, LogoutUseCase, RefreshTokenUseCase,
    ResolveCurrentUserUseCase,
};
use crate::application::use_cases::user::{
    ChangePasswordUseCase, CreateUserUseCase, GetUserUseCase, ListUsersUseCase,
    SetUserActiveUseCase, UpdateUserUseCase,
};
use crate::config::settings::Settings;
use crate::domain::authentication::password_policy::PasswordPolicy;
use crate::domain::authentication::ports::{PasswordHasher, TokenService};
use crate::domain::authentication::repositories::{SessionRepository, TokenRepository};
use crate::domain::authentication::services::AuthenticationDomainService;
use crate::domain::shared::events::DomainEventPublisher;
use crate::domain::user::repositories::UserRepository;
use crate::domain::user::services::UserDomainService;
use crate::infrastructure::events::handlers::register_default_handlers;
use crate::infrastructure::events::publisher::InMemoryEventPublisher;
use crate::infrastructure::repositories::{
    InMemorySessionRepository, InMemoryTokenRepository, InMemoryUserRepository,
    SeaOrmSessionRepository, SeaOrmTokenRepository, SeaOrmUserRepository,
};
use crate::infrastructure::security::jwt::JwtTokenService;
use crate::infrastructure::security::password_hasher::Pbkdf2PasswordHasher;
use crate::workers::ExpirationWorker;

/// 服务容器
///
/// 在启动时装配仓库、事件发布者、领域服务和全部用例，
/// 表示层通过它获取用例实例
pub struct ServiceContainer {
    user_repository: Arc<dyn UserRepository>,
    session_repository: Arc<dyn SessionRepository>,
    token_repository: Arc<dyn TokenRepository>,
    event_publisher: Arc<InMemoryEventPublisher>,

    create_user: Arc<CreateUserUseCase>,
    update_user: Arc<UpdateUserUseCase>,
    get_user: Arc<GetUserUseCase>,
    list_users: Arc<ListUsersUseCase>,
    change_password: Arc<ChangePasswordUseCase>,
    set_user_active: Arc<SetUserActiveUseCase>,
    authenticate_user: Arc<AuthenticateUserUseCase>,
    authenticate_user_jwt: Arc<AuthenticateUserJwtUseCase>,
    refresh_token: Arc<RefreshTokenUseCase>,
    logout: Arc<LogoutUseCase>,
    resolve_current_user: Arc<ResolveCurrentUserUseCase>,
}

impl ServiceContainer {
    /// 使用数据库仓库装配
    pub fn new(db: Arc<DatabaseConnection>, settings: &Settings) -> Self {
        Self::build(
            Arc::new(SeaOrmUserRepository::new(db.clone())),
            Arc::new(SeaOrmSessionRepository::new(db.clone())),
            Arc::new(SeaOrmTokenRepository::new(db)),
            settings,
        )
    }

    /// 使用内存仓库装配
    pub fn in_memory(settings: &Settings) -> Self {
        Self::build(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(InMemoryTokenRepository::new()),
            settings,
        )
    }

    fn build(
        user_repository: Arc<dyn UserRepository>,
        session_repository: Arc<dyn SessionRepository>,
        token_repository: Arc<dyn TokenRepository>,
        settings: &Settings,
    ) -> Self {
        let event_publisher = Arc::new(InMemoryEventPublisher::new());
        register_default_handlers(&event_publisher);
        let publisher: Option<Arc<dyn DomainEventPublisher>> = Some(event_publisher.clone());

        let password_hasher: Arc<dyn PasswordHasher> =
            Arc::new(Pbkdf2PasswordHasher::new(settings.password.iterations));
        let token_service: Arc<dyn TokenService> =
            Arc::new(JwtTokenService::from_settings(&settings.jwt));
        let password_policy = PasswordPolicy::new(settings.password.min_length);
        let session_lifetime =
            (settings.session.lifetime > 0).then(|| Duration::seconds(settings.session.lifetime as i64));

        let user_domain_service = Arc::new(UserDomainService::new(user_repository.clone()));
        let auth_domain_service = Arc::new(AuthenticationDomainService::new(
            user_repository.clone(),
            password_hasher.clone(),
        ));

        Self {
            create_user: Arc::new(CreateUserUseCase::new(
                user_repository.clone(),
                user_domain_service.clone(),
                password_hasher.clone(),
                publisher.clone(),
            )),
            update_user: Arc::new(UpdateUserUseCase::new(
                user_repository.clone(),
                user_domain_service,
                publisher.clone(),
            )),
            get_user: Arc::new(GetUserUseCase::new(user_repository.clone())),
            list_users: Arc::new(ListUsersUseCase::new(user_repository.clone())),
            change_password: Arc::new(ChangePasswordUseCase::new(
                user_repository.clone(),
                auth_domain_service.clone(),
                password_hasher.clone(),
                password_policy,
                publisher.clone(),
            )),
            set_user_active: Arc::new(SetUserActiveUseCase::new(
                user_repository.clone(),
                publisher,
            )),
            authenticate_user: Arc::new(AuthenticateUserUseCase::new(
                user_repository.clone(),
                session_repository.clone(),
                auth_domain_service.clone(),
                session_lifetime,
            )),
            authenticate_user_jwt: Arc::new(AuthenticateUserJwtUseCase::new(
                user_repository.clone(),
                token_repository.clone(),
                auth_domain_service.clone(),
                token_service.clone(),
            )),
            refresh_token: Arc::new(RefreshTokenUseCase::new(
                user_repository.clone(),
                token_repository.clone(),
                auth_domain_service.clone(),
                token_service.clone(),
            )),
            logout: Arc::new(LogoutUseCase::new(
                session_repository.clone(),
                token_repository.clone(),
                token_service.clone(),
            )),
            resolve_current_user: Arc::new(ResolveCurrentUserUseCase::new(
                user_repository.clone(),
                session_repository.clone(),
                auth_domain_service,
                token_service,
            )),
            user_repository,
            session_repository,
            token_repository,
            event_publisher,
        }
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    /// 基于当前仓库创建凭据过期清理工作器
    pub fn expiration_worker(&self, interval: std::time::Duration) -> ExpirationWorker {
        ExpirationWorker::new(self.session_repository.clone(), self.token_repository.clone())
            .with_interval(interval)
    }

    pub fn event_publisher(&self) -> Arc<InMemoryEventPublisher> {
        self.event_publisher.clone()
    }

    pub fn create_user_use_case(&self) -> Arc<CreateUserUseCase> {
        self.create_user.clone()
    }

    pub fn update_user_use_case(&self) -> Arc<UpdateUserUseCase> {
        self.update_user.clone()
    }

    pub fn get_user_use_case(&self) -> Arc<GetUserUseCase> {
        self.get_user.clone()
    }

    pub fn list_users_use_case(&self) -> Arc<ListUsersUseCase> {
        self.list_users.clone()
    }

    pub fn change_password_use_case(&self) -> Arc<ChangePasswordUseCase> {
        self.change_password.clone()
    }

    pub fn set_user_active_use_case(&self) -> Arc<SetUserActiveUseCase> {
        self.set_user_active.clone()
    }

    pub fn authenticate_user_use_case(&self) -> Arc<AuthenticateUserUseCase> {
        self.authenticate_user.clone()
    }

    pub fn authenticate_user_jwt_use_case(&self) -> Arc<AuthenticateUserJwtUseCase> {
        self.authenticate_user_jwt.clone()
    }

    pub fn refresh_token_use_case(&self) -> Arc<RefreshTokenUseCase> {
        self.refresh_token.clone()
    }

    pub fn logout_use_case(&self) -> Arc<LogoutUseCase> {
        self.logout.clone()
    }

    pub fn resolve_current_user_use_case(&self) -> Arc<ResolveCurrentUserUseCase> {
        self.resolve_current_user.clone()
    }
}
