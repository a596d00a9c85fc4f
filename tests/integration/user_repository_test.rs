// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{test_db, test_settings};
use chrono::{Duration, Utc};
use warden::domain::authentication::entities::{AuthenticationToken, Session};
use warden::domain::authentication::repositories::{SessionRepository, TokenRepository};
use warden::domain::shared::repositories::{Repository, RepositoryError};
use warden::domain::user::entities::User;
use warden::domain::user::repositories::UserRepository;
use warden::infrastructure::repositories::{
    SeaOrmSessionRepository, SeaOrmTokenRepository, SeaOrmUserRepository,
};

fn user(username: &str) -> User {
    let mut user = User::new(username, &format!("{}@example.com", username)).unwrap();
    user.set_password_hash("pbkdf2_sha256$1000$salt$hash".to_string());
    user
}

#[tokio::test]
async fn save_and_lookup_user() {
    let db = test_db(&test_settings()).await;
    let repo = SeaOrmUserRepository::new(db);

    let saved = repo.save(&user("ada")).await.unwrap();

    let by_id = repo.get_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "ada");
    assert_eq!(
        by_id.password_hash.as_deref(),
        Some("pbkdf2_sha256$1000$salt$hash")
    );

    let by_email = repo.get_by_email("ADA@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(saved.id));
    assert!(repo.exists_by_username("ada").await.unwrap());
    assert!(!repo.exists_by_username("bob").await.unwrap());
}

#[tokio::test]
async fn save_updates_existing_user() {
    let db = test_db(&test_settings()).await;
    let repo = SeaOrmUserRepository::new(db);
    let mut ada = repo.save(&user("ada")).await.unwrap();

    ada.set_first_name("Ada".to_string());
    ada.deactivate();
    repo.save(&ada).await.unwrap();

    let reloaded = repo.get_by_id(ada.id).await.unwrap().unwrap();
    assert_eq!(reloaded.first_name.as_deref(), Some("Ada"));
    assert!(!reloaded.is_active);
    assert_eq!(repo.count().await.unwrap(), 1);
    assert!(repo.get_active_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let db = test_db(&test_settings()).await;
    let repo = SeaOrmUserRepository::new(db);
    repo.save(&user("ada")).await.unwrap();

    let mut clash = user("ada");
    clash.email = "someone@example.com".to_string();
    let err = repo.save(&clash).await.unwrap_err();

    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[tokio::test]
async fn page_is_ordered_by_creation() {
    let db = test_db(&test_settings()).await;
    let repo = SeaOrmUserRepository::new(db);
    for name in ["ada", "bob", "cyd"] {
        repo.save(&user(name)).await.unwrap();
    }

    let page = repo.get_page(2, 1).await.unwrap();
    let names: Vec<_> = page.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["bob", "cyd"]);
}

#[tokio::test]
async fn delete_user_removes_row() {
    let db = test_db(&test_settings()).await;
    let users = SeaOrmUserRepository::new(db);
    let ada = users.save(&user("ada")).await.unwrap();

    users.delete(&ada).await.unwrap();

    assert!(users.get_by_id(ada.id).await.unwrap().is_none());
    assert!(matches!(
        users.delete(&ada).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn session_lifecycle() {
    let db = test_db(&test_settings()).await;
    let users = SeaOrmUserRepository::new(db.clone());
    let sessions = SeaOrmSessionRepository::new(db);
    let ada = users.save(&user("ada")).await.unwrap();

    let live = Session::new(ada.id, Session::generate_key(), None);
    let stale = Session::new(
        ada.id,
        Session::generate_key(),
        Some(Utc::now() - Duration::hours(1)),
    );
    sessions.save(&live).await.unwrap();
    sessions.save(&stale).await.unwrap();

    assert_eq!(sessions.delete_expired().await.unwrap(), 1);
    assert!(sessions.get_by_key(&stale.session_key).await.unwrap().is_none());

    assert!(sessions.deactivate(&live.session_key).await.unwrap());
    let stored = sessions.get_by_key(&live.session_key).await.unwrap().unwrap();
    assert!(!stored.is_valid());
    assert!(!sessions.deactivate("missing").await.unwrap());
}

#[tokio::test]
async fn token_revocation() {
    let db = test_db(&test_settings()).await;
    let users = SeaOrmUserRepository::new(db.clone());
    let tokens = SeaOrmTokenRepository::new(db);
    let ada = users.save(&user("ada")).await.unwrap();

    let token = AuthenticationToken::new(ada.id, "jti-1".to_string(), None);
    tokens.save(&token).await.unwrap();

    let stored = tokens.get_by_token("jti-1").await.unwrap().unwrap();
    assert!(stored.is_valid());

    assert!(tokens.revoke("jti-1").await.unwrap());
    let stored = tokens.get_by_token("jti-1").await.unwrap().unwrap();
    assert!(!stored.is_valid());
}

#[tokio::test]
async fn token_purge_removes_expired_and_revoked() {
    let db = test_db(&test_settings()).await;
    let users = SeaOrmUserRepository::new(db.clone());
    let tokens = SeaOrmTokenRepository::new(db);
    let ada = users.save(&user("ada")).await.unwrap();

    let expired = AuthenticationToken::new(
        ada.id,
        "old".to_string(),
        Some(Utc::now() - Duration::hours(1)),
    );
    let revoked = AuthenticationToken::new(ada.id, "revoked".to_string(), None);
    let live = AuthenticationToken::new(
        ada.id,
        "live".to_string(),
        Some(Utc::now() + Duration::hours(1)),
    );
    for token in [&expired, &revoked, &live] {
        tokens.save(token).await.unwrap();
    }
    tokens.revoke("revoked").await.unwrap();

    assert_eq!(tokens.delete_expired().await.unwrap(), 2);
    assert!(tokens.get_by_token("old").await.unwrap().is_none());
    assert!(tokens.get_by_token("revoked").await.unwrap().is_none());
    assert!(tokens.get_by_token("live").await.unwrap().is_some());
}
