use newspulse::{
    repositories::SqliteUserRepository,
    services::user_service::{CreateUserRequest, UserService, UserServiceError},
    test_utils::test_helpers,
};
use std::sync::Arc;

fn request(username: &str, password: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: password.to_string(),
        password_confirm: None,
        email: None,
    }
}

#[tokio::test]
async fn test_create_user_success() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = UserService::new(Arc::new(SqliteUserRepository::new(pool)));

    let user = service
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
            password_confirm: Some("secret1".to_string()),
            email: Some("alice@example.com".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert!(user.last_login.is_none());
    assert!(!user.created_at.is_empty());
    // The credential is stored hashed, never in plaintext.
    assert_ne!(user.password_hash, "secret1");
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_duplicate_username_rejected_and_credential_unchanged() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = UserService::new(Arc::new(SqliteUserRepository::new(pool)));

    service.create_user(request("alice", "secret1")).await.unwrap();

    let result = service.create_user(request("alice", "other999")).await;
    assert!(matches!(result, Err(UserServiceError::UsernameTaken)));

    // First registration's credential survives the rejected attempt.
    let stored = service.find_by_username("alice").await.unwrap().unwrap();
    assert!(service.verify_password("secret1", &stored.password_hash));
    assert!(!service.verify_password("other999", &stored.password_hash));
}

#[tokio::test]
async fn test_username_is_case_sensitive() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = UserService::new(Arc::new(SqliteUserRepository::new(pool)));

    service.create_user(request("alice", "secret1")).await.unwrap();
    service.create_user(request("Alice", "secret2")).await.unwrap();

    assert!(service.find_by_username("alice").await.unwrap().is_some());
    assert!(service.find_by_username("Alice").await.unwrap().is_some());
    assert!(service.find_by_username("ALICE").await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_inputs_rejected_before_hashing() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = UserService::new(Arc::new(SqliteUserRepository::new(pool)));

    let result = service.create_user(request("", "secret1")).await;
    assert!(matches!(result, Err(UserServiceError::InvalidInput(_))));

    let result = service.create_user(request("alice", "")).await;
    assert!(matches!(result, Err(UserServiceError::InvalidInput(_))));
}

#[tokio::test]
async fn test_short_password_rejected() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = UserService::new(Arc::new(SqliteUserRepository::new(pool)));

    let result = service.create_user(request("alice", "abc12")).await;
    assert!(matches!(result, Err(UserServiceError::WeakPassword)));
}

#[tokio::test]
async fn test_list_users() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = UserService::new(Arc::new(SqliteUserRepository::new(pool)));

    for i in 0..5 {
        service
            .create_user(request(&format!("user{}", i), "secret1"))
            .await
            .unwrap();
    }

    let users = service.list_users(None, None).await.unwrap();
    assert_eq!(users.len(), 5);

    let limited = service.list_users(Some(3), None).await.unwrap();
    assert_eq!(limited.len(), 3);

    let offset = service.list_users(Some(10), Some(2)).await.unwrap();
    assert_eq!(offset.len(), 3);
}
