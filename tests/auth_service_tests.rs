use newspulse::{
    repositories::SqliteUserRepository,
    services::auth_service::{AuthService, AuthServiceError, LoginRequest},
    services::user_service::{CreateUserRequest, UserService},
    test_utils::test_helpers,
};
use std::sync::Arc;

async fn setup() -> (UserService, AuthService, sqlx::SqlitePool) {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    (
        UserService::new(repository.clone()),
        AuthService::new(repository),
        pool,
    )
}

fn login(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_then_authenticate() {
    let (users, auth, _pool) = setup().await;

    users
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
            password_confirm: None,
            email: None,
        })
        .await
        .unwrap();

    let user = auth.authenticate(login("alice", "secret1")).await.unwrap();
    assert_eq!(user.username, "alice");

    let result = auth.authenticate(login("alice", "wrong")).await;
    assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
    let (_users, auth, pool) = setup().await;

    test_helpers::insert_test_user(&pool, "bob", "secret1", None)
        .await
        .unwrap();

    let unknown = auth.authenticate(login("ghost", "secret1")).await;
    let wrong = auth.authenticate(login("bob", "nope123")).await;

    let unknown_msg = unknown.unwrap_err().to_string();
    let wrong_msg = wrong.unwrap_err().to_string();
    assert_eq!(unknown_msg, wrong_msg);
}

#[tokio::test]
async fn test_successful_login_updates_last_login() {
    let (users, auth, _pool) = setup().await;

    let registered = users
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
            password_confirm: None,
            email: None,
        })
        .await
        .unwrap();
    assert!(registered.last_login.is_none());

    let authenticated = auth.authenticate(login("alice", "secret1")).await.unwrap();
    assert!(authenticated.last_login.is_some());

    // The update is persisted, not just echoed back.
    let stored = users.find_by_username("alice").await.unwrap().unwrap();
    assert!(stored.last_login.is_some());
}

#[tokio::test]
async fn test_failed_login_does_not_touch_last_login() {
    let (users, auth, _pool) = setup().await;

    users
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
            password_confirm: None,
            email: None,
        })
        .await
        .unwrap();

    let _ = auth.authenticate(login("alice", "wrong")).await;

    let stored = users.find_by_username("alice").await.unwrap().unwrap();
    assert!(stored.last_login.is_none());
}
