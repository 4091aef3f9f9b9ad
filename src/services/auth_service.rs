use crate::models::user::User;
use crate::repositories::{RepositoryError, UserRepository};
use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Verifies credentials and records the login time. Unknown username
    /// and wrong password both come back as `InvalidCredentials` so the
    /// response cannot be used to enumerate accounts.
    pub async fn authenticate(&self, request: LoginRequest) -> Result<User, AuthServiceError> {
        if request.username.is_empty() {
            return Err(AuthServiceError::InvalidInput("username must not be empty"));
        }
        if request.password.is_empty() {
            return Err(AuthServiceError::InvalidInput("password must not be empty"));
        }

        let user = self
            .user_repository
            .find_by_username(&request.username)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !self.verify_password(&request.password, &user.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let now = super::now_timestamp();
        match self
            .user_repository
            .touch_last_login(&user.username, &now)
            .await
        {
            // The row existed a moment ago; treat a vanished row as a
            // failed login rather than a storage fault.
            Err(RepositoryError::NotFound) => return Err(AuthServiceError::InvalidCredentials),
            other => other?,
        }

        Ok(User {
            last_login: Some(now),
            ..user
        })
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        if let Ok(parsed_hash) = PasswordHash::new(password_hash) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .with(eq("ghost"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = AuthService::new(Arc::new(mock_repo));

        let request = LoginRequest {
            username: "ghost".to_string(),
            password: "secret1".to_string(),
        };

        let result = service.authenticate(request).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_empty_password() {
        let mock_repo = MockUserRepository::new();
        let service = AuthService::new(Arc::new(mock_repo));

        let request = LoginRequest {
            username: "alice".to_string(),
            password: "".to_string(),
        };

        let result = service.authenticate(request).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidInput(_))));
    }
}
