use crate::models::user::User;
use crate::repositories::{RepositoryError, UserRepository};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString},
    Argon2, PasswordVerifier,
};
use std::sync::Arc;

/// Store-level minimum password length. Confirmation checks remain the
/// caller's concern unless a confirmation value is supplied.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("Password too weak (minimum {MIN_PASSWORD_LEN} characters)")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub password_confirm: Option<String>,
    pub email: Option<String>,
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new user. Hashes the password with argon2 (salted,
    /// adaptive cost) and inserts the row; the UNIQUE constraint on
    /// username decides duplicates. No session state is established.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserServiceError> {
        if request.username.is_empty() {
            return Err(UserServiceError::InvalidInput("username must not be empty"));
        }
        if request.password.is_empty() {
            return Err(UserServiceError::InvalidInput("password must not be empty"));
        }
        if request.password.len() < MIN_PASSWORD_LEN {
            return Err(UserServiceError::WeakPassword);
        }
        if let Some(ref confirm) = request.password_confirm {
            if request.password != *confirm {
                return Err(UserServiceError::PasswordMismatch);
            }
        }

        let password_hash = self.hash_password(&request.password)?;
        let created_at = super::now_timestamp();

        match self
            .repository
            .create_user(
                &request.username,
                &password_hash,
                request.email.filter(|e| !e.is_empty()),
                &created_at,
            )
            .await
        {
            Ok(user) => Ok(user),
            Err(RepositoryError::AlreadyExists) => Err(UserServiceError::UsernameTaken),
            Err(e) => Err(UserServiceError::Repository(e)),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserServiceError> {
        Ok(self.repository.find_by_username(username).await?)
    }

    pub async fn list_users(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<User>, UserServiceError> {
        Ok(self.repository.list_users(limit, offset).await?)
    }

    fn hash_password(&self, password: &str) -> Result<String, UserServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserServiceError::Hashing(e.to_string()))
    }

    pub fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        if let Ok(parsed_hash) = PasswordHash::new(password_hash) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        } else {
            false
        }
    }
}
