pub mod article_service;
pub mod auth_service;
pub mod news_client;
pub mod user_service;

pub use article_service::{ArticleService, SaveOutcome};
pub use auth_service::AuthService;
pub use news_client::NewsClient;
pub use user_service::UserService;

/// Timestamp format persisted for `created_at`, `last_login` and
/// `saved_at`. Stored as TEXT, sortable lexicographically.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
