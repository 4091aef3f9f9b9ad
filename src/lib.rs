pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod sentiment;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::user_service::UserService>,
    pub auth_service: Arc<services::auth_service::AuthService>,
    pub article_service: Arc<services::article_service::ArticleService>,
    pub news_client: Arc<services::news_client::NewsClient>,
    pub pool: sqlx::SqlitePool,
}

impl AppState {
    /// Wires the full service stack over an existing pool. The news
    /// client is injectable so tests can point it at a stub server.
    pub fn new(pool: sqlx::SqlitePool, news_client: services::news_client::NewsClient) -> Self {
        let user_repository = Arc::new(repositories::SqliteUserRepository::new(pool.clone()));
        let article_repository = Arc::new(repositories::SqliteArticleRepository::new(pool.clone()));

        Self {
            user_service: Arc::new(services::UserService::new(user_repository.clone())),
            auth_service: Arc::new(services::AuthService::new(user_repository)),
            article_service: Arc::new(services::ArticleService::new(article_repository)),
            news_client: Arc::new(news_client),
            pool,
        }
    }
}

/// Builds the application router: public auth endpoints plus the
/// session-gated API.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::middleware;
    use axum::routing::{get, post};

    let protected = axum::Router::new()
        .route("/api/news", get(handlers::search_news))
        .route(
            "/api/articles",
            get(handlers::list_articles)
                .post(handlers::save_article)
                .delete(handlers::delete_article),
        )
        .route("/api/articles/count", get(handlers::count_articles))
        .layer(middleware::from_fn(auth::middleware::require_auth));

    axum::Router::new()
        .route("/auth/register", post(auth::handlers::register))
        .route("/auth/login", post(auth::handlers::login))
        .route("/logout", get(auth::handlers::logout))
        .merge(protected)
        .with_state(state)
}
