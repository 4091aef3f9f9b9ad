pub mod article_handlers;
pub mod news_handlers;

pub use article_handlers::{count_articles, delete_article, list_articles, save_article};
pub use news_handlers::search_news;
