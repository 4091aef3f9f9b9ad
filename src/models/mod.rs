pub mod article;
pub mod news;
pub mod user;

pub use article::{NewSavedArticle, SavedArticle};
pub use news::{NewsArticle, NewsResponse, NewsSource, TimeWindow};
pub use user::User;
