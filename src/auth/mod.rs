pub mod handlers;
pub mod middleware;

pub use middleware::{current_username, SESSION_USERNAME_KEY};
