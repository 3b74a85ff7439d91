pub mod auth;
pub mod user;

pub use auth::SessionAuthCsrf;
pub use user::SessionUserId;
