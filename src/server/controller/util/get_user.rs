use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::SessionUserId,
};

/// The session's user id, or `Unauthorized` for anonymous requests
pub async fn require_user_id(session: &Session) -> Result<i32, Error> {
    SessionUserId::get(session)
        .await?
        .ok_or_else(|| AuthError::Unauthorized.into())
}
