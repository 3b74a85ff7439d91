use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::SessionAuthCsrf,
};

/// Validate the callback CSRF state against the value stored at login.
///
/// The stored state is consumed either way; a second callback with the same
/// state fails.
pub async fn validate_csrf(session: &Session, state: &str) -> Result<(), Error> {
    match SessionAuthCsrf::take(session).await? {
        None => Err(AuthError::CsrfValidationFailed.into()),
        Some(stored) if stored.is_empty() => Err(AuthError::CsrfMissingValue.into()),
        Some(stored) if stored == state => Ok(()),
        Some(_) => Err(AuthError::CsrfValidationFailed.into()),
    }
}
