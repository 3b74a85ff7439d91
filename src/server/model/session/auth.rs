use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_AUTH_CSRF_KEY: &str = "savora:auth:csrf";

/// CSRF state stored in session between login redirect and callback
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Insert CSRF state into session
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Remove and return the CSRF state from session
    pub async fn take(session: &Session) -> Result<Option<String>, Error> {
        let state = session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
            .map(|SessionAuthCsrf(state)| state);

        Ok(state)
    }
}
