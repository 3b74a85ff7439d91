use oauth2::{CsrfToken, Scope};

use crate::server::model::auth::{Login, OAuthClient};

/// Build the provider login URL with a fresh CSRF state.
///
/// The state is stored in session by the caller and checked on callback.
pub fn login_service(oauth_client: &OAuthClient) -> Login {
    let (login_url, csrf_token) = oauth_client
        .authorize_url(CsrfToken::new_random)
        .add_scope(Scope::new("openid".to_string()))
        .add_scope(Scope::new("email".to_string()))
        .add_scope(Scope::new("profile".to_string()))
        .url();

    Login {
        login_url: login_url.to_string(),
        state: csrf_token.secret().to_string(),
    }
}
