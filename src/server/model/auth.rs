use oauth2::{basic::BasicClient, EndpointNotSet, EndpointSet};
use serde::Deserialize;

/// OAuth2 client with the authorization and token endpoints configured
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Login URL plus the CSRF state stored in session until the callback
pub struct Login {
    pub login_url: String,
    pub state: String,
}

/// Identity fields returned by the auth provider's userinfo endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUserInfo {
    pub sub: String,
    pub email: String,
    pub name: String,
}
