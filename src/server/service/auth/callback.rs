use oauth2::{AuthorizationCode, TokenResponse};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, Error},
    model::auth::{OAuthClient, ProviderUserInfo},
    service::user::UserService,
};

pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    oauth_client: &'a OAuthClient,
    http_client: &'a reqwest::Client,
    userinfo_url: &'a str,
}

impl<'a> CallbackService<'a> {
    /// Creates a new instance of [`CallbackService`]
    pub fn new(
        db: &'a DatabaseConnection,
        oauth_client: &'a OAuthClient,
        http_client: &'a reqwest::Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            oauth_client,
            http_client,
            userinfo_url,
        }
    }

    /// Exchange the authorization code, fetch the provider identity, and
    /// get-or-create the matching user account.
    ///
    /// Returns the local user id to store in session.
    pub async fn handle_callback(&self, code: &str) -> Result<i32, Error> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let user_info = self
            .fetch_user_info(token.access_token().secret())
            .await?;

        let user_service = UserService::new(self.db);
        let user = user_service
            .get_or_create_user(&user_info.sub, &user_info.email, &user_info.name)
            .await?;

        Ok(user.id)
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<ProviderUserInfo, Error> {
        let response = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::UserInfoFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| AuthError::UserInfoFailed(e.to_string()))?;

        let user_info = response
            .json::<ProviderUserInfo>()
            .await
            .map_err(|e| AuthError::UserInfoFailed(e.to_string()))?;

        Ok(user_info)
    }
}
