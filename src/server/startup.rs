use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl,
};
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::Error,
    external::{llm, maps, storage},
    model::auth::OAuthClient,
};

/// Build and configure the mapping API client with the configured search
/// scope
pub fn build_maps_client(config: &Config) -> Result<maps::Client, Error> {
    let maps_client = maps::Client::builder()
        .base_url(&config.maps_api_url)
        .api_key(&config.maps_api_key)
        .user_agent(&format!("savora ({})", config.contact_email))
        .search_center(config.search_center_lat, config.search_center_lng)
        .search_radius_m(config.search_radius_m)
        .region(&config.search_region)
        .build()?;

    Ok(maps_client)
}

/// Build the language-model completion client
pub fn build_llm_client(config: &Config) -> Result<llm::Client, Error> {
    llm::Client::new(&config.llm_api_url, &config.llm_api_key, &config.llm_model)
}

/// Build the blob store client for review photos
pub fn build_storage_client(config: &Config) -> Result<storage::Client, Error> {
    storage::Client::new(
        &config.storage_url,
        &config.storage_bucket,
        &config.storage_api_key,
    )
}

/// Build the OAuth2 client for the external auth provider
pub fn build_oauth_client(config: &Config) -> Result<OAuthClient, Error> {
    let parse = |what: &str, e: oauth2::url::ParseError| {
        Error::ParseError(format!("Invalid {}: {}", what, e))
    };

    let oauth_client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.oauth_auth_url.clone()).map_err(|e| parse("auth URL", e))?)
        .set_token_uri(
            TokenUrl::new(config.oauth_token_url.clone()).map_err(|e| parse("token URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.oauth_redirect_url.clone())
                .map_err(|e| parse("redirect URL", e))?,
        );

    Ok(oauth_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = tower_sessions_redis_store::fred::prelude::Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Connect to Valkey/Redis for notification fan-out
pub async fn connect_to_notifier(config: &Config) -> Result<fred::prelude::Pool, Error> {
    use fred::prelude::*;

    let redis_config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(pool)
}
