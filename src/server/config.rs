use crate::server::error::config::ConfigError;

pub struct Config {
    pub listen_addr: String,
    pub contact_email: String,
    pub database_url: String,
    pub valkey_url: String,
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,
    pub oauth_redirect_url: String,
    pub maps_api_url: String,
    pub maps_api_key: String,
    pub search_center_lat: f64,
    pub search_center_lng: f64,
    pub search_radius_m: u32,
    pub search_region: String,
    pub llm_api_url: String,
    pub llm_api_key: String,
    pub llm_model: String,
    pub storage_url: String,
    pub storage_bucket: String,
    pub storage_api_key: String,
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn require_parsed<T: std::str::FromStr>(var: &str) -> Result<T, ConfigError> {
    require(var)?
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a valid {}", std::any::type_name::<T>()),
        })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            listen_addr: require("LISTEN_ADDR")?,
            contact_email: require("CONTACT_EMAIL")?,
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            oauth_client_id: require("OAUTH_CLIENT_ID")?,
            oauth_client_secret: require("OAUTH_CLIENT_SECRET")?,
            oauth_auth_url: require("OAUTH_AUTH_URL")?,
            oauth_token_url: require("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: require("OAUTH_USERINFO_URL")?,
            oauth_redirect_url: require("OAUTH_REDIRECT_URL")?,
            maps_api_url: require("MAPS_API_URL")?,
            maps_api_key: require("MAPS_API_KEY")?,
            search_center_lat: require_parsed("SEARCH_CENTER_LAT")?,
            search_center_lng: require_parsed("SEARCH_CENTER_LNG")?,
            search_radius_m: require_parsed("SEARCH_RADIUS_M")?,
            search_region: require("SEARCH_REGION")?,
            llm_api_url: require("LLM_API_URL")?,
            llm_api_key: require("LLM_API_KEY")?,
            llm_model: require("LLM_MODEL")?,
            storage_url: require("STORAGE_URL")?,
            storage_bucket: require("STORAGE_BUCKET")?,
            storage_api_key: require("STORAGE_API_KEY")?,
        })
    }
}
