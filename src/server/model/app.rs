use sea_orm::DatabaseConnection;

use crate::server::{
    external::{llm, maps, storage},
    model::auth::OAuthClient,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub maps_client: maps::Client,
    pub llm_client: llm::Client,
    pub storage_client: storage::Client,
    pub oauth_client: OAuthClient,
    pub http_client: reqwest::Client,
    pub userinfo_url: String,
    pub redis_pool: fred::prelude::Pool,
}
