use savora::server::{
    config::Config, model::app::AppState, router, scheduler::cron::start_scheduler, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let session = startup::connect_to_session(&config).await.unwrap();
    let redis_pool = startup::connect_to_notifier(&config).await.unwrap();
    let maps_client = startup::build_maps_client(&config).unwrap();
    let llm_client = startup::build_llm_client(&config).unwrap();
    let storage_client = startup::build_storage_client(&config).unwrap();
    let oauth_client = startup::build_oauth_client(&config).unwrap();
    let http_client = reqwest::Client::new();

    start_scheduler(&db, &maps_client).await.unwrap();

    tracing::info!("Starting server on {}", config.listen_addr);

    let app = router::routes()
        .with_state(AppState {
            db,
            maps_client,
            llm_client,
            storage_client,
            oauth_client,
            http_client,
            userinfo_url: config.oauth_userinfo_url.clone(),
            redis_pool,
        })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
