use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::server::{
    external::maps,
    scheduler::{config::place_refresh as place_refresh_config, place_refresh::refresh_stale_places},
};

/// Initialize and start the cron job scheduler
pub async fn start_scheduler(
    db: &DatabaseConnection,
    maps_client: &maps::Client,
) -> Result<(), JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    let db_clone = db.clone();
    let maps_clone = maps_client.clone();

    sched
        .add(Job::new_async(
            place_refresh_config::CRON_EXPRESSION,
            move |_, _| {
                let db = db_clone.clone();
                let maps_client = maps_clone.clone();

                Box::pin(async move {
                    match refresh_stale_places(&db, &maps_client).await {
                        Ok(count) => {
                            tracing::info!("Refreshed details for {} place(s)", count)
                        }
                        Err(e) => tracing::error!("Error refreshing place details: {:?}", e),
                    }
                })
            },
        )?)
        .await?;

    sched.start().await?;
    Ok(())
}
