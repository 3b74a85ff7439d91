use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::place::PlaceRepository,
    error::Error,
    external::maps,
    scheduler::config::place_refresh as config,
    service::place::PlaceService,
};

/// Refresh descriptive fields of places whose details have gone stale.
///
/// Per-place mapping API failures are logged and skipped so one missing
/// place does not stall the batch. Returns the number of places refreshed.
pub async fn refresh_stale_places(
    db: &DatabaseConnection,
    maps_client: &maps::Client,
) -> Result<usize, Error> {
    let cutoff = Utc::now().naive_utc() - Duration::hours(config::STALE_AFTER_HOURS);

    let place_repo = PlaceRepository::new(db);
    let place_service = PlaceService::new(db);

    let stale_places = place_repo.find_stale(cutoff, config::BATCH_LIMIT).await?;

    let mut refreshed = 0;

    for place in stale_places {
        match maps_client.place_details(&place.external_id).await {
            Ok(candidate) => {
                place_service.refresh_details(place.id, &candidate).await?;
                refreshed += 1;
            }
            Err(e) => {
                tracing::warn!(
                    place_id = %place.id,
                    external_id = %place.external_id,
                    "Failed to refresh place details: {:?}",
                    e
                );
            }
        }
    }

    Ok(refreshed)
}
