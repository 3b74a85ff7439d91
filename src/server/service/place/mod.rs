//! Place resolution service.
//!
//! Resolves externally-sourced place candidates into canonical local place
//! records, idempotently by external identifier.

use rand::{distr::Alphanumeric, Rng};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::place::PlaceCandidateDto,
    server::{data::place::PlaceRepository, error::place::PlaceError, error::Error},
};

/// Prefix marking a client-side placeholder id for a place that could not be
/// persisted; never a durable place reference.
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Synthetic placeholder id handed to the client when place creation fails,
/// so the review form can proceed optimistically. Submission re-resolves it.
pub fn temporary_place_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();

    format!("{}{}", TEMP_ID_PREFIX, suffix)
}

pub struct PlaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceService<'a> {
    /// Creates a new instance of [`PlaceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get the place for an external identifier or create it from the
    /// candidate's descriptive fields.
    ///
    /// An existing place is returned unchanged so locally-curated category
    /// and rating data are never clobbered by stale external data. A lost
    /// race against a concurrent insert is absorbed by re-reading on the
    /// unique-constraint violation.
    pub async fn resolve_or_create(
        &self,
        candidate: &PlaceCandidateDto,
    ) -> Result<entity::place::Model, Error> {
        if candidate.external_id.trim().is_empty() {
            return Err(PlaceError::IncompletePlaceData.into());
        }

        let place_repo = PlaceRepository::new(self.db);

        if let Some(place) = place_repo
            .find_by_external_id(&candidate.external_id)
            .await?
        {
            return Ok(place);
        }

        match place_repo.create(candidate).await {
            Ok(place) => Ok(place),
            Err(err) => {
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    // Concurrent submission created the place first
                    if let Some(place) = place_repo
                        .find_by_external_id(&candidate.external_id)
                        .await?
                    {
                        return Ok(place);
                    }
                }

                Err(PlaceError::ResolutionFailed {
                    external_id: candidate.external_id.clone(),
                    reason: err.to_string(),
                }
                .into())
            }
        }
    }

    /// Refresh a place's descriptive fields from current external data
    pub async fn refresh_details(
        &self,
        place_id: i32,
        candidate: &PlaceCandidateDto,
    ) -> Result<entity::place::Model, Error> {
        let place_repo = PlaceRepository::new(self.db);

        let place = place_repo.update_details(place_id, candidate).await?;

        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use savora_test_utils::prelude::*;

    use super::*;

    fn candidate(external_id: &str) -> PlaceCandidateDto {
        PlaceCandidateDto {
            external_id: external_id.to_string(),
            name: "Kebabistan".to_string(),
            address: "1 Main St, Ankara".to_string(),
            latitude: 39.9,
            longitude: 32.8,
            phone: None,
            website: None,
        }
    }

    mod temporary_place_id {
        use super::*;

        #[test]
        fn is_prefixed_and_unique() {
            let a = temporary_place_id();
            let b = temporary_place_id();

            assert!(a.starts_with(TEMP_ID_PREFIX));
            assert!(b.starts_with(TEMP_ID_PREFIX));
            assert_ne!(a, b);
        }
    }

    mod resolve_or_create {
        use entity::category::Category;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use super::*;

        /// Expect resolving the same external id twice to yield the same
        /// place row without duplicating it
        #[tokio::test]
        async fn is_idempotent_by_external_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Place)?;

            let place_service = PlaceService::new(&test.state.db);
            let first = place_service
                .resolve_or_create(&candidate("ext-1"))
                .await
                .unwrap();
            let second = place_service
                .resolve_or_create(&candidate("ext-1"))
                .await
                .unwrap();

            assert_eq!(first.id, second.id);

            let count = entity::prelude::Place::find().count(&test.state.db).await?;
            assert_eq!(count, 1);

            Ok(())
        }

        /// Expect an existing place's curated fields to survive resolution
        /// with stale external data
        #[tokio::test]
        async fn does_not_overwrite_existing_place() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::Place)?;
            let existing = test
                .place()
                .insert_place_with_reviews("ext-1", Some(Category::Turkish), 8.0, 2)
                .await?;

            let mut stale = candidate("ext-1");
            stale.name = "Old Name From Maps".to_string();

            let place_service = PlaceService::new(&test.state.db);
            let resolved = place_service.resolve_or_create(&stale).await.unwrap();

            assert_eq!(resolved.id, existing.id);
            assert_eq!(resolved.name, existing.name);
            assert_eq!(resolved.category, Some(Category::Turkish));
            assert_eq!(resolved.average_rating, 8.0);

            Ok(())
        }

        /// Expect IncompletePlaceData when the candidate has no external id
        #[tokio::test]
        async fn fails_for_missing_external_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Place)?;

            let place_service = PlaceService::new(&test.state.db);
            let result = place_service.resolve_or_create(&candidate("")).await;

            assert!(matches!(
                result,
                Err(Error::PlaceError(PlaceError::IncompletePlaceData))
            ));

            Ok(())
        }

        /// Expect ResolutionFailed when the backing table is missing
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let place_service = PlaceService::new(&test.state.db);
            let result = place_service.resolve_or_create(&candidate("ext-1")).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
