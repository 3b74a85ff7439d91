use chrono::{NaiveDateTime, Utc};
use entity::category::Category;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::place::PlaceCandidateDto;

pub struct PlaceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlaceRepository<'a, C> {
    /// Creates a new instance of [`PlaceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new place seeded from an externally-sourced candidate.
    ///
    /// Category is unset and aggregates start at zero; review lifecycle
    /// events are the only thing that mutates them.
    pub async fn create(&self, candidate: &PlaceCandidateDto) -> Result<entity::place::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let place = entity::place::ActiveModel {
            external_id: ActiveValue::Set(candidate.external_id.clone()),
            name: ActiveValue::Set(candidate.name.clone()),
            address: ActiveValue::Set(candidate.address.clone()),
            phone: ActiveValue::Set(candidate.phone.clone()),
            website: ActiveValue::Set(candidate.website.clone()),
            latitude: ActiveValue::Set(candidate.latitude),
            longitude: ActiveValue::Set(candidate.longitude),
            category: ActiveValue::Set(None),
            average_rating: ActiveValue::Set(0.0),
            total_reviews: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            refreshed_at: ActiveValue::Set(now),
            ..Default::default()
        };

        place.insert(self.db).await
    }

    pub async fn find_by_id(&self, place_id: i32) -> Result<Option<entity::place::Model>, DbErr> {
        entity::prelude::Place::find_by_id(place_id).one(self.db).await
    }

    pub async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<entity::place::Model>, DbErr> {
        entity::prelude::Place::find()
            .filter(entity::place::Column::ExternalId.eq(external_id))
            .one(self.db)
            .await
    }

    /// Updates rating aggregates and adopts the category when unset
    pub async fn apply_review(
        &self,
        place: &entity::place::Model,
        review_rating: f64,
        category: Category,
    ) -> Result<(), DbErr> {
        let new_total = place.total_reviews + 1;
        let new_average = (place.average_rating * place.total_reviews as f64 + review_rating)
            / new_total as f64;

        let mut active = entity::place::ActiveModel {
            id: ActiveValue::Unchanged(place.id),
            average_rating: ActiveValue::Set(new_average),
            total_reviews: ActiveValue::Set(new_total),
            ..Default::default()
        };

        if place.category.is_none() {
            active.category = ActiveValue::Set(Some(category));
        }

        active.update(self.db).await?;

        Ok(())
    }

    /// Refreshes descriptive fields from external place data.
    ///
    /// Locally-curated category and rating aggregates are left untouched.
    pub async fn update_details(
        &self,
        place_id: i32,
        candidate: &PlaceCandidateDto,
    ) -> Result<entity::place::Model, DbErr> {
        let place = entity::place::ActiveModel {
            id: ActiveValue::Unchanged(place_id),
            name: ActiveValue::Set(candidate.name.clone()),
            address: ActiveValue::Set(candidate.address.clone()),
            phone: ActiveValue::Set(candidate.phone.clone()),
            website: ActiveValue::Set(candidate.website.clone()),
            refreshed_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        place.update(self.db).await
    }

    /// Places whose details have not been refreshed since the cutoff
    pub async fn find_stale(
        &self,
        cutoff: NaiveDateTime,
        limit: u64,
    ) -> Result<Vec<entity::place::Model>, DbErr> {
        entity::prelude::Place::find()
            .filter(entity::place::Column::RefreshedAt.lt(cutoff))
            .order_by_asc(entity::place::Column::RefreshedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}
