use chrono::Utc;
use entity::category::Category;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct PlaceFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceFixture<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_place(&self, external_id: &str) -> Result<entity::place::Model, TestError> {
        self.insert_place_with_reviews(external_id, None, 0.0, 0)
            .await
    }

    pub async fn insert_place_with_reviews(
        &self,
        external_id: &str,
        category: Option<Category>,
        average_rating: f64,
        total_reviews: i32,
    ) -> Result<entity::place::Model, TestError> {
        let now = Utc::now().naive_utc();

        let place = entity::place::ActiveModel {
            external_id: ActiveValue::Set(external_id.to_string()),
            name: ActiveValue::Set(format!("Place {}", external_id)),
            address: ActiveValue::Set("1 Test Street, Ankara".to_string()),
            phone: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            latitude: ActiveValue::Set(39.92),
            longitude: ActiveValue::Set(32.85),
            category: ActiveValue::Set(category),
            average_rating: ActiveValue::Set(average_rating),
            total_reviews: ActiveValue::Set(total_reviews),
            created_at: ActiveValue::Set(now),
            refreshed_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(place.insert(self.db).await?)
    }
}
