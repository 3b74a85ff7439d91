use chrono::Utc;
use entity::{category::Category, price_range::PriceRange};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct ReviewFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewFixture<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review with every sub-rating set to 8 and an empty photo list
    pub async fn insert_review(
        &self,
        user_id: i32,
        place_id: i32,
        category: Category,
    ) -> Result<entity::review::Model, TestError> {
        let review = entity::review::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            place_id: ActiveValue::Set(place_id),
            dish_name: ActiveValue::Set(None),
            food_taste: ActiveValue::Set(8),
            presentation: ActiveValue::Set(8),
            portion_size: ActiveValue::Set(8),
            music_acoustics: ActiveValue::Set(8),
            ambiance: ActiveValue::Set(8),
            furniture_comfort: ActiveValue::Set(8),
            service: ActiveValue::Set(8),
            drinks_variety: ActiveValue::Set(8),
            veggie_options: ActiveValue::Set(8),
            price_range: ActiveValue::Set(PriceRange::Moderate),
            category: ActiveValue::Set(category),
            comment: ActiveValue::Set("Solid spot, would come back.".to_string()),
            photo_urls: ActiveValue::Set(serde_json::json!([])),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(review.insert(self.db).await?)
    }
}
