use chrono::Utc;
use entity::category::Category;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::review::ReviewDraftDto;

pub struct ReviewRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        place_id: i32,
        draft: &ReviewDraftDto,
    ) -> Result<entity::review::Model, DbErr> {
        let review = entity::review::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            place_id: ActiveValue::Set(place_id),
            dish_name: ActiveValue::Set(draft.dish_name.clone()),
            food_taste: ActiveValue::Set(draft.ratings.food_taste),
            presentation: ActiveValue::Set(draft.ratings.presentation),
            portion_size: ActiveValue::Set(draft.ratings.portion_size),
            music_acoustics: ActiveValue::Set(draft.ratings.music_acoustics),
            ambiance: ActiveValue::Set(draft.ratings.ambiance),
            furniture_comfort: ActiveValue::Set(draft.ratings.furniture_comfort),
            service: ActiveValue::Set(draft.ratings.service),
            drinks_variety: ActiveValue::Set(draft.ratings.drinks_variety),
            veggie_options: ActiveValue::Set(draft.ratings.veggie_options),
            price_range: ActiveValue::Set(draft.price_range),
            category: ActiveValue::Set(draft.category),
            comment: ActiveValue::Set(draft.comment.clone()),
            photo_urls: ActiveValue::Set(serde_json::json!(draft.photo_urls)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        review.insert(self.db).await
    }

    pub async fn find_by_user_and_place(
        &self,
        user_id: i32,
        place_id: i32,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(entity::review::Column::PlaceId.eq(place_id))
            .one(self.db)
            .await
    }

    pub async fn count_by_place(&self, place_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::PlaceId.eq(place_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_user_and_category(
        &self,
        user_id: i32,
        category: Category,
    ) -> Result<u64, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(entity::review::Column::Category.eq(category))
            .count(self.db)
            .await
    }

    /// Review counts for every category the user has reviewed in
    pub async fn counts_by_category(&self, user_id: i32) -> Result<Vec<(Category, i64)>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Category)
            .column_as(entity::review::Column::Id.count(), "count")
            .filter(entity::review::Column::UserId.eq(user_id))
            .group_by(entity::review::Column::Category)
            .into_tuple::<(Category, i64)>()
            .all(self.db)
            .await
    }

    pub async fn list_by_place(&self, place_id: i32) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::PlaceId.eq(place_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::{category::Category, price_range::PriceRange};
    use savora_test_utils::prelude::*;

    use crate::model::review::{RatingsDto, ReviewDraftDto};

    use super::*;

    fn draft(category: Category) -> ReviewDraftDto {
        ReviewDraftDto {
            place_id: None,
            place: None,
            dish_name: Some("Adana".to_string()),
            ratings: RatingsDto {
                food_taste: 9,
                presentation: 8,
                portion_size: 8,
                music_acoustics: 6,
                ambiance: 7,
                furniture_comfort: 7,
                service: 9,
                drinks_variety: 6,
                veggie_options: 5,
            },
            price_range: PriceRange::Moderate,
            category,
            comment: "Great kebab.".to_string(),
            photo_urls: vec![],
        }
    }

    mod create {
        use super::*;

        /// Expect success when inserting a review
        #[tokio::test]
        async fn creates_review() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;
            let place = test.place().insert_place("ext-1").await?;

            let review_repo = ReviewRepository::new(&test.state.db);
            let result = review_repo
                .create(user.id, place.id, &draft(Category::Turkish))
                .await;

            assert!(result.is_ok());
            let review = result.unwrap();
            assert_eq!(review.category, Category::Turkish);

            Ok(())
        }

        /// Expect Error from the unique index when inserting a second review
        /// for the same (user, place)
        #[tokio::test]
        async fn fails_for_duplicate_user_place() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;
            let place = test.place().insert_place("ext-1").await?;
            let _ = test
                .review()
                .insert_review(user.id, place.id, Category::Turkish)
                .await?;

            let review_repo = ReviewRepository::new(&test.state.db);
            let result = review_repo
                .create(user.id, place.id, &draft(Category::Turkish))
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod counts {
        use super::*;

        /// Expect per-category counts to group correctly
        #[tokio::test]
        async fn groups_counts_by_category() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;
            let place1 = test.place().insert_place("ext-1").await?;
            let place2 = test.place().insert_place("ext-2").await?;
            let place3 = test.place().insert_place("ext-3").await?;
            test.review()
                .insert_review(user.id, place1.id, Category::Turkish)
                .await?;
            test.review()
                .insert_review(user.id, place2.id, Category::Turkish)
                .await?;
            test.review()
                .insert_review(user.id, place3.id, Category::Cafe)
                .await?;

            let review_repo = ReviewRepository::new(&test.state.db);
            let mut counts = review_repo.counts_by_category(user.id).await?;
            counts.sort_by_key(|(_, count)| -count);

            assert_eq!(counts.len(), 2);
            assert_eq!(counts[0], (Category::Turkish, 2));
            assert_eq!(counts[1], (Category::Cafe, 1));

            Ok(())
        }
    }
}
