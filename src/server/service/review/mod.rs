//! Review submission service.
//!
//! Drives the submission chain: resolve the draft's place, reject
//! duplicates, detect the first review, compute the points breakdown, insert
//! the review and update aggregates inside one transaction, then run the
//! non-fatal post-commit stage (achievement evaluation and notifications).

pub mod enhance;
pub mod points;

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::{
        achievement::UnlockedAchievementDto,
        review::{PointsBreakdownDto, ReviewDraftDto, ReviewDto, ReviewSubmissionDto},
    },
    server::{
        data::{place::PlaceRepository, review::ReviewRepository, user::UserRepository},
        error::{auth::AuthError, place::PlaceError, review::ReviewError, Error},
        service::{
            achievement::AchievementService,
            notification::NotificationService,
            place::{PlaceService, TEMP_ID_PREFIX},
            user::level_for_points,
        },
    },
};

/// Maximum photos persisted per review
pub const MAX_PHOTOS: usize = 6;

fn validate_draft(draft: &ReviewDraftDto) -> Result<(), ReviewError> {
    let ratings = [
        ("food_taste", draft.ratings.food_taste),
        ("presentation", draft.ratings.presentation),
        ("portion_size", draft.ratings.portion_size),
        ("music_acoustics", draft.ratings.music_acoustics),
        ("ambiance", draft.ratings.ambiance),
        ("furniture_comfort", draft.ratings.furniture_comfort),
        ("service", draft.ratings.service),
        ("drinks_variety", draft.ratings.drinks_variety),
        ("veggie_options", draft.ratings.veggie_options),
    ];

    for (field, value) in ratings {
        if !(1..=10).contains(&value) {
            return Err(ReviewError::InvalidRating { field, value });
        }
    }

    if draft.photo_urls.len() > MAX_PHOTOS {
        return Err(ReviewError::TooManyPhotos {
            max: MAX_PHOTOS,
            count: draft.photo_urls.len(),
        });
    }

    Ok(())
}

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
    publisher: Option<&'a fred::prelude::Pool>,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            publisher: None,
        }
    }

    /// Attach a redis pool so post-submission notifications fan out in real
    /// time
    pub fn with_publisher(mut self, pool: &'a fred::prelude::Pool) -> Self {
        self.publisher = Some(pool);
        self
    }

    /// Submit a review.
    ///
    /// The submission either fully succeeds (review persisted, points
    /// credited, aggregates updated) or fully fails before persistence.
    /// Post-commit achievement evaluation and notification failures are
    /// logged and swallowed; the committed review is never rolled back.
    pub async fn submit_review(
        &self,
        user_id: i32,
        draft: &ReviewDraftDto,
    ) -> Result<ReviewSubmissionDto, Error> {
        validate_draft(draft)?;

        let place = self.resolve_draft_place(draft).await?;

        let txn = self.db.begin().await?;

        let review_repo = ReviewRepository::new(&txn);
        let place_repo = PlaceRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        // Exactly one review per (user, place); the unique index backstops
        // this pre-check under concurrency
        if review_repo
            .find_by_user_and_place(user_id, place.id)
            .await?
            .is_some()
        {
            return Err(ReviewError::DuplicateReview {
                user_id,
                place_id: place.id,
            }
            .into());
        }

        // Evaluated before insertion so the just-submitted review does not
        // count toward its own first-review bonus
        let is_first_review = review_repo.count_by_place(place.id).await? == 0;

        let breakdown = points::compute_points(
            is_first_review,
            !draft.photo_urls.is_empty(),
            draft.comment.chars().count(),
        );

        let review = match review_repo.create(user_id, place.id, draft).await {
            Ok(review) => review,
            Err(err) => {
                return if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    Err(ReviewError::DuplicateReview {
                        user_id,
                        place_id: place.id,
                    }
                    .into())
                } else {
                    Err(ReviewError::InsertFailed(err).into())
                };
            }
        };

        let review_dto = ReviewDto::from(review);

        let place_in_txn = place_repo.find_by_id(place.id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Place ID {} disappeared during review submission",
                place.id
            ))
        })?;

        place_repo
            .apply_review(&place_in_txn, review_dto.overall_rating, draft.category)
            .await?;

        let points_before = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?
            .points;

        user_repo.add_points(user_id, breakdown.total_points).await?;

        txn.commit().await?;

        let unlocked_achievements = match self
            .post_submit(user_id, points_before, &review_dto, &breakdown)
            .await
        {
            Ok(unlocked) => unlocked,
            Err(e) => {
                tracing::error!(
                    user_id = %user_id,
                    review_id = %review_dto.id,
                    "Post-submission processing failed, review is already committed: {:?}",
                    e
                );

                Vec::new()
            }
        };

        Ok(ReviewSubmissionDto {
            review: review_dto,
            points: breakdown,
            unlocked_achievements,
        })
    }

    /// Resolve the draft's place reference to a durable place row.
    ///
    /// A durable id is used as-is; an absent, temporary, or unknown id is
    /// re-resolved from the embedded candidate.
    async fn resolve_draft_place(
        &self,
        draft: &ReviewDraftDto,
    ) -> Result<entity::place::Model, Error> {
        let place_repo = PlaceRepository::new(self.db);
        let place_service = PlaceService::new(self.db);

        if let Some(id_str) = draft.place_id.as_deref() {
            if !id_str.starts_with(TEMP_ID_PREFIX) {
                if let Ok(place_id) = id_str.parse::<i32>() {
                    if let Some(place) = place_repo.find_by_id(place_id).await? {
                        return Ok(place);
                    }

                    if draft.place.is_none() {
                        return Err(PlaceError::PlaceNotFound(place_id).into());
                    }
                }
            }
        }

        let candidate = draft.place.as_ref().ok_or(PlaceError::IncompletePlaceData)?;

        place_service.resolve_or_create(candidate).await
    }

    async fn post_submit(
        &self,
        user_id: i32,
        points_before: i32,
        review: &ReviewDto,
        breakdown: &PointsBreakdownDto,
    ) -> Result<Vec<UnlockedAchievementDto>, Error> {
        let mut achievement_service = AchievementService::new(self.db);
        let mut notification_service = NotificationService::new(self.db);
        if let Some(pool) = self.publisher {
            achievement_service = achievement_service.with_publisher(pool);
            notification_service = notification_service.with_publisher(pool);
        }

        notification_service
            .notify_review_published(user_id, review)
            .await?;
        notification_service
            .notify_points_earned(user_id, breakdown)
            .await?;

        let unlocked = achievement_service
            .check_and_grant(user_id, review.category)
            .await?;

        // Level check covers the submission credit plus unlock rewards
        let user_repo = UserRepository::new(self.db);
        if let Some(user) = user_repo.get_by_id(user_id).await? {
            let level_after = level_for_points(user.points);
            if level_after > level_for_points(points_before) {
                notification_service
                    .notify_level_up(user_id, level_after)
                    .await?;
            }
        }

        Ok(unlocked)
    }

    /// Reviews for a place, newest first
    pub async fn reviews_for_place(&self, place_id: i32) -> Result<Vec<ReviewDto>, Error> {
        let review_repo = ReviewRepository::new(self.db);

        let reviews = review_repo
            .list_by_place(place_id)
            .await?
            .into_iter()
            .map(ReviewDto::from)
            .collect();

        Ok(reviews)
    }

    /// The user's own reviews, newest first
    pub async fn reviews_for_user(&self, user_id: i32) -> Result<Vec<ReviewDto>, Error> {
        let review_repo = ReviewRepository::new(self.db);

        let reviews = review_repo
            .list_by_user(user_id)
            .await?
            .into_iter()
            .map(ReviewDto::from)
            .collect();

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use entity::{category::Category, price_range::PriceRange};
    use savora_test_utils::prelude::*;

    use crate::model::{
        place::PlaceCandidateDto,
        review::{RatingsDto, ReviewDraftDto},
    };

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

    fn draft_for_candidate(external_id: &str) -> ReviewDraftDto {
        ReviewDraftDto {
            place_id: None,
            place: Some(candidate(external_id)),
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
            category: Category::Turkish,
            comment: "Great kebab.".to_string(),
            photo_urls: vec![],
        }
    }

    mod submit_review {
        use super::*;

        /// First review for a brand-new place with a photo and a 300+ char
        /// comment earns every bonus and unlocks the level-1 achievement
        #[tokio::test]
        async fn first_review_earns_all_bonuses_and_unlocks_achievement(
        ) -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;
            test.achievement().seed_category(Category::Turkish).await?;

            let mut draft = draft_for_candidate("ext-1");
            draft.comment = "a".repeat(310);
            draft.photo_urls = vec!["https://blob.example/review-photos/1.jpg".to_string()];

            let review_service = ReviewService::new(&test.state.db);
            let result = review_service.submit_review(user.id, &draft).await;

            assert!(result.is_ok(), "Error: {:?}", result.err());
            let submission = result.unwrap();

            assert_eq!(submission.points.base_points, 100);
            assert_eq!(submission.points.first_review_bonus, 500);
            assert_eq!(submission.points.photo_bonus, 50);
            assert_eq!(submission.points.extended_review_bonus, 50);
            assert_eq!(submission.points.total_points, 700);

            assert_eq!(submission.unlocked_achievements.len(), 1);
            assert_eq!(submission.unlocked_achievements[0].level, 1);

            // Submission credit plus the level-1 unlock reward
            let user_repo = crate::server::data::user::UserRepository::new(&test.state.db);
            let updated = user_repo.get_by_id(user.id).await?.unwrap();
            assert_eq!(updated.points, 750);

            Ok(())
        }

        /// A second submission for the same (user, place) fails with
        /// DuplicateReview and leaves no second row and no extra points
        #[tokio::test]
        async fn rejects_duplicate_review() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;
            test.achievement().seed_category(Category::Turkish).await?;

            let draft = draft_for_candidate("ext-1");

            let review_service = ReviewService::new(&test.state.db);
            let first = review_service.submit_review(user.id, &draft).await;
            assert!(first.is_ok());

            let points_after_first = {
                let user_repo = crate::server::data::user::UserRepository::new(&test.state.db);
                user_repo.get_by_id(user.id).await?.unwrap().points
            };

            let second = review_service.submit_review(user.id, &draft).await;

            assert!(matches!(
                second,
                Err(Error::ReviewError(ReviewError::DuplicateReview { .. }))
            ));

            let review_repo = ReviewRepository::new(&test.state.db);
            let count = review_repo.count_by_place(first.unwrap().review.place_id).await?;
            assert_eq!(count, 1);

            let user_repo = crate::server::data::user::UserRepository::new(&test.state.db);
            assert_eq!(user_repo.get_by_id(user.id).await?.unwrap().points, points_after_first);

            Ok(())
        }

        /// A review for an already-reviewed place earns no first-review bonus
        #[tokio::test]
        async fn no_first_review_bonus_for_reviewed_place() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let first_user = test.user().insert_user("sub-1").await?;
            let second_user = test.user().insert_user("sub-2").await?;
            let place = test.place().insert_place("ext-1").await?;
            test.review()
                .insert_review(first_user.id, place.id, Category::Turkish)
                .await?;

            let mut draft = draft_for_candidate("ext-1");
            draft.place_id = Some(place.id.to_string());

            let review_service = ReviewService::new(&test.state.db);
            let result = review_service.submit_review(second_user.id, &draft).await;

            assert!(result.is_ok());
            let submission = result.unwrap();
            assert_eq!(submission.points.first_review_bonus, 0);
            assert_eq!(submission.points.total_points, 100);

            Ok(())
        }

        /// A temporary place id is re-resolved from the embedded candidate
        #[tokio::test]
        async fn re_resolves_temporary_place_id() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;

            let mut draft = draft_for_candidate("ext-1");
            draft.place_id = Some("temp-a1b2c3d4e5f6".to_string());

            let review_service = ReviewService::new(&test.state.db);
            let result = review_service.submit_review(user.id, &draft).await;

            assert!(result.is_ok());

            let place_repo = crate::server::data::place::PlaceRepository::new(&test.state.db);
            let place = place_repo.find_by_external_id("ext-1").await?;
            assert!(place.is_some());

            Ok(())
        }

        /// A draft with no durable id and no candidate cannot be submitted
        #[tokio::test]
        async fn fails_without_place_reference() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;

            let mut draft = draft_for_candidate("ext-1");
            draft.place_id = None;
            draft.place = None;

            let review_service = ReviewService::new(&test.state.db);
            let result = review_service.submit_review(user.id, &draft).await;

            assert!(matches!(
                result,
                Err(Error::PlaceError(PlaceError::IncompletePlaceData))
            ));

            Ok(())
        }

        /// Sub-ratings outside 1-10 are rejected before any write
        #[tokio::test]
        async fn rejects_out_of_range_rating() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;

            let mut draft = draft_for_candidate("ext-1");
            draft.ratings.service = 11;

            let review_service = ReviewService::new(&test.state.db);
            let result = review_service.submit_review(user.id, &draft).await;

            assert!(matches!(
                result,
                Err(Error::ReviewError(ReviewError::InvalidRating {
                    field: "service",
                    value: 11
                }))
            ));

            Ok(())
        }

        /// More than six photos are rejected before any write
        #[tokio::test]
        async fn rejects_too_many_photos() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;

            let mut draft = draft_for_candidate("ext-1");
            draft.photo_urls = (0..7).map(|i| format!("https://blob.example/{}.jpg", i)).collect();

            let review_service = ReviewService::new(&test.state.db);
            let result = review_service.submit_review(user.id, &draft).await;

            assert!(matches!(
                result,
                Err(Error::ReviewError(ReviewError::TooManyPhotos { max: 6, count: 7 }))
            ));

            Ok(())
        }

        /// Place aggregates update in the same transaction as the insert
        #[tokio::test]
        async fn updates_place_aggregates() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;

            let draft = draft_for_candidate("ext-1");

            let review_service = ReviewService::new(&test.state.db);
            let submission = review_service.submit_review(user.id, &draft).await.unwrap();

            let place_repo = crate::server::data::place::PlaceRepository::new(&test.state.db);
            let place = place_repo
                .find_by_id(submission.review.place_id)
                .await?
                .unwrap();

            assert_eq!(place.total_reviews, 1);
            assert_eq!(place.category, Some(Category::Turkish));
            assert!((place.average_rating - submission.review.overall_rating).abs() < 1e-9);

            Ok(())
        }

        /// Achievement evaluation failure is non-fatal: the review commits
        /// and the unlock list is empty
        #[tokio::test]
        async fn achievement_failure_does_not_fail_submission() -> Result<(), TestError> {
            // No achievement/user_achievement tables: evaluation will error
            let mut test = test_setup_with_tables!(
                entity::prelude::SavoraUser,
                entity::prelude::Place,
                entity::prelude::Review,
                entity::prelude::Notification
            )?;
            let user = test.user().insert_user("sub-1").await?;

            let draft = draft_for_candidate("ext-1");

            let review_service = ReviewService::new(&test.state.db);
            let result = review_service.submit_review(user.id, &draft).await;

            assert!(result.is_ok());
            let submission = result.unwrap();
            assert!(submission.unlocked_achievements.is_empty());

            let review_repo = ReviewRepository::new(&test.state.db);
            let count = review_repo.count_by_place(submission.review.place_id).await?;
            assert_eq!(count, 1);

            Ok(())
        }
    }
}
