//! End-to-end review submission flow across services.

use entity::{category::Category, notification_kind::NotificationKind, price_range::PriceRange};
use savora::model::{
    place::PlaceCandidateDto,
    review::{RatingsDto, ReviewDraftDto},
};
use savora::server::service::{
    notification::NotificationService, review::ReviewService, user::UserService,
};
use savora_test_utils::prelude::*;

fn draft(external_id: &str, category: Category) -> ReviewDraftDto {
    ReviewDraftDto {
        place_id: None,
        place: Some(PlaceCandidateDto {
            external_id: external_id.to_string(),
            name: "Kebabistan".to_string(),
            address: "1 Main St, Ankara".to_string(),
            latitude: 39.9,
            longitude: 32.8,
            phone: None,
            website: None,
        }),
        dish_name: None,
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
        comment: "a".repeat(310),
        photo_urls: vec!["https://blob.example/review-photos/1.jpg".to_string()],
    }
}

/// A first review with a photo and a long comment drives the whole chain:
/// 700-point breakdown, a level-1 unlock, a level-up, and one notification
/// per event
#[tokio::test]
async fn full_submission_chain_produces_points_unlocks_and_notifications(
) -> Result<(), TestError> {
    let mut test = test_setup_with_review_tables!()?;
    let user = test.user().insert_user("sub-1").await?;
    test.achievement().seed_category(Category::Turkish).await?;

    let review_service = ReviewService::new(&test.state.db);
    let submission = review_service
        .submit_review(user.id, &draft("ext-1", Category::Turkish))
        .await
        .unwrap();

    assert_eq!(submission.points.total_points, 700);
    assert_eq!(submission.unlocked_achievements.len(), 1);
    assert_eq!(submission.unlocked_achievements[0].level, 1);

    // 700 submission points + 50 unlock reward crosses the level-2 threshold
    let user_service = UserService::new(&test.state.db);
    let user_dto = user_service.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(user_dto.points, 750);
    assert_eq!(user_dto.level, 2);

    let notification_service = NotificationService::new(&test.state.db);
    let list = notification_service.list(user.id, 10, 0).await.unwrap();

    let kinds: Vec<NotificationKind> = list.notifications.iter().map(|n| n.kind).collect();
    assert_eq!(list.notifications.len(), 4);
    assert!(kinds.contains(&NotificationKind::ReviewPublished));
    assert!(kinds.contains(&NotificationKind::PointsEarned));
    assert!(kinds.contains(&NotificationKind::AchievementUnlocked));
    assert!(kinds.contains(&NotificationKind::LevelUp));

    Ok(())
}

/// A duplicate submission is rejected and awards nothing further
#[tokio::test]
async fn duplicate_submission_awards_nothing() -> Result<(), TestError> {
    let mut test = test_setup_with_review_tables!()?;
    let user = test.user().insert_user("sub-1").await?;
    test.achievement().seed_category(Category::Turkish).await?;

    let review_service = ReviewService::new(&test.state.db);
    review_service
        .submit_review(user.id, &draft("ext-1", Category::Turkish))
        .await
        .unwrap();

    let user_service = UserService::new(&test.state.db);
    let points_after_first = user_service.get_user(user.id).await.unwrap().unwrap().points;

    let second = review_service
        .submit_review(user.id, &draft("ext-1", Category::Turkish))
        .await;

    assert!(second.is_err());
    assert_eq!(
        user_service.get_user(user.id).await.unwrap().unwrap().points,
        points_after_first
    );

    Ok(())
}

/// Reviews in a second category resolve distinct places and keep per-category
/// achievement progress separate
#[tokio::test]
async fn per_category_progress_stays_separate() -> Result<(), TestError> {
    let mut test = test_setup_with_review_tables!()?;
    let user = test.user().insert_user("sub-1").await?;
    test.achievement().seed_category(Category::Turkish).await?;
    test.achievement().seed_category(Category::Cafe).await?;

    let review_service = ReviewService::new(&test.state.db);

    let turkish = review_service
        .submit_review(user.id, &draft("ext-1", Category::Turkish))
        .await
        .unwrap();
    let cafe = review_service
        .submit_review(user.id, &draft("ext-2", Category::Cafe))
        .await
        .unwrap();

    // Each category unlocks its own level-1 achievement independently
    assert_eq!(turkish.unlocked_achievements.len(), 1);
    assert_eq!(turkish.unlocked_achievements[0].category, Category::Turkish);
    assert_eq!(cafe.unlocked_achievements.len(), 1);
    assert_eq!(cafe.unlocked_achievements[0].category, Category::Cafe);

    Ok(())
}
