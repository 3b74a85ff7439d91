//! Achievement evaluation and progress aggregation across services.

use entity::category::Category;
use savora::server::service::achievement::AchievementService;
use savora_test_utils::prelude::*;

/// Evaluating twice after one threshold-crossing review emits the unlock
/// exactly once across both calls combined
#[tokio::test]
async fn evaluation_is_idempotent_across_calls() -> Result<(), TestError> {
    let mut test = test_setup_with_review_tables!()?;
    let user = test.user().insert_user("sub-1").await?;
    let place = test.place().insert_place("ext-1").await?;
    test.achievement().seed_category(Category::Turkish).await?;
    test.review()
        .insert_review(user.id, place.id, Category::Turkish)
        .await?;

    let achievement_service = AchievementService::new(&test.state.db);

    let first = achievement_service
        .check_and_grant(user.id, Category::Turkish)
        .await
        .unwrap();
    let second = achievement_service
        .check_and_grant(user.id, Category::Turkish)
        .await
        .unwrap();

    assert_eq!(first.len() + second.len(), 1);

    Ok(())
}

/// Incomplete-achievement candidates order progressed categories first, then
/// zero-progress categories by ascending level
#[tokio::test]
async fn incomplete_candidates_follow_tie_break_policy() -> Result<(), TestError> {
    let mut test = test_setup_with_review_tables!()?;
    let user = test.user().insert_user("sub-1").await?;
    test.achievement().seed_category(Category::Turkish).await?;
    test.achievement().seed_category(Category::Italian).await?;

    // Two Turkish reviews: level 1 unlocked, level 2 at 40%
    for i in 0..2 {
        let place = test.place().insert_place(&format!("ext-{}", i)).await?;
        test.review()
            .insert_review(user.id, place.id, Category::Turkish)
            .await?;
    }

    let achievement_service = AchievementService::new(&test.state.db);
    achievement_service
        .check_and_grant(user.id, Category::Turkish)
        .await
        .unwrap();

    let candidates = achievement_service
        .incomplete_achievements(user.id)
        .await
        .unwrap();

    assert_eq!(candidates.len(), 2);

    // Turkish has progress toward level 2; Italian has none and starts at
    // level 1
    assert_eq!(candidates[0].category, Category::Turkish);
    assert_eq!(candidates[0].level, 2);
    assert_eq!(candidates[0].current_progress, 2);

    assert_eq!(candidates[1].category, Category::Italian);
    assert_eq!(candidates[1].level, 1);
    assert_eq!(candidates[1].current_progress, 0);

    Ok(())
}

/// Progress percentages reflect review counts against thresholds
#[tokio::test]
async fn progress_percentages_track_review_counts() -> Result<(), TestError> {
    let mut test = test_setup_with_review_tables!()?;
    let user = test.user().insert_user("sub-1").await?;
    test.achievement().seed_category(Category::Seafood).await?;

    for i in 0..3 {
        let place = test.place().insert_place(&format!("ext-{}", i)).await?;
        test.review()
            .insert_review(user.id, place.id, Category::Seafood)
            .await?;
    }

    let achievement_service = AchievementService::new(&test.state.db);
    let progress = achievement_service.category_progress(user.id).await.unwrap();

    let level2 = progress
        .iter()
        .find(|p| p.category == Category::Seafood && p.level == 2)
        .unwrap();

    assert_eq!(level2.current_progress, 3);
    assert_eq!(level2.progress_percentage, 60.0);

    Ok(())
}
