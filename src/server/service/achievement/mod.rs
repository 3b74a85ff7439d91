//! Achievement evaluation and progress aggregation.
//!
//! Grant evaluation runs after a review insert and is idempotent per
//! (user, achievement): the unique-constraint-keyed insert in the repository
//! is the atomic substitute for a cross-call transaction.

pub mod progress;

use std::collections::{HashMap, HashSet};

use entity::category::Category;
use sea_orm::DatabaseConnection;

use crate::{
    model::achievement::{AchievementProgressDto, UnlockedAchievementDto},
    server::{
        data::{
            achievement::AchievementRepository, review::ReviewRepository, user::UserRepository,
        },
        error::{achievement::AchievementError, Error},
        service::notification::NotificationService,
    },
};

pub struct AchievementService<'a> {
    db: &'a DatabaseConnection,
    publisher: Option<&'a fred::prelude::Pool>,
}

impl<'a> AchievementService<'a> {
    /// Creates a new instance of [`AchievementService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            publisher: None,
        }
    }

    /// Attach a redis pool so unlock notifications fan out in real time
    pub fn with_publisher(mut self, pool: &'a fred::prelude::Pool) -> Self {
        self.publisher = Some(pool);
        self
    }

    /// Evaluate the user's progress in a category and grant every newly
    /// crossed achievement.
    ///
    /// Progress counts the just-submitted review; newly unlocked achievements
    /// are returned ordered by ascending level, each credited once with its
    /// points reward and an unlock notification. Re-running after a grant
    /// emits nothing for it.
    pub async fn check_and_grant(
        &self,
        user_id: i32,
        category: Category,
    ) -> Result<Vec<UnlockedAchievementDto>, Error> {
        self.evaluate(user_id, category).await.map_err(|e| {
            AchievementError::EvaluationFailed {
                user_id,
                reason: e.to_string(),
            }
            .into()
        })
    }

    async fn evaluate(
        &self,
        user_id: i32,
        category: Category,
    ) -> Result<Vec<UnlockedAchievementDto>, Error> {
        let review_repo = ReviewRepository::new(self.db);
        let achievement_repo = AchievementRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let mut notification_service = NotificationService::new(self.db);
        if let Some(pool) = self.publisher {
            notification_service = notification_service.with_publisher(pool);
        }

        let current_progress = review_repo
            .count_by_user_and_category(user_id, category)
            .await? as i64;

        // Ascending level order from the repository carries through to the
        // emitted unlock list
        let definitions = achievement_repo.list_by_category(category).await?;

        let mut newly_unlocked = Vec::new();

        for definition in definitions {
            if (definition.required_reviews as i64) > current_progress {
                continue;
            }

            let granted_now = achievement_repo.grant(user_id, definition.id).await?;
            if !granted_now {
                continue;
            }

            user_repo
                .add_points(user_id, definition.points_reward)
                .await?;

            let unlocked = UnlockedAchievementDto::from(definition);
            notification_service
                .notify_achievement_unlocked(user_id, &unlocked)
                .await?;

            newly_unlocked.push(unlocked);
        }

        Ok(newly_unlocked)
    }

    /// Per-achievement progress for every category
    pub async fn category_progress(
        &self,
        user_id: i32,
    ) -> Result<Vec<AchievementProgressDto>, Error> {
        let review_repo = ReviewRepository::new(self.db);
        let achievement_repo = AchievementRepository::new(self.db);

        let definitions = achievement_repo.list_all().await?;
        let counts: HashMap<Category, i64> = review_repo
            .counts_by_category(user_id)
            .await?
            .into_iter()
            .collect();
        let granted: HashSet<i32> = achievement_repo
            .granted_achievement_ids(user_id)
            .await?
            .into_iter()
            .collect();

        let progress = definitions
            .into_iter()
            .map(|definition| {
                let current_progress = counts.get(&definition.category).copied().unwrap_or(0);
                let progress_percentage = ((current_progress as f64
                    / definition.required_reviews as f64)
                    * 100.0)
                    .min(100.0);

                AchievementProgressDto {
                    achievement_id: definition.id,
                    category: definition.category,
                    category_label: definition.category.label().to_string(),
                    level: definition.level,
                    name: definition.name,
                    description: definition.description,
                    required_reviews: definition.required_reviews,
                    points_reward: definition.points_reward,
                    current_progress,
                    progress_percentage,
                    is_unlocked: granted.contains(&definition.id),
                }
            })
            .collect();

        Ok(progress)
    }

    /// Top not-yet-unlocked candidates across categories, at most six
    pub async fn incomplete_achievements(
        &self,
        user_id: i32,
    ) -> Result<Vec<AchievementProgressDto>, Error> {
        let all = self.category_progress(user_id).await?;

        Ok(progress::select_incomplete(all))
    }
}
