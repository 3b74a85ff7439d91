//! Notification service.
//!
//! Persists typed notifications and fans them out over a redis pub/sub
//! channel keyed by user id. Publish failures are logged, never fatal; the
//! subscribing client reconciles by notification id and ignores duplicates.

use entity::notification_kind::NotificationKind;
use fred::interfaces::PubsubInterface;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    model::{
        achievement::UnlockedAchievementDto,
        notification::{NotificationDto, NotificationListDto},
        review::{PointsBreakdownDto, ReviewDto},
    },
    server::{data::notification::NotificationRepository, error::Error},
};

fn channel_for_user(user_id: i32) -> String {
    format!("savora:notifications:{}", user_id)
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    publisher: Option<&'a fred::prelude::Pool>,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`] without pub/sub
    /// fan-out; notifications are still persisted
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            publisher: None,
        }
    }

    /// Attach a redis pool for real-time fan-out
    pub fn with_publisher(mut self, pool: &'a fred::prelude::Pool) -> Self {
        self.publisher = Some(pool);
        self
    }

    async fn notify(
        &self,
        user_id: i32,
        kind: NotificationKind,
        payload: serde_json::Value,
    ) -> Result<NotificationDto, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        let notification = notification_repo.create(user_id, kind, payload).await?;
        let dto = NotificationDto::from(notification);

        if let Some(pool) = self.publisher {
            let message = serde_json::to_string(&dto)
                .map_err(|e| Error::ParseError(format!("Failed to serialize notification: {}", e)))?;

            if let Err(e) = pool
                .next()
                .publish::<i64, _, _>(channel_for_user(user_id), message)
                .await
            {
                tracing::warn!(
                    user_id = %user_id,
                    "Failed to publish notification, client will catch up on next fetch: {:?}",
                    e
                );
            }
        }

        Ok(dto)
    }

    pub async fn notify_review_published(
        &self,
        user_id: i32,
        review: &ReviewDto,
    ) -> Result<NotificationDto, Error> {
        self.notify(
            user_id,
            NotificationKind::ReviewPublished,
            json!({
                "review_id": review.id,
                "place_id": review.place_id,
                "category": review.category,
            }),
        )
        .await
    }

    pub async fn notify_points_earned(
        &self,
        user_id: i32,
        breakdown: &PointsBreakdownDto,
    ) -> Result<NotificationDto, Error> {
        self.notify(
            user_id,
            NotificationKind::PointsEarned,
            json!({
                "base_points": breakdown.base_points,
                "first_review_bonus": breakdown.first_review_bonus,
                "photo_bonus": breakdown.photo_bonus,
                "extended_review_bonus": breakdown.extended_review_bonus,
                "total_points": breakdown.total_points,
            }),
        )
        .await
    }

    pub async fn notify_achievement_unlocked(
        &self,
        user_id: i32,
        unlocked: &UnlockedAchievementDto,
    ) -> Result<NotificationDto, Error> {
        self.notify(
            user_id,
            NotificationKind::AchievementUnlocked,
            json!({
                "achievement_id": unlocked.achievement_id,
                "category": unlocked.category,
                "level": unlocked.level,
                "name": unlocked.name,
                "points_reward": unlocked.points_reward,
            }),
        )
        .await
    }

    pub async fn notify_level_up(
        &self,
        user_id: i32,
        level: u32,
    ) -> Result<NotificationDto, Error> {
        self.notify(
            user_id,
            NotificationKind::LevelUp,
            json!({ "level": level }),
        )
        .await
    }

    pub async fn list(
        &self,
        user_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<NotificationListDto, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        let notifications = notification_repo
            .list_by_user(user_id, limit, offset)
            .await?
            .into_iter()
            .map(NotificationDto::from)
            .collect();

        let unread_count = notification_repo.unread_count(user_id).await?;

        Ok(NotificationListDto {
            notifications,
            unread_count,
        })
    }

    pub async fn mark_read(&self, user_id: i32, notification_id: i32) -> Result<bool, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        let marked = notification_repo.mark_read(notification_id, user_id).await?;

        Ok(marked)
    }
}

#[cfg(test)]
mod tests {
    use savora_test_utils::prelude::*;

    use crate::model::review::PointsBreakdownDto;

    use super::*;

    /// Expect notifications to persist and page newest-first
    #[tokio::test]
    async fn persists_and_lists_notifications() -> Result<(), TestError> {
        let mut test = test_setup_with_review_tables!()?;
        let user = test.user().insert_user("sub-1").await?;

        let notification_service = NotificationService::new(&test.state.db);

        let breakdown = PointsBreakdownDto {
            base_points: 100,
            first_review_bonus: 500,
            photo_bonus: 50,
            extended_review_bonus: 50,
            total_points: 700,
        };
        notification_service
            .notify_points_earned(user.id, &breakdown)
            .await
            .unwrap();
        notification_service
            .notify_level_up(user.id, 2)
            .await
            .unwrap();

        let list = notification_service.list(user.id, 10, 0).await.unwrap();

        assert_eq!(list.notifications.len(), 2);
        assert_eq!(list.unread_count, 2);

        Ok(())
    }
}
