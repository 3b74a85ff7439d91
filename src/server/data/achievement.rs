use chrono::Utc;
use entity::category::Category;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct AchievementRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AchievementRepository<'a, C> {
    /// Creates a new instance of [`AchievementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Achievement definitions for one category, ascending by level
    pub async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<entity::achievement::Model>, DbErr> {
        entity::prelude::Achievement::find()
            .filter(entity::achievement::Column::Category.eq(category))
            .order_by_asc(entity::achievement::Column::Level)
            .all(self.db)
            .await
    }

    /// Every achievement definition, ordered by category then level
    pub async fn list_all(&self) -> Result<Vec<entity::achievement::Model>, DbErr> {
        entity::prelude::Achievement::find()
            .order_by_asc(entity::achievement::Column::Category)
            .order_by_asc(entity::achievement::Column::Level)
            .all(self.db)
            .await
    }

    /// IDs of achievements already granted to the user
    pub async fn granted_achievement_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let grants = entity::prelude::UserAchievement::find()
            .filter(entity::user_achievement::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(grants.into_iter().map(|grant| grant.achievement_id).collect())
    }

    /// Records a grant, keyed by the (user_id, achievement_id) unique index.
    ///
    /// Returns true when this call inserted the grant, false when it was
    /// already present; re-running evaluation therefore never re-emits an
    /// unlock.
    pub async fn grant(&self, user_id: i32, achievement_id: i32) -> Result<bool, DbErr> {
        let grant = entity::user_achievement::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            achievement_id: ActiveValue::Set(achievement_id),
            unlocked_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let rows_affected = entity::prelude::UserAchievement::insert(grant)
            .on_conflict(
                OnConflict::columns([
                    entity::user_achievement::Column::UserId,
                    entity::user_achievement::Column::AchievementId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(rows_affected == 1)
    }
}

#[cfg(test)]
mod tests {
    use entity::category::Category;
    use savora_test_utils::prelude::*;

    use super::*;

    mod grant {
        use super::*;

        /// Expect true on first grant, false on repeat
        #[tokio::test]
        async fn grant_is_idempotent() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let user = test.user().insert_user("sub-1").await?;
            let achievements = test.achievement().seed_category(Category::Turkish).await?;

            let achievement_repo = AchievementRepository::new(&test.state.db);

            let first = achievement_repo.grant(user.id, achievements[0].id).await?;
            let second = achievement_repo.grant(user.id, achievements[0].id).await?;

            assert!(first);
            assert!(!second);

            Ok(())
        }
    }

    mod list_by_category {
        use super::*;

        /// Expect definitions ordered by ascending level
        #[tokio::test]
        async fn orders_by_level() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            test.achievement().seed_category(Category::Turkish).await?;
            test.achievement().seed_category(Category::Cafe).await?;

            let achievement_repo = AchievementRepository::new(&test.state.db);
            let achievements = achievement_repo.list_by_category(Category::Turkish).await?;

            assert_eq!(achievements.len(), 5);
            let levels: Vec<i16> = achievements.iter().map(|a| a.level).collect();
            assert_eq!(levels, vec![1, 2, 3, 4, 5]);

            Ok(())
        }
    }
}
