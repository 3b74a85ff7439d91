use entity::category::Category;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Ladder used by the production seed migration; tests create schema from
/// entities, so reference data is inserted through this fixture instead.
pub static LEVELS: &[(i16, &str, i32, i32)] = &[
    (1, "Novice", 1, 50),
    (2, "Explorer", 5, 100),
    (3, "Enthusiast", 15, 250),
    (4, "Connoisseur", 30, 500),
    (5, "Legend", 50, 1000),
];

pub struct AchievementFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementFixture<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the five-level ladder for one category
    pub async fn seed_category(
        &self,
        category: Category,
    ) -> Result<Vec<entity::achievement::Model>, TestError> {
        let mut models = Vec::with_capacity(LEVELS.len());

        for (level, title, required_reviews, points_reward) in LEVELS {
            let achievement = entity::achievement::ActiveModel {
                category: ActiveValue::Set(category),
                level: ActiveValue::Set(*level),
                name: ActiveValue::Set(format!("{} {}", category.label(), title)),
                description: ActiveValue::Set(format!(
                    "Review {} {} places",
                    required_reviews,
                    category.label()
                )),
                required_reviews: ActiveValue::Set(*required_reviews),
                points_reward: ActiveValue::Set(*points_reward),
                ..Default::default()
            };

            models.push(achievement.insert(self.db).await?);
        }

        Ok(models)
    }
}
