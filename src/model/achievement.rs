use entity::category::Category;
use serde::{Deserialize, Serialize};

/// Per-achievement progress for one user
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AchievementProgressDto {
    pub achievement_id: i32,
    #[schema(value_type = String)]
    pub category: Category,
    pub category_label: String,
    pub level: i16,
    pub name: String,
    pub description: String,
    pub required_reviews: i32,
    pub points_reward: i32,
    pub current_progress: i64,
    pub progress_percentage: f64,
    pub is_unlocked: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnlockedAchievementDto {
    pub achievement_id: i32,
    #[schema(value_type = String)]
    pub category: Category,
    pub level: i16,
    pub name: String,
    pub points_reward: i32,
}

impl From<entity::achievement::Model> for UnlockedAchievementDto {
    fn from(achievement: entity::achievement::Model) -> Self {
        Self {
            achievement_id: achievement.id,
            category: achievement.category,
            level: achievement.level,
            name: achievement.name,
            points_reward: achievement.points_reward,
        }
    }
}
