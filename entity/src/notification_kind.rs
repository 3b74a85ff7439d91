use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[sea_orm(string_value = "achievement_unlocked")]
    AchievementUnlocked,
    #[sea_orm(string_value = "review_published")]
    ReviewPublished,
    #[sea_orm(string_value = "level_up")]
    LevelUp,
    #[sea_orm(string_value = "points_earned")]
    PointsEarned,
}
