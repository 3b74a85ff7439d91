use sea_orm::entity::prelude::*;

use crate::category::Category;

/// Read-only reference data seeded by migration; one ladder of levels per
/// category.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "achievement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: Category,
    pub level: i16,
    pub name: String,
    pub description: String,
    pub required_reviews: i32,
    pub points_reward: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_achievement::Entity")]
    UserAchievement,
}

impl Related<super::user_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAchievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
