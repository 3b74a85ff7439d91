use sea_orm::entity::prelude::*;

/// Grant record; the (user_id, achievement_id) unique index makes grant
/// evaluation idempotent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_achievement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub achievement_id: i32,
    pub unlocked_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::savora_user::Entity",
        from = "Column::UserId",
        to = "super::savora_user::Column::Id"
    )]
    SavoraUser,
    #[sea_orm(
        belongs_to = "super::achievement::Entity",
        from = "Column::AchievementId",
        to = "super::achievement::Column::Id"
    )]
    Achievement,
}

impl Related<super::savora_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavoraUser.def()
    }
}

impl Related<super::achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Achievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
