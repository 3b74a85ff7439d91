use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "savora_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stable subject identifier issued by the external auth provider
    #[sea_orm(unique)]
    pub subject: String,
    pub email: String,
    pub display_name: String,
    pub points: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::user_achievement::Entity")]
    UserAchievement,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::user_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAchievement.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
