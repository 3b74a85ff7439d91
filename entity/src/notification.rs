use sea_orm::entity::prelude::*;

use crate::notification_kind::NotificationKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: NotificationKind,
    pub payload: Json,
    pub is_read: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::savora_user::Entity",
        from = "Column::UserId",
        to = "super::savora_user::Column::Id"
    )]
    SavoraUser,
}

impl Related<super::savora_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavoraUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
