use sea_orm::entity::prelude::*;

use crate::{category::Category, price_range::PriceRange};

/// One review per (user, place); enforced by a unique index in addition to
/// the application-layer duplicate check.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub place_id: i32,
    pub dish_name: Option<String>,
    pub food_taste: i16,
    pub presentation: i16,
    pub portion_size: i16,
    pub music_acoustics: i16,
    pub ambiance: i16,
    pub furniture_comfort: i16,
    pub service: i16,
    pub drinks_variety: i16,
    pub veggie_options: i16,
    pub price_range: PriceRange,
    /// Denormalized from the place at submission time
    pub category: Category,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    /// JSON array of 0-6 photo URLs
    pub photo_urls: Json,
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
    #[sea_orm(
        belongs_to = "super::place::Entity",
        from = "Column::PlaceId",
        to = "super::place::Column::Id"
    )]
    Place,
}

impl Related<super::savora_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavoraUser.def()
    }
}

impl Related<super::place::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Place.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
