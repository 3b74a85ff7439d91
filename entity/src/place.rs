use sea_orm::entity::prelude::*;

use crate::category::Category;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "place")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stable identifier issued by the external mapping API
    #[sea_orm(unique)]
    pub external_id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Unset until the first review assigns one; never overwritten by
    /// external place data
    pub category: Option<Category>,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub created_at: DateTime,
    pub refreshed_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
