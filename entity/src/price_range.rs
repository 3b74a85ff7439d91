use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Price bucket selected by the reviewer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    #[sea_orm(string_value = "budget")]
    Budget,
    #[sea_orm(string_value = "moderate")]
    Moderate,
    #[sea_orm(string_value = "upscale")]
    Upscale,
    #[sea_orm(string_value = "luxury")]
    Luxury,
}
