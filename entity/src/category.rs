use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cuisine/venue tag used both for place classification and achievement
/// grouping. The label/color table here is the single source of truth for
/// presentation metadata.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[sea_orm(string_value = "turkish")]
    Turkish,
    #[sea_orm(string_value = "italian")]
    Italian,
    #[sea_orm(string_value = "asian")]
    Asian,
    #[sea_orm(string_value = "fast_food")]
    FastFood,
    #[sea_orm(string_value = "seafood")]
    Seafood,
    #[sea_orm(string_value = "dessert")]
    Dessert,
    #[sea_orm(string_value = "cafe")]
    Cafe,
    #[sea_orm(string_value = "bakery")]
    Bakery,
    #[sea_orm(string_value = "street_food")]
    StreetFood,
    #[sea_orm(string_value = "vegan")]
    Vegan,
}

impl Category {
    /// Human-readable label shown in API responses and notifications
    pub fn label(&self) -> &'static str {
        match self {
            Self::Turkish => "Turkish",
            Self::Italian => "Italian",
            Self::Asian => "Asian",
            Self::FastFood => "Fast Food",
            Self::Seafood => "Seafood",
            Self::Dessert => "Dessert",
            Self::Cafe => "Cafe",
            Self::Bakery => "Bakery",
            Self::StreetFood => "Street Food",
            Self::Vegan => "Vegan",
        }
    }

    /// Accent color associated with the category
    pub fn color(&self) -> &'static str {
        match self {
            Self::Turkish => "#C0392B",
            Self::Italian => "#27AE60",
            Self::Asian => "#E67E22",
            Self::FastFood => "#F1C40F",
            Self::Seafood => "#2980B9",
            Self::Dessert => "#E91E8C",
            Self::Cafe => "#795548",
            Self::Bakery => "#D4A017",
            Self::StreetFood => "#8E44AD",
            Self::Vegan => "#16A085",
        }
    }
}
