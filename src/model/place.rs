use entity::category::Category;
use serde::{Deserialize, Serialize};

/// Externally-sourced place descriptor as returned by the mapping API's
/// text search; also the payload for resolving a place into a local record.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlaceCandidateDto {
    /// Stable identifier issued by the mapping API
    pub external_id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlaceDto {
    pub id: i32,
    pub external_id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[schema(value_type = Option<String>)]
    pub category: Option<Category>,
    pub category_label: Option<String>,
    pub average_rating: f64,
    pub total_reviews: i32,
}

impl From<entity::place::Model> for PlaceDto {
    fn from(place: entity::place::Model) -> Self {
        Self {
            id: place.id,
            external_id: place.external_id,
            name: place.name,
            address: place.address,
            phone: place.phone,
            website: place.website,
            latitude: place.latitude,
            longitude: place.longitude,
            category: place.category,
            category_label: place.category.map(|c| c.label().to_string()),
            average_rating: place.average_rating,
            total_reviews: place.total_reviews,
        }
    }
}

/// Result of resolving a candidate into a durable place record.
///
/// When resolution fails the id degrades to a `temp-` placeholder so the
/// client can continue composing the review; submission re-resolves it.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResolvedPlaceDto {
    /// Durable place id as a decimal string, or a `temp-` prefixed placeholder
    pub id: String,
    pub temporary: bool,
}
