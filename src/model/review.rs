use chrono::NaiveDateTime;
use entity::{category::Category, price_range::PriceRange};
use serde::{Deserialize, Serialize};

use crate::model::{achievement::UnlockedAchievementDto, place::PlaceCandidateDto};

/// The nine 1-10 sub-ratings of a detailed review
#[derive(Clone, Copy, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RatingsDto {
    pub food_taste: i16,
    pub presentation: i16,
    pub portion_size: i16,
    pub music_acoustics: i16,
    pub ambiance: i16,
    pub furniture_comfort: i16,
    pub service: i16,
    pub drinks_variety: i16,
    pub veggie_options: i16,
}

impl RatingsDto {
    pub fn as_array(&self) -> [i16; 9] {
        [
            self.food_taste,
            self.presentation,
            self.portion_size,
            self.music_acoustics,
            self.ambiance,
            self.furniture_comfort,
            self.service,
            self.drinks_variety,
            self.veggie_options,
        ]
    }
}

/// Review submission payload.
///
/// `place_id` is the id previously handed out by place resolution; it may be
/// absent or a `temp-` placeholder, in which case `place` must carry the
/// candidate to re-resolve from.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewDraftDto {
    pub place_id: Option<String>,
    pub place: Option<PlaceCandidateDto>,
    pub dish_name: Option<String>,
    pub ratings: RatingsDto,
    #[schema(value_type = String)]
    pub price_range: PriceRange,
    #[schema(value_type = String)]
    pub category: Category,
    pub comment: String,
    pub photo_urls: Vec<String>,
}

/// Itemized points awarded for one review submission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PointsBreakdownDto {
    pub base_points: i32,
    pub first_review_bonus: i32,
    pub photo_bonus: i32,
    pub extended_review_bonus: i32,
    pub total_points: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub place_id: i32,
    pub dish_name: Option<String>,
    pub ratings: RatingsDto,
    #[schema(value_type = String)]
    pub price_range: PriceRange,
    #[schema(value_type = String)]
    pub category: Category,
    pub comment: String,
    pub photo_urls: Vec<String>,
    /// Mean of the nine sub-ratings
    pub overall_rating: f64,
    pub created_at: NaiveDateTime,
}

impl From<entity::review::Model> for ReviewDto {
    fn from(review: entity::review::Model) -> Self {
        let ratings = RatingsDto {
            food_taste: review.food_taste,
            presentation: review.presentation,
            portion_size: review.portion_size,
            music_acoustics: review.music_acoustics,
            ambiance: review.ambiance,
            furniture_comfort: review.furniture_comfort,
            service: review.service,
            drinks_variety: review.drinks_variety,
            veggie_options: review.veggie_options,
        };

        let overall_rating = overall_rating(&ratings);

        let photo_urls = review
            .photo_urls
            .as_array()
            .map(|urls| {
                urls.iter()
                    .filter_map(|url| url.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: review.id,
            user_id: review.user_id,
            place_id: review.place_id,
            dish_name: review.dish_name,
            ratings,
            price_range: review.price_range,
            category: review.category,
            comment: review.comment,
            photo_urls,
            overall_rating,
            created_at: review.created_at,
        }
    }
}

/// Mean of the nine sub-ratings on the 1-10 scale
pub fn overall_rating(ratings: &RatingsDto) -> f64 {
    let sum: i32 = ratings.as_array().iter().map(|r| *r as i32).sum();

    sum as f64 / 9.0
}

/// Everything the client needs to present a successful submission
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewSubmissionDto {
    pub review: ReviewDto,
    pub points: PointsBreakdownDto,
    /// Newly unlocked achievements ordered by ascending level; empty when
    /// evaluation failed (non-fatal) or nothing was crossed
    pub unlocked_achievements: Vec<UnlockedAchievementDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EnhanceRequestDto {
    pub comment: String,
    pub place_name: String,
    #[schema(value_type = String)]
    pub category: Category,
    pub dish_name: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EnhanceResponseDto {
    pub comment: String,
    /// False when the language model was unavailable and the original text
    /// was returned unchanged
    pub enhanced: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PhotoUploadFailureDto {
    pub file_name: String,
    pub reason: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PhotoUploadResultDto {
    /// URLs of successfully stored photos, in upload order
    pub uploaded: Vec<String>,
    /// Per-file failures; reported, never silently dropped
    pub failed: Vec<PhotoUploadFailureDto>,
}
