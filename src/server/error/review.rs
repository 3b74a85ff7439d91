use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("User {user_id:?} already has a review for place {place_id:?}")]
    DuplicateReview { user_id: i32, place_id: i32 },
    #[error("Rating {field:?} must be between 1 and 10, got {value}")]
    InvalidRating { field: &'static str, value: i16 },
    #[error("At most {max} photos are allowed per review, got {count}")]
    TooManyPhotos { max: usize, count: usize },
    #[error("Failed to insert review: {0}")]
    InsertFailed(#[source] sea_orm::DbErr),
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicateReview { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "You have already reviewed this place".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidRating { field, value } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Rating '{}' must be between 1 and 10, got {}", field, value),
                }),
            )
                .into_response(),
            Self::TooManyPhotos { max, count } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("At most {} photos are allowed per review, got {}", max, count),
                }),
            )
                .into_response(),
            Self::InsertFailed(_) => InternalServerError(self).into_response(),
        }
    }
}
