use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PlaceError {
    #[error("Place candidate is missing an external identifier")]
    IncompletePlaceData,
    #[error("Place ID {0:?} not found")]
    PlaceNotFound(i32),
    #[error("Failed to resolve place for external ID {external_id:?}: {reason}")]
    ResolutionFailed { external_id: String, reason: String },
}

impl IntoResponse for PlaceError {
    fn into_response(self) -> Response {
        match self {
            Self::IncompletePlaceData => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: "The selected place is missing required information".to_string(),
                }),
            )
                .into_response(),
            Self::PlaceNotFound(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Place not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::ResolutionFailed { .. } => {
                tracing::error!("{}", self);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Could not save the selected place, please try again".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
