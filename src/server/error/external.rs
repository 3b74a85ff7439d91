use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Failures talking to external collaborators (mapping API, language model,
/// blob store). Timeouts are folded into the corresponding variant by the
/// clients.
#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("Mapping API unavailable: {0}")]
    MapsUnavailable(String),
    #[error("Language model API unavailable: {0}")]
    LlmUnavailable(String),
    #[error("Blob store unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Unexpected response from external API: {0}")]
    UnexpectedResponse(String),
}

impl IntoResponse for ExternalError {
    fn into_response(self) -> Response {
        match self {
            Self::MapsUnavailable(_) | Self::LlmUnavailable(_) => {
                tracing::warn!("{}", self);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "An upstream service is temporarily unavailable, please try again"
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            Self::StorageUnavailable(_) | Self::UnexpectedResponse(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}
