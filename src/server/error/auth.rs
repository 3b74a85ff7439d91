use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    Unauthorized,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
    #[error("Failed to exchange authorization code with the auth provider: {0}")]
    TokenExchangeFailed(String),
    #[error("Failed to fetch user info from the auth provider: {0}")]
    UserInfoFailed(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => {
                tracing::debug!("{}", Self::Unauthorized);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "You must be logged in to do that".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", Self::CsrfValidationFailed);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfMissingValue => InternalServerError(self).into_response(),
            Self::TokenExchangeFailed(_) | Self::UserInfoFailed(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}
