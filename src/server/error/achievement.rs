use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Achievement evaluation failures never abort a committed review; the
/// submission path logs them and returns an empty unlock list instead of
/// surfacing this as an HTTP error.
#[derive(Error, Debug)]
pub enum AchievementError {
    #[error("Failed to evaluate achievements for user {user_id:?}: {reason}")]
    EvaluationFailed { user_id: i32, reason: String },
}

impl IntoResponse for AchievementError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
