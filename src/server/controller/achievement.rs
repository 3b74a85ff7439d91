use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{achievement::AchievementProgressDto, api::ErrorDto},
    server::{
        controller::util::get_user::require_user_id, error::Error, model::app::AppState,
        service::achievement::AchievementService,
    },
};

pub static ACHIEVEMENT_TAG: &str = "achievement";

/// Get the logged in user's progress for every achievement
#[utoipa::path(
    get,
    path = "/api/achievements/progress",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "Per-achievement progress", body = Vec<AchievementProgressDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_achievement_progress(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let achievement_service = AchievementService::new(&state.db);

    let progress = achievement_service.category_progress(user_id).await?;

    Ok((StatusCode::OK, Json(progress)))
}

/// Get the nearest incomplete achievements across categories
///
/// At most six candidates: one representative per category, progressed
/// categories first.
#[utoipa::path(
    get,
    path = "/api/achievements/incomplete",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "Top incomplete achievement candidates", body = Vec<AchievementProgressDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_incomplete_achievements(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let achievement_service = AchievementService::new(&state.db);

    let candidates = achievement_service.incomplete_achievements(user_id).await?;

    Ok((StatusCode::OK, Json(candidates)))
}
