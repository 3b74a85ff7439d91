use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{EnhanceRequestDto, EnhanceResponseDto, ReviewDraftDto, ReviewDto, ReviewSubmissionDto},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::review::{enhance::enhance_review, ReviewService},
    },
};

pub static REVIEW_TAG: &str = "review";

/// Submit a review
///
/// Resolves the draft's place if needed, enforces one review per user per
/// place, computes the points breakdown, and evaluates achievements. The
/// submission either fully succeeds or fully fails before persistence.
#[utoipa::path(
    post,
    path = "/api/review",
    tag = REVIEW_TAG,
    request_body = ReviewDraftDto,
    responses(
        (status = 200, description = "Review published with points and unlocks", body = ReviewSubmissionDto),
        (status = 400, description = "Invalid rating or too many photos", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Review already exists for this place", body = ErrorDto),
        (status = 422, description = "Place reference incomplete", body = ErrorDto),
        (status = 502, description = "Place resolution failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_review(
    State(state): State<AppState>,
    session: Session,
    Json(draft): Json<ReviewDraftDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let review_service = ReviewService::new(&state.db).with_publisher(&state.redis_pool);

    let submission = review_service.submit_review(user_id, &draft).await?;

    Ok((StatusCode::OK, Json(submission)))
}

/// Improve review prose with the language model
///
/// Best-effort: when the language model is unavailable the original text is
/// returned unchanged with `enhanced: false`.
#[utoipa::path(
    post,
    path = "/api/review/enhance",
    tag = REVIEW_TAG,
    request_body = EnhanceRequestDto,
    responses(
        (status = 200, description = "Enhanced (or original) review text", body = EnhanceResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enhance_review_text(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<EnhanceRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let _user_id = require_user_id(&session).await?;

    let response = enhance_review(&state.llm_client, &request).await;

    Ok((StatusCode::OK, Json(response)))
}

/// Get the logged in user's reviews, newest first
#[utoipa::path(
    get,
    path = "/api/user/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "The user's reviews", body = Vec<ReviewDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_reviews(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let review_service = ReviewService::new(&state.db);

    let reviews = review_service.reviews_for_user(user_id).await?;

    Ok((StatusCode::OK, Json(reviews)))
}
