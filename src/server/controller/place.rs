use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        place::{PlaceCandidateDto, PlaceDto, ResolvedPlaceDto},
        review::ReviewDto,
    },
    server::{
        controller::util::get_user::require_user_id,
        data::place::PlaceRepository,
        error::{place::PlaceError, Error},
        model::app::AppState,
        service::{
            place::{temporary_place_id, PlaceService},
            review::ReviewService,
        },
    },
};

pub static PLACE_TAG: &str = "place";

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Search food places near the configured reference point
///
/// Proxies the mapping API's text search, filtered to food-related places
/// inside the configured region.
#[utoipa::path(
    get,
    path = "/api/place/search",
    tag = PLACE_TAG,
    params(("query" = String, Query, description = "Free-text search query")),
    responses(
        (status = 200, description = "Matching place candidates", body = Vec<PlaceCandidateDto>),
        (status = 503, description = "Mapping API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_places(
    State(state): State<AppState>,
    params: Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let candidates = state.maps_client.text_search(&params.0.query).await?;

    Ok((StatusCode::OK, Json(candidates)))
}

/// Resolve a place candidate into a durable local place record
///
/// Idempotent by external id. When creation fails the response degrades to a
/// temporary placeholder id so the client can keep composing the review;
/// submission re-resolves it.
#[utoipa::path(
    post,
    path = "/api/place/resolve",
    tag = PLACE_TAG,
    request_body = PlaceCandidateDto,
    responses(
        (status = 200, description = "Durable or temporary place id", body = ResolvedPlaceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 422, description = "Candidate missing external id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_place(
    State(state): State<AppState>,
    session: Session,
    Json(candidate): Json<PlaceCandidateDto>,
) -> Result<impl IntoResponse, Error> {
    let _user_id = require_user_id(&session).await?;

    let place_service = PlaceService::new(&state.db);

    match place_service.resolve_or_create(&candidate).await {
        Ok(place) => Ok((
            StatusCode::OK,
            Json(ResolvedPlaceDto {
                id: place.id.to_string(),
                temporary: false,
            }),
        )),
        Err(Error::PlaceError(PlaceError::IncompletePlaceData)) => {
            Err(PlaceError::IncompletePlaceData.into())
        }
        Err(e) => {
            tracing::warn!(
                external_id = %candidate.external_id,
                "Place resolution failed, issuing temporary id: {:?}",
                e
            );

            Ok((
                StatusCode::OK,
                Json(ResolvedPlaceDto {
                    id: temporary_place_id(),
                    temporary: true,
                }),
            ))
        }
    }
}

/// Get a place by its local id
#[utoipa::path(
    get,
    path = "/api/place/{id}",
    tag = PLACE_TAG,
    params(("id" = i32, Path, description = "Local place id")),
    responses(
        (status = 200, description = "Place details", body = PlaceDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_place(
    State(state): State<AppState>,
    Path(place_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let place_repo = PlaceRepository::new(&state.db);

    let place = place_repo
        .find_by_id(place_id)
        .await?
        .ok_or(PlaceError::PlaceNotFound(place_id))?;

    Ok((StatusCode::OK, Json(PlaceDto::from(place))))
}

/// Get a place's reviews, newest first
#[utoipa::path(
    get,
    path = "/api/place/{id}/reviews",
    tag = PLACE_TAG,
    params(("id" = i32, Path, description = "Local place id")),
    responses(
        (status = 200, description = "Reviews for the place", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_place_reviews(
    State(state): State<AppState>,
    Path(place_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let review_service = ReviewService::new(&state.db);

    let reviews = review_service.reviews_for_place(place_id).await?;

    Ok((StatusCode::OK, Json(reviews)))
}
