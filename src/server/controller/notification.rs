use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, notification::NotificationListDto},
    server::{
        controller::util::get_user::require_user_id, error::Error, model::app::AppState,
        service::notification::NotificationService,
    },
};

pub static NOTIFICATION_TAG: &str = "notification";

const DEFAULT_PAGE_SIZE: u64 = 20;

#[derive(Deserialize)]
pub struct NotificationParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Get the logged in user's notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Page size, defaults to 20"),
        ("offset" = Option<u64>, Query, description = "Page offset, defaults to 0")
    ),
    responses(
        (status = 200, description = "Notifications with unread count", body = NotificationListDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    params: Query<NotificationParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let notification_service = NotificationService::new(&state.db);

    let list = notification_service
        .list(
            user_id,
            params.0.limit.unwrap_or(DEFAULT_PAGE_SIZE),
            params.0.offset.unwrap_or(0),
        )
        .await?;

    Ok((StatusCode::OK, Json(list)))
}

/// Mark one of the logged in user's notifications as read
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Notification marked as read"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let notification_service = NotificationService::new(&state.db);

    let marked = notification_service.mark_read(user_id, notification_id).await?;

    if !marked {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Notification not found".to_string(),
            }),
        )
            .into_response());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
