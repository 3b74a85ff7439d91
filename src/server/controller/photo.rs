use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, review::PhotoUploadResultDto},
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::photo::{PhotoService, PhotoUpload},
    },
};

pub static PHOTO_TAG: &str = "photo";

/// Upload review photos
///
/// Accepts up to six image files in one multipart request, uploads them in
/// parallel, and reports per-file failures next to the successful URLs. The
/// returned URLs go into the review draft's photo list.
#[utoipa::path(
    post,
    path = "/api/review/photos",
    tag = PHOTO_TAG,
    responses(
        (status = 200, description = "Upload outcome per file", body = PhotoUploadResultDto),
        (status = 400, description = "Too many photos", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_photos(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::ParseError(format!("Invalid multipart field: {}", e)))?
    {
        let file_name = field.file_name().unwrap_or("photo.jpg").to_string();
        let content_type = field.content_type().unwrap_or("image/jpeg").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::ParseError(format!("Failed to read upload: {}", e)))?
            .to_vec();

        files.push(PhotoUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    let photo_service = PhotoService::new(&state.storage_client);

    let result = photo_service.upload_review_photos(user_id, files).await?;

    Ok((StatusCode::OK, Json(result)))
}
