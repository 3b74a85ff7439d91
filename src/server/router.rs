//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications
//! via utoipa, and Swagger UI serves interactive documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/login` - Initiate login with the external auth provider
/// - `GET /api/auth/callback` - OAuth callback handler
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user with points and level
/// - `GET /api/place/search` - Search nearby food places
/// - `POST /api/place/resolve` - Resolve a candidate into a local place
/// - `GET /api/place/{id}` - Get a place
/// - `GET /api/place/{id}/reviews` - Get a place's reviews
/// - `POST /api/review` - Submit a review
/// - `POST /api/review/enhance` - Improve review prose (best-effort)
/// - `POST /api/review/photos` - Upload review photos
/// - `GET /api/user/reviews` - Current user's reviews
/// - `GET /api/achievements/progress` - Per-achievement progress
/// - `GET /api/achievements/incomplete` - Nearest incomplete achievements
/// - `GET /api/notifications` - Notifications with unread count
/// - `POST /api/notifications/{id}/read` - Mark a notification read
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Savora", description = "Savora API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::place::PLACE_TAG, description = "Place search and resolution routes"),
        (name = controller::review::REVIEW_TAG, description = "Review submission routes"),
        (name = controller::photo::PHOTO_TAG, description = "Review photo upload routes"),
        (name = controller::achievement::ACHIEVEMENT_TAG, description = "Achievement progress routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Notification routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::place::search_places))
        .routes(routes!(controller::place::resolve_place))
        .routes(routes!(controller::place::get_place))
        .routes(routes!(controller::place::get_place_reviews))
        .routes(routes!(controller::review::submit_review))
        .routes(routes!(controller::review::enhance_review_text))
        .routes(routes!(controller::review::get_user_reviews))
        .routes(routes!(controller::photo::upload_photos))
        .routes(routes!(controller::achievement::get_achievement_progress))
        .routes(routes!(controller::achievement::get_incomplete_achievements))
        .routes(routes!(controller::notification::get_notifications))
        .routes(routes!(controller::notification::mark_notification_read))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
