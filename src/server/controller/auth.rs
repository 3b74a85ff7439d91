use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::csrf::validate_csrf,
        error::Error,
        model::{
            app::AppState,
            session::{SessionAuthCsrf, SessionUserId},
        },
        service::{auth::callback::CallbackService, auth::login::login_service, user::UserService},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to initiate login with the external auth provider
///
/// Creates the provider login URL and redirects the user to it to begin the
/// login process.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the auth provider's login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.oauth_client);

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the user is redirected to after login at the auth provider
///
/// Validates the CSRF state, exchanges the authorization code, fetches the
/// provider identity, and stores the matching local user id in session.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Successful login, redirect to the app"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let callback_service = CallbackService::new(
        &state.db,
        &state.oauth_client,
        &state.http_client,
        &state.userinfo_url,
    );

    let user_id = callback_service.handle_callback(&params.0.code).await?;

    SessionUserId::insert(&session, user_id).await?;

    Ok(Redirect::temporary("/"))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Successfully logged out, redirect to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/api/auth/login"))
}

/// Get the currently logged in user with points and level
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user information", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user_id = SessionUserId::get(&session).await?;

    let user_id = if let Some(user_id) = user_id {
        user_id
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    };

    let user = if let Some(user) = user_service.get_user(user_id).await? {
        user
    } else {
        // Clear session for user not found in database
        session.clear().await;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session;
            cleared session for user, they will need to relog to fix",
            user_id
        );

        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(user)).into_response())
}
