//! Error types for the Savora server application.
//!
//! Domain-specific error enums (auth, config, place, review, achievement,
//! external APIs) aggregate into a single [`Error`] via `thiserror`'s
//! `#[from]` conversions. Every variant maps to an HTTP response through
//! `IntoResponse`; submission-path errors surface user-facing messages while
//! internal failures log and return a generic 500.

pub mod achievement;
pub mod auth;
pub mod config;
pub mod external;
pub mod place;
pub mod retry;
pub mod review;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        achievement::AchievementError, auth::AuthError, config::ConfigError,
        external::ExternalError, place::PlaceError, review::ReviewError,
    },
};

/// Main error type for the Savora server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, token exchange).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Place resolution error (incomplete candidate data, failed creation).
    #[error(transparent)]
    PlaceError(#[from] PlaceError),
    /// Review submission error (duplicate, validation, insert failure).
    #[error(transparent)]
    ReviewError(#[from] ReviewError),
    /// Achievement evaluation error (non-fatal on the submission path).
    #[error(transparent)]
    AchievementError(#[from] AchievementError),
    /// External API error (mapping, LLM, blob store).
    #[error(transparent)]
    ExternalError(#[from] ExternalError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Savora's code.
    #[error("Internal error with Savora's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Outbound HTTP error (request construction, network, timeout).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis error (session store, notification fan-out).
    #[error(transparent)]
    RedisError(#[from] fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PlaceError(err) => err.into_response(),
            Self::ReviewError(err) => err.into_response(),
            Self::AchievementError(err) => err.into_response(),
            Self::ExternalError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client so implementation details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
