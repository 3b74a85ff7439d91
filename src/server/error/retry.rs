use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request, programming error)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Outbound HTTP errors - server errors and network issues are
            // transient, client errors indicate a flaw in our requests
            Error::HttpError(reqwest_error) => {
                if let Some(status) = reqwest_error.status() {
                    match status {
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,
                        s if s.is_client_error() => ErrorRetryStrategy::Fail,
                        _ => ErrorRetryStrategy::Fail,
                    }
                } else {
                    // Network error, connection issue, or timeout
                    ErrorRetryStrategy::Retry
                }
            }

            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition/connection errors are transient
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors (constraint violations, type
                    // conversions, missing records) won't resolve with retry
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Session and redis errors could be transient connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::RedisError(_) => ErrorRetryStrategy::Retry,

            // External API errors already absorbed their own timeout/retry
            // budget inside the clients
            Self::ExternalError(_) => ErrorRetryStrategy::Fail,

            // Permanent failures: bad requests, validation, configuration
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::PlaceError(_) => ErrorRetryStrategy::Fail,
            Self::ReviewError(_) => ErrorRetryStrategy::Fail,
            Self::AchievementError(_) => ErrorRetryStrategy::Fail,
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
