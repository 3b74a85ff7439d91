//! HTTP controller endpoints for the Savora web API.
//!
//! Controllers handle HTTP requests, validate inputs, interact with
//! services, and return appropriate HTTP responses. They integrate with
//! tower-sessions for session management and use utoipa for OpenAPI
//! documentation.

pub mod achievement;
pub mod auth;
pub mod notification;
pub mod photo;
pub mod place;
pub mod review;
pub mod util;
