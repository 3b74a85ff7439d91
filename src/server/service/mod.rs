//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and external clients: authentication,
//! place resolution, review submission with points, achievement evaluation,
//! notifications, and photo uploads.

pub mod achievement;
pub mod auth;
pub mod notification;
pub mod photo;
pub mod place;
pub mod retry;
pub mod review;
pub mod user;
