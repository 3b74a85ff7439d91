//! Scheduled background maintenance.
//!
//! One cron job refreshes descriptive fields of stale places from the
//! mapping API; curated category and rating data are never touched.

pub mod config;
pub mod cron;
pub mod place_refresh;
