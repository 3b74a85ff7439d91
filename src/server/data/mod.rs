//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They
//! are generic over [`sea_orm::ConnectionTrait`] so the same methods work on
//! a plain connection and inside the review submission transaction.

pub mod achievement;
pub mod notification;
pub mod place;
pub mod review;
pub mod user;
