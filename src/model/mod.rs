//! Wire models shared by controllers and API consumers.

pub mod achievement;
pub mod api;
pub mod notification;
pub mod place;
pub mod review;
pub mod user;
