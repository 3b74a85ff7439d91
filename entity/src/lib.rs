pub mod achievement;
pub mod category;
pub mod notification;
pub mod notification_kind;
pub mod place;
pub mod prelude;
pub mod price_range;
pub mod review;
pub mod savora_user;
pub mod user_achievement;
