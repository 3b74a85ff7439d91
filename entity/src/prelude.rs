pub use super::achievement::Entity as Achievement;
pub use super::notification::Entity as Notification;
pub use super::place::Entity as Place;
pub use super::review::Entity as Review;
pub use super::savora_user::Entity as SavoraUser;
pub use super::user_achievement::Entity as UserAchievement;
