use chrono::NaiveDateTime;
use entity::notification_kind::NotificationKind;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    #[schema(value_type = String)]
    pub kind: NotificationKind,
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind,
            payload: notification.payload,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotificationListDto {
    pub notifications: Vec<NotificationDto>,
    pub unread_count: u64,
}
