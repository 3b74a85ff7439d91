use chrono::Utc;
use entity::notification_kind::NotificationKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct NotificationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new instance of [`NotificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        kind: NotificationKind,
        payload: serde_json::Value,
    ) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind),
            payload: ActiveValue::Set(payload),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    /// Newest-first page of the user's notifications
    pub async fn list_by_user(
        &self,
        user_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks a notification read; scoped to the owning user.
    ///
    /// Returns false when the notification does not exist or belongs to
    /// another user.
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
