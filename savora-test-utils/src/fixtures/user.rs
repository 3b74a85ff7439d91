use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct UserFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixture<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_user(&self, subject: &str) -> Result<entity::savora_user::Model, TestError> {
        self.insert_user_with_points(subject, 0).await
    }

    pub async fn insert_user_with_points(
        &self,
        subject: &str,
        points: i32,
    ) -> Result<entity::savora_user::Model, TestError> {
        let user = entity::savora_user::ActiveModel {
            subject: ActiveValue::Set(subject.to_string()),
            email: ActiveValue::Set(format!("{}@example.com", subject)),
            display_name: ActiveValue::Set(format!("User {}", subject)),
            points: ActiveValue::Set(points),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }
}
