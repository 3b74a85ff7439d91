use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter,
};

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user from the auth provider's identity fields
    pub async fn create(
        &self,
        subject: &str,
        email: &str,
        display_name: &str,
    ) -> Result<entity::savora_user::Model, DbErr> {
        let user = entity::savora_user::ActiveModel {
            subject: ActiveValue::Set(subject.to_string()),
            email: ActiveValue::Set(email.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::savora_user::Model>, DbErr> {
        entity::prelude::SavoraUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<entity::savora_user::Model>, DbErr> {
        entity::prelude::SavoraUser::find()
            .filter(entity::savora_user::Column::Subject.eq(subject))
            .one(self.db)
            .await
    }

    /// Atomically credits points to the user's balance
    pub async fn add_points(&self, user_id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::SavoraUser::update_many()
            .col_expr(
                entity::savora_user::Column::Points,
                Expr::col(entity::savora_user::Column::Points).add(delta),
            )
            .filter(entity::savora_user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use savora_test_utils::prelude::*;

    use super::*;

    mod create {
        use super::*;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::SavoraUser)?;
            let user_repo = UserRepository::new(&test.state.db);

            let result = user_repo.create("sub-1", "a@example.com", "Ada").await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.points, 0);

            Ok(())
        }

        /// Expect Error when creating a user with an already-taken subject
        #[tokio::test]
        async fn fails_for_duplicate_subject() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::SavoraUser)?;
            let _ = test.user().insert_user("sub-1").await?;

            let user_repo = UserRepository::new(&test.state.db);
            let result = user_repo.create("sub-1", "a@example.com", "Ada").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod add_points {
        use super::*;

        /// Expect points to accumulate across credits
        #[tokio::test]
        async fn accumulates_points() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::SavoraUser)?;
            let user = test.user().insert_user("sub-1").await?;

            let user_repo = UserRepository::new(&test.state.db);
            user_repo.add_points(user.id, 100).await?;
            user_repo.add_points(user.id, 650).await?;

            let updated = user_repo.get_by_id(user.id).await?.unwrap();
            assert_eq!(updated.points, 750);

            Ok(())
        }
    }
}
