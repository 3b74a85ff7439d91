//! User service layer.
//!
//! User account retrieval and creation from auth-provider identities, plus
//! the points-to-level ladder.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error, service::retry::RetryContext},
};

/// Points required to reach each level; index 0 is level 1.
///
/// Levels are derived, never persisted; crossing a threshold while points are
/// credited emits a level_up notification.
pub static LEVEL_THRESHOLDS: &[i32] = &[0, 500, 1_500, 3_000, 6_000, 10_000, 15_000, 21_000];

/// Level for a points balance; monotone in points
pub fn level_for_points(points: i32) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .take_while(|threshold| points >= **threshold)
        .count() as u32
}

/// Service for managing user account operations
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves user information with the derived level.
    ///
    /// Uses automatic retry logic to handle transient database failures.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get user ID {}", user_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let user_repo = UserRepository::new(&db);

                match user_repo.get_by_id(user_id).await? {
                    None => Ok(None),
                    Some(user) => Ok(Some(UserDto {
                        id: user.id,
                        email: user.email,
                        display_name: user.display_name,
                        points: user.points,
                        level: level_for_points(user.points),
                    })),
                }
            })
        })
        .await
    }

    /// Get user by auth-provider subject or create an account for it
    pub async fn get_or_create_user(
        &self,
        subject: &str,
        email: &str,
        display_name: &str,
    ) -> Result<entity::savora_user::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_subject(subject).await? {
            return Ok(user);
        }

        let user = user_repo.create(subject, email, display_name).await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use savora_test_utils::prelude::*;

    use super::*;

    mod level_for_points {
        use super::*;

        #[test]
        fn zero_points_is_level_one() {
            assert_eq!(level_for_points(0), 1);
        }

        #[test]
        fn thresholds_are_inclusive() {
            assert_eq!(level_for_points(499), 1);
            assert_eq!(level_for_points(500), 2);
            assert_eq!(level_for_points(1_500), 3);
        }

        #[test]
        fn is_monotone() {
            let mut last = 0;
            for points in (0..25_000).step_by(250) {
                let level = level_for_points(points);
                assert!(level >= last);
                last = level;
            }
        }
    }

    mod get_or_create_user {
        use super::*;

        /// Expect an existing user to be returned unchanged
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::SavoraUser)?;
            let existing = test.user().insert_user_with_points("sub-1", 700).await?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service
                .get_or_create_user("sub-1", "other@example.com", "Other Name")
                .await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.id, existing.id);
            assert_eq!(user.points, 700);

            Ok(())
        }

        /// Expect a new user to be created when the subject is unknown
        #[tokio::test]
        async fn creates_user_when_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::SavoraUser)?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service
                .get_or_create_user("sub-1", "a@example.com", "Ada")
                .await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().points, 0);

            Ok(())
        }
    }

    mod get_user {
        use super::*;

        /// Expect the derived level to reflect the points balance
        #[tokio::test]
        async fn derives_level_from_points() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::SavoraUser)?;
            let user = test.user().insert_user_with_points("sub-1", 1_600).await?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service.get_user(user.id).await.unwrap();

            assert!(result.is_some());
            let dto = result.unwrap();
            assert_eq!(dto.points, 1_600);
            assert_eq!(dto.level, 3);

            Ok(())
        }

        /// Expect None for an unknown user ID
        #[tokio::test]
        async fn returns_none_for_unknown_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::SavoraUser)?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service.get_user(42).await.unwrap();

            assert!(result.is_none());

            Ok(())
        }
    }
}
