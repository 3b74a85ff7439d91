use std::sync::Arc;

use mockito::{Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::{
    error::TestError,
    fixtures::{
        achievement::AchievementFixture, llm::LlmFixture, maps::MapsFixture,
        place::PlaceFixture, review::ReviewFixture, storage::StorageFixture, user::UserFixture,
    },
};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

/// Test environment: in-memory SQLite database, mock HTTP server standing in
/// for every external API (mapping, LLM, blob store), and a session backed by
/// an in-memory store.
pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db },
            session,
        })
    }

    /// Base URL of the mock server; external clients under test point here
    pub fn base_url(&self) -> String {
        self.server.url()
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub fn user(&mut self) -> UserFixture<'_> {
        UserFixture::new(&self.state.db)
    }

    pub fn place(&mut self) -> PlaceFixture<'_> {
        PlaceFixture::new(&self.state.db)
    }

    pub fn review(&mut self) -> ReviewFixture<'_> {
        ReviewFixture::new(&self.state.db)
    }

    pub fn achievement(&mut self) -> AchievementFixture<'_> {
        AchievementFixture::new(&self.state.db)
    }

    pub fn maps(&mut self) -> MapsFixture<'_> {
        MapsFixture::new(&mut self.server)
    }

    pub fn llm(&mut self) -> LlmFixture<'_> {
        LlmFixture::new(&mut self.server)
    }

    pub fn storage(&mut self) -> StorageFixture<'_> {
        StorageFixture::new(&mut self.server)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every table the review submission flow touches.
#[macro_export]
macro_rules! test_setup_with_review_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::SavoraUser),
                schema.create_table_from_entity(entity::prelude::Place),
                schema.create_table_from_entity(entity::prelude::Review),
                schema.create_table_from_entity(entity::prelude::Achievement),
                schema.create_table_from_entity(entity::prelude::UserAchievement),
                schema.create_table_from_entity(entity::prelude::Notification),
            ];
            setup.with_tables(stmts).await?;

            // The composite unique indexes the migrations define; the
            // duplicate-review backstop and grant idempotence depend on them.
            let indexes = vec![
                sea_orm::sea_query::Index::create()
                    .name("idx-review-user_id-place_id")
                    .table(entity::prelude::Review)
                    .col(entity::review::Column::UserId)
                    .col(entity::review::Column::PlaceId)
                    .unique()
                    .to_owned(),
                sea_orm::sea_query::Index::create()
                    .name("idx-user_achievement-user_id-achievement_id")
                    .table(entity::prelude::UserAchievement)
                    .col(entity::user_achievement::Column::UserId)
                    .col(entity::user_achievement::Column::AchievementId)
                    .unique()
                    .to_owned(),
            ];
            setup.with_indexes(indexes).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
