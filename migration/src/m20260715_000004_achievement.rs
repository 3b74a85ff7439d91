use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACHIEVEMENT_CATEGORY_LEVEL: &str = "idx-achievement-category-level";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievement::Table)
                    .if_not_exists()
                    .col(pk_auto(Achievement::Id))
                    .col(string_len(Achievement::Category, 32))
                    .col(small_integer(Achievement::Level))
                    .col(string(Achievement::Name))
                    .col(string(Achievement::Description))
                    .col(integer(Achievement::RequiredReviews))
                    .col(integer(Achievement::PointsReward))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACHIEVEMENT_CATEGORY_LEVEL)
                    .table(Achievement::Table)
                    .col(Achievement::Category)
                    .col(Achievement::Level)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACHIEVEMENT_CATEGORY_LEVEL)
                    .table(Achievement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Achievement::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Achievement {
    Table,
    Id,
    Category,
    Level,
    Name,
    Description,
    RequiredReviews,
    PointsReward,
}
