use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavoraUser::Table)
                    .if_not_exists()
                    .col(pk_auto(SavoraUser::Id))
                    .col(string_uniq(SavoraUser::Subject))
                    .col(string(SavoraUser::Email))
                    .col(string(SavoraUser::DisplayName))
                    .col(integer(SavoraUser::Points).default(0))
                    .col(timestamp(SavoraUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavoraUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SavoraUser {
    Table,
    Id,
    Subject,
    Email,
    DisplayName,
    Points,
    CreatedAt,
}
