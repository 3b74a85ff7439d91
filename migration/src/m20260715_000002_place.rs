use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLACE_CATEGORY: &str = "idx-place-category";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Place::Table)
                    .if_not_exists()
                    .col(pk_auto(Place::Id))
                    .col(string_uniq(Place::ExternalId))
                    .col(string(Place::Name))
                    .col(string(Place::Address))
                    .col(string_null(Place::Phone))
                    .col(string_null(Place::Website))
                    .col(double(Place::Latitude))
                    .col(double(Place::Longitude))
                    .col(string_len_null(Place::Category, 32))
                    .col(double(Place::AverageRating).default(0.0))
                    .col(integer(Place::TotalReviews).default(0))
                    .col(timestamp(Place::CreatedAt))
                    .col(timestamp(Place::RefreshedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLACE_CATEGORY)
                    .table(Place::Table)
                    .col(Place::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLACE_CATEGORY)
                    .table(Place::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Place::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Place {
    Table,
    Id,
    ExternalId,
    Name,
    Address,
    Phone,
    Website,
    Latitude,
    Longitude,
    Category,
    AverageRating,
    TotalReviews,
    CreatedAt,
    RefreshedAt,
}
