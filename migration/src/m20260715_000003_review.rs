use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260715_000001_savora_user::SavoraUser, m20260715_000002_place::Place};

static IDX_REVIEW_USER_PLACE: &str = "idx-review-user_id-place_id";
static IDX_REVIEW_PLACE_ID: &str = "idx-review-place_id";
static IDX_REVIEW_USER_CATEGORY: &str = "idx-review-user_id-category";
static FK_REVIEW_USER_ID: &str = "fk-review-user_id";
static FK_REVIEW_PLACE_ID: &str = "fk-review-place_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::UserId))
                    .col(integer(Review::PlaceId))
                    .col(string_null(Review::DishName))
                    .col(small_integer(Review::FoodTaste))
                    .col(small_integer(Review::Presentation))
                    .col(small_integer(Review::PortionSize))
                    .col(small_integer(Review::MusicAcoustics))
                    .col(small_integer(Review::Ambiance))
                    .col(small_integer(Review::FurnitureComfort))
                    .col(small_integer(Review::Service))
                    .col(small_integer(Review::DrinksVariety))
                    .col(small_integer(Review::VeggieOptions))
                    .col(string_len(Review::PriceRange, 16))
                    .col(string_len(Review::Category, 32))
                    .col(text(Review::Comment))
                    .col(json(Review::PhotoUrls))
                    .col(timestamp(Review::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One review per (user, place); the application-layer duplicate check
        // is a pre-check, this index is the authority.
        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_USER_PLACE)
                    .table(Review::Table)
                    .col(Review::UserId)
                    .col(Review::PlaceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_PLACE_ID)
                    .table(Review::Table)
                    .col(Review::PlaceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_USER_CATEGORY)
                    .table(Review::Table)
                    .col(Review::UserId)
                    .col(Review::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_USER_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::UserId)
                    .to_tbl(SavoraUser::Table)
                    .to_col(SavoraUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_PLACE_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::PlaceId)
                    .to_tbl(Place::Table)
                    .to_col(Place::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_PLACE_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_USER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_USER_CATEGORY)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_PLACE_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_USER_PLACE)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    UserId,
    PlaceId,
    DishName,
    FoodTaste,
    Presentation,
    PortionSize,
    MusicAcoustics,
    Ambiance,
    FurnitureComfort,
    Service,
    DrinksVariety,
    VeggieOptions,
    PriceRange,
    Category,
    Comment,
    PhotoUrls,
    CreatedAt,
}
