use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260715_000001_savora_user::SavoraUser, m20260715_000004_achievement::Achievement,
};

static IDX_USER_ACHIEVEMENT_UNIQUE: &str = "idx-user_achievement-user_id-achievement_id";
static FK_USER_ACHIEVEMENT_USER_ID: &str = "fk-user_achievement-user_id";
static FK_USER_ACHIEVEMENT_ACHIEVEMENT_ID: &str = "fk-user_achievement-achievement_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAchievement::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAchievement::Id))
                    .col(integer(UserAchievement::UserId))
                    .col(integer(UserAchievement::AchievementId))
                    .col(timestamp(UserAchievement::UnlockedAt))
                    .to_owned(),
            )
            .await?;

        // Grant idempotence: insert-or-ignore keyed by this index is the
        // atomic substitute for a cross-call transaction.
        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_ACHIEVEMENT_UNIQUE)
                    .table(UserAchievement::Table)
                    .col(UserAchievement::UserId)
                    .col(UserAchievement::AchievementId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_ACHIEVEMENT_USER_ID)
                    .from_tbl(UserAchievement::Table)
                    .from_col(UserAchievement::UserId)
                    .to_tbl(SavoraUser::Table)
                    .to_col(SavoraUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_ACHIEVEMENT_ACHIEVEMENT_ID)
                    .from_tbl(UserAchievement::Table)
                    .from_col(UserAchievement::AchievementId)
                    .to_tbl(Achievement::Table)
                    .to_col(Achievement::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_ACHIEVEMENT_ACHIEVEMENT_ID)
                    .table(UserAchievement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_ACHIEVEMENT_USER_ID)
                    .table(UserAchievement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_ACHIEVEMENT_UNIQUE)
                    .table(UserAchievement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserAchievement::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserAchievement {
    Table,
    Id,
    UserId,
    AchievementId,
    UnlockedAt,
}
