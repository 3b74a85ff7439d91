pub use sea_orm_migration::prelude::*;

mod m20260715_000001_savora_user;
mod m20260715_000002_place;
mod m20260715_000003_review;
mod m20260715_000004_achievement;
mod m20260715_000005_user_achievement;
mod m20260715_000006_notification;
mod m20260715_000007_seed_achievements;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_savora_user::Migration),
            Box::new(m20260715_000002_place::Migration),
            Box::new(m20260715_000003_review::Migration),
            Box::new(m20260715_000004_achievement::Migration),
            Box::new(m20260715_000005_user_achievement::Migration),
            Box::new(m20260715_000006_notification::Migration),
            Box::new(m20260715_000007_seed_achievements::Migration),
        ]
    }
}
