use sea_orm_migration::prelude::*;

use crate::m20260715_000004_achievement::Achievement;

/// Achievement catalogue: one five-level ladder per category.
///
/// Thresholds and rewards are uniform across categories; names combine the
/// level title with the category label.
static CATEGORIES: &[(&str, &str)] = &[
    ("turkish", "Turkish"),
    ("italian", "Italian"),
    ("asian", "Asian"),
    ("fast_food", "Fast Food"),
    ("seafood", "Seafood"),
    ("dessert", "Dessert"),
    ("cafe", "Cafe"),
    ("bakery", "Bakery"),
    ("street_food", "Street Food"),
    ("vegan", "Vegan"),
];

static LEVELS: &[(i16, &str, i32, i32)] = &[
    (1, "Novice", 1, 50),
    (2, "Explorer", 5, 100),
    (3, "Enthusiast", 15, 250),
    (4, "Connoisseur", 30, 500),
    (5, "Legend", 50, 1000),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Achievement::Table)
            .columns([
                Achievement::Category,
                Achievement::Level,
                Achievement::Name,
                Achievement::Description,
                Achievement::RequiredReviews,
                Achievement::PointsReward,
            ])
            .to_owned();

        for (category, label) in CATEGORIES {
            for (level, title, required_reviews, points_reward) in LEVELS {
                insert.values_panic([
                    (*category).into(),
                    (*level).into(),
                    format!("{} {}", label, title).into(),
                    format!("Review {} {} places", required_reviews, label).into(),
                    (*required_reviews).into(),
                    (*points_reward).into(),
                ]);
            }
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Achievement::Table).to_owned())
            .await?;

        Ok(())
    }
}
