//! Incomplete-achievement candidate selection.
//!
//! Pure, client-side reduction over already-fetched per-category progress;
//! no backend calls per candidate.

use std::collections::{hash_map::Entry, HashMap};

use entity::category::Category;

use crate::model::achievement::AchievementProgressDto;

/// Maximum candidates returned across categories
pub const MAX_INCOMPLETE_CANDIDATES: usize = 6;

/// Reduce per-achievement progress to at most one representative per
/// category, then order and truncate.
///
/// Representative tie-break per category, in order:
/// 1. any progress beats zero progress;
/// 2. among progressed achievements, higher percentage wins;
/// 3. among zero-progress achievements, the lowest level wins.
///
/// Final ordering: progressed representatives first (descending percentage),
/// then zero-progress representatives (ascending level), truncated to
/// [`MAX_INCOMPLETE_CANDIDATES`].
pub fn select_incomplete(all: Vec<AchievementProgressDto>) -> Vec<AchievementProgressDto> {
    let mut representatives: HashMap<Category, AchievementProgressDto> = HashMap::new();

    for progress in all.into_iter().filter(|p| !p.is_unlocked) {
        match representatives.entry(progress.category) {
            Entry::Vacant(entry) => {
                entry.insert(progress);
            }
            Entry::Occupied(mut entry) => {
                if prefers(&progress, entry.get()) {
                    entry.insert(progress);
                }
            }
        }
    }

    let mut candidates: Vec<AchievementProgressDto> = representatives.into_values().collect();

    candidates.sort_by(|a, b| {
        let a_progressed = a.current_progress > 0;
        let b_progressed = b.current_progress > 0;

        match (a_progressed, b_progressed) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            (true, true) => b
                .progress_percentage
                .partial_cmp(&a.progress_percentage)
                .unwrap_or(std::cmp::Ordering::Equal),
            (false, false) => a.level.cmp(&b.level),
        }
    });

    candidates.truncate(MAX_INCOMPLETE_CANDIDATES);
    candidates
}

/// Whether `challenger` replaces `current` as a category's representative
fn prefers(challenger: &AchievementProgressDto, current: &AchievementProgressDto) -> bool {
    let challenger_progressed = challenger.current_progress > 0;
    let current_progressed = current.current_progress > 0;

    match (challenger_progressed, current_progressed) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => challenger.progress_percentage > current.progress_percentage,
        (false, false) => challenger.level < current.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(
        category: Category,
        level: i16,
        current_progress: i64,
        required_reviews: i32,
        is_unlocked: bool,
    ) -> AchievementProgressDto {
        AchievementProgressDto {
            achievement_id: (category as u8 as i32) * 10 + level as i32,
            category,
            category_label: category.label().to_string(),
            level,
            name: format!("{} L{}", category.label(), level),
            description: String::new(),
            required_reviews,
            points_reward: 100,
            current_progress,
            progress_percentage: (current_progress as f64 / required_reviews as f64) * 100.0,
            is_unlocked,
        }
    }

    /// Ordering matches the documented tie-break: progressed category first,
    /// then zero-progress categories by ascending level
    #[test]
    fn orders_progressed_then_zero_progress_by_level() {
        let all = vec![
            progress(Category::Turkish, 2, 2, 5, false), // 40%
            progress(Category::Italian, 1, 0, 1, false), // zero, level 1
            progress(Category::Cafe, 2, 0, 5, false),    // zero, level 2
        ];

        let selected = select_incomplete(all);

        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0].category, Category::Turkish);
        assert_eq!(selected[1].category, Category::Italian);
        assert_eq!(selected[2].category, Category::Cafe);
    }

    /// Within a category, an achievement with progress beats a zero-progress
    /// one even at a lower level
    #[test]
    fn prefers_progressed_achievement_within_category() {
        let all = vec![
            progress(Category::Turkish, 2, 2, 5, false),
            progress(Category::Turkish, 3, 0, 15, false),
        ];

        let selected = select_incomplete(all);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].level, 2);
    }

    /// Among progressed achievements, the higher percentage wins
    #[test]
    fn prefers_higher_percentage_within_category() {
        let all = vec![
            progress(Category::Turkish, 2, 2, 5, false),  // 40%
            progress(Category::Turkish, 3, 12, 15, false), // 80%
        ];

        let selected = select_incomplete(all);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].level, 3);
    }

    /// Among zero-progress achievements, the lowest level wins
    #[test]
    fn prefers_lowest_level_among_zero_progress() {
        let all = vec![
            progress(Category::Turkish, 3, 0, 15, false),
            progress(Category::Turkish, 1, 0, 1, false),
        ];

        let selected = select_incomplete(all);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].level, 1);
    }

    /// Unlocked achievements are excluded entirely
    #[test]
    fn excludes_unlocked_achievements() {
        let all = vec![
            progress(Category::Turkish, 1, 1, 1, true),
            progress(Category::Turkish, 2, 1, 5, false),
        ];

        let selected = select_incomplete(all);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].level, 2);
    }

    /// Output is capped at six categories
    #[test]
    fn truncates_to_six_candidates() {
        let categories = [
            Category::Turkish,
            Category::Italian,
            Category::Asian,
            Category::FastFood,
            Category::Seafood,
            Category::Dessert,
            Category::Cafe,
            Category::Bakery,
        ];

        let all: Vec<AchievementProgressDto> = categories
            .iter()
            .map(|c| progress(*c, 1, 0, 1, false))
            .collect();

        let selected = select_incomplete(all);

        assert_eq!(selected.len(), MAX_INCOMPLETE_CANDIDATES);
    }
}
