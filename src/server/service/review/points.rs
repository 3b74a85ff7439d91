//! Points calculator.
//!
//! Pure function from review attributes at submission time to the awarded
//! points breakdown; no I/O, independently testable.

use crate::model::review::PointsBreakdownDto;

/// Awarded for every published review
pub const BASE_POINTS: i32 = 100;
/// Awarded when the review is the place's first
pub const FIRST_REVIEW_BONUS: i32 = 500;
/// Awarded when at least one photo is attached
pub const PHOTO_BONUS: i32 = 50;
/// Awarded when the comment reaches the extended length
pub const EXTENDED_REVIEW_BONUS: i32 = 50;
/// Comment length (in characters) qualifying for the extended bonus
pub const EXTENDED_REVIEW_MIN_CHARS: usize = 300;

pub fn compute_points(
    is_first_review: bool,
    has_photos: bool,
    comment_length: usize,
) -> PointsBreakdownDto {
    let base_points = BASE_POINTS;
    let first_review_bonus = if is_first_review { FIRST_REVIEW_BONUS } else { 0 };
    let photo_bonus = if has_photos { PHOTO_BONUS } else { 0 };
    let extended_review_bonus = if comment_length >= EXTENDED_REVIEW_MIN_CHARS {
        EXTENDED_REVIEW_BONUS
    } else {
        0
    };

    PointsBreakdownDto {
        base_points,
        first_review_bonus,
        photo_bonus,
        extended_review_bonus,
        total_points: base_points + first_review_bonus + photo_bonus + extended_review_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_review_earns_base_points_only() {
        let breakdown = compute_points(false, false, 50);

        assert_eq!(breakdown.base_points, 100);
        assert_eq!(breakdown.first_review_bonus, 0);
        assert_eq!(breakdown.photo_bonus, 0);
        assert_eq!(breakdown.extended_review_bonus, 0);
        assert_eq!(breakdown.total_points, 100);
    }

    #[test]
    fn first_review_with_photos_and_long_comment_earns_all_bonuses() {
        let breakdown = compute_points(true, true, 320);

        assert_eq!(
            breakdown,
            PointsBreakdownDto {
                base_points: 100,
                first_review_bonus: 500,
                photo_bonus: 50,
                extended_review_bonus: 50,
                total_points: 700,
            }
        );
    }

    #[test]
    fn extended_bonus_threshold_is_inclusive() {
        assert_eq!(compute_points(false, false, 299).extended_review_bonus, 0);
        assert_eq!(compute_points(false, false, 300).extended_review_bonus, 50);
    }

    #[test]
    fn total_is_sum_of_components() {
        for is_first in [false, true] {
            for has_photos in [false, true] {
                for comment_length in [0, 150, 300, 1_000] {
                    let b = compute_points(is_first, has_photos, comment_length);

                    assert_eq!(
                        b.total_points,
                        b.base_points + b.first_review_bonus + b.photo_bonus + b.extended_review_bonus
                    );
                }
            }
        }
    }
}
