//! Card count calculations for card clusters.
//!
//! Two families of pure functions:
//!
//! - **Peeking** (`card_count`, `unit_card_width`): a fractional number of
//!   cards where the last one only peeks past the edge of the cluster to hint
//!   that it scrolls. At least 3 whole cards are always shown.
//! - **Grid** (`max_card_count_for_min_width`, `card_width_from_min_width`,
//!   `fit_min_width`): a whole number of cards separated by fixed gaps, with
//!   no padding before the first or after the last card.
//!
//! ```text
//! | card | padding | card | padding | card |
//! |------------ width_for_children --------|
//! ```
//!
//! All functions are deterministic and reject out-of-range input with
//! [`LayoutError`](crate::LayoutError).

pub mod grid;
pub mod peeking;

pub use grid::{card_width_from_min_width, fit_min_width, max_card_count_for_min_width, GridFit};
pub use peeking::{card_count, unit_card_width, MIN_UNIT_CARD_COUNT};

/// Round to nearest, ties toward positive infinity (`2.5 -> 3`, `-0.5 -> 0`).
///
/// `value + 0.5` is not used: it rounds before the floor for values at or
/// above 2^23 and just below one half.
#[inline]
pub(crate) fn round_half_up(value: f32) -> f32 {
    let floor = value.floor();
    // value - floor is exact in f32
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(2.0), 2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-0.6), -1.0);
    }

    #[test]
    fn test_round_half_up_just_below_half() {
        assert_eq!(round_half_up(0.499_999_97), 0.0);
        assert_eq!(round_half_up(-0.500_000_06), -1.0);
    }

    #[test]
    fn test_round_half_up_large_integers_unchanged() {
        // 2^23 + 1: adding 0.5 would round to 2^23 + 2
        assert_eq!(round_half_up(8_388_609.0), 8_388_609.0);
        assert_eq!(round_half_up(16_777_216.0), 16_777_216.0);
    }
}
