//! Card count and card width for grids without a peeking card.
//!
//! N cards are separated by N-1 gaps of `padding`; there is no padding
//! before the first card or after the last one.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Result of fitting cards of a minimum width into a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridFit {
    /// Number of cards in the row (at least 1).
    pub count: u32,
    /// Width of each card.
    pub card_width: u32,
}

/// Largest number of cards of at least `min_width_per_card` that fit in
/// `width_for_children` with `padding` between them.
///
/// Solves `N * min_width_per_card + (N - 1) * padding <= width_for_children`
/// for N. Always returns at least 1, even when a single card overflows.
///
/// ```
/// use cluster_layout::calculator::max_card_count_for_min_width;
///
/// assert_eq!(max_card_count_for_min_width(100, 1000, 10).unwrap(), 9);
/// assert_eq!(max_card_count_for_min_width(1000, 100, 10).unwrap(), 1);
/// ```
///
/// # Errors
///
/// [`LayoutError::ZeroCardWidth`] if `min_width_per_card` is zero.
pub fn max_card_count_for_min_width(
    min_width_per_card: u32,
    width_for_children: u32,
    padding: u32,
) -> Result<u32, LayoutError> {
    if min_width_per_card == 0 {
        return Err(LayoutError::ZeroCardWidth);
    }
    let count = (u64::from(width_for_children) + u64::from(padding))
        / (u64::from(min_width_per_card) + u64::from(padding));
    // count <= width_for_children whenever it is non-zero
    Ok((count as u32).max(1))
}

/// Width each of `count` cards takes so that they fill `width_for_children`
/// with `padding` between them, floored.
///
/// A `count` of zero returns `width_for_children` unchanged. When the
/// `count - 1` gaps alone are wider than the row the width is negative.
///
/// ```
/// use cluster_layout::calculator::card_width_from_min_width;
///
/// assert_eq!(card_width_from_min_width(4, 430, 10), 100);
/// assert_eq!(card_width_from_min_width(5, 100, 30), -4);
/// ```
#[must_use]
pub fn card_width_from_min_width(count: u32, width_for_children: u32, padding: u32) -> i64 {
    if count == 0 {
        return i64::from(width_for_children);
    }
    // (count - 1) * padding can exceed i64; the quotient is within
    // -padding..=width_for_children
    let remaining =
        i128::from(width_for_children) - i128::from(count - 1) * i128::from(padding);
    remaining.div_euclid(i128::from(count)) as i64
}

/// Fit as many cards of `min_width_per_card` as possible and stretch them to
/// fill the row.
///
/// ```
/// use cluster_layout::calculator::{fit_min_width, GridFit};
///
/// let fit = fit_min_width(100, 1000, 10).unwrap();
/// assert_eq!(fit, GridFit { count: 9, card_width: 102 });
/// ```
///
/// # Errors
///
/// [`LayoutError::ZeroCardWidth`] if `min_width_per_card` is zero.
pub fn fit_min_width(
    min_width_per_card: u32,
    width_for_children: u32,
    padding: u32,
) -> Result<GridFit, LayoutError> {
    let count = max_card_count_for_min_width(min_width_per_card, width_for_children, padding)?;
    // count cards of min_width_per_card fit (or count == 1), so this is in
    // 0..=width_for_children
    let card_width = card_width_from_min_width(count, width_for_children, padding) as u32;
    Ok(GridFit { count, card_width })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_max_card_count() {
        // floor(1010 / 110) = 9
        assert_eq!(max_card_count_for_min_width(100, 1000, 10).unwrap(), 9);
        assert_eq!(max_card_count_for_min_width(100, 1000, 0).unwrap(), 10);
    }

    #[test]
    fn test_max_card_count_floor_of_one() {
        assert_eq!(max_card_count_for_min_width(1000, 100, 10).unwrap(), 1);
        assert_eq!(max_card_count_for_min_width(100, 0, 0).unwrap(), 1);
    }

    #[test]
    fn test_max_card_count_no_overflow() {
        assert_eq!(max_card_count_for_min_width(1, u32::MAX, u32::MAX).unwrap(), 1);
        assert_eq!(max_card_count_for_min_width(1, u32::MAX, 0).unwrap(), u32::MAX);
    }

    #[test]
    fn test_max_card_count_rejects_zero_width() {
        assert_eq!(
            max_card_count_for_min_width(0, 1000, 10),
            Err(LayoutError::ZeroCardWidth)
        );
    }

    #[test]
    fn test_card_width_zero_count_passthrough() {
        assert_eq!(card_width_from_min_width(0, 500, 10), 500);
    }

    #[test]
    fn test_card_width_exact_fill() {
        // (430 - 3 * 10) / 4 = 100
        assert_eq!(card_width_from_min_width(4, 430, 10), 100);
        assert_eq!(card_width_from_min_width(1, 430, 10), 430);
    }

    #[test]
    fn test_card_width_truncates() {
        // (433 - 30) / 4 = 100.75
        assert_eq!(card_width_from_min_width(4, 433, 10), 100);
    }

    #[test]
    fn test_card_width_negative_when_gaps_exceed_width() {
        // (100 - 4 * 30) / 5 = -4
        assert_eq!(card_width_from_min_width(5, 100, 30), -4);
        // (100 - 2 * 51) / 3 = -0.67, floored
        assert_eq!(card_width_from_min_width(3, 100, 51), -1);
        // gaps exactly fill the width
        assert_eq!(card_width_from_min_width(5, 120, 30), 0);
    }

    #[test]
    fn test_card_width_extreme_inputs() {
        assert_eq!(card_width_from_min_width(u32::MAX, 0, u32::MAX), -i64::from(u32::MAX) + 1);
        assert_eq!(card_width_from_min_width(1, u32::MAX, u32::MAX), i64::from(u32::MAX));
    }

    #[test]
    fn test_fit_min_width_overflowing_card() {
        let fit = fit_min_width(1000, 100, 10).unwrap();
        assert_eq!(fit, GridFit { count: 1, card_width: 100 });
    }

    #[test]
    fn test_grid_fit_serialization() {
        let fit = GridFit { count: 3, card_width: 120 };
        let json = serde_json::to_string(&fit).unwrap();
        let deserialized: GridFit = serde_json::from_str(&json).unwrap();
        assert_eq!(fit, deserialized);
    }

    proptest! {
        #[test]
        fn prop_fit_never_overflows(
            min_width in 1u32..500,
            width in 0u32..5000,
            padding in 0u32..50,
        ) {
            let fit = fit_min_width(min_width, width, padding).unwrap();
            prop_assert!(fit.count >= 1);
            let used = u64::from(fit.count) * u64::from(fit.card_width)
                + u64::from(fit.count - 1) * u64::from(padding);
            prop_assert!(used <= u64::from(width));
        }

        #[test]
        fn prop_fit_respects_min_width_when_it_fits(
            min_width in 1u32..500,
            width in 0u32..5000,
            padding in 0u32..50,
        ) {
            prop_assume!(min_width <= width);
            let fit = fit_min_width(min_width, width, padding).unwrap();
            prop_assert!(fit.card_width >= min_width);
            // one more card would not fit
            let next = u64::from(fit.count + 1) * u64::from(min_width)
                + u64::from(fit.count) * u64::from(padding);
            prop_assert!(next > u64::from(width));
        }
    }
}
