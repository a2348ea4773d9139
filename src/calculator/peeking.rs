//! Card count and unit card width for clusters with a peeking card.

use super::round_half_up;
use crate::error::LayoutError;

/// Minimum number of whole cards a peeking cluster shows.
pub const MIN_UNIT_CARD_COUNT: u32 = 3;

/// Number of cards to show in a cluster, including the peeking fraction.
///
/// ```text
/// max(3, round(width_for_children / desired_unit_card_width - peeking_amount)) + peeking_amount
/// ```
///
/// `width_for_children` must already exclude cluster padding. The peeking
/// amount is kept exactly, so the result is always at least `3 + peeking_amount`.
///
/// ```
/// use cluster_layout::calculator::card_count;
///
/// assert_eq!(card_count(100, 1000, 0.0).unwrap(), 10.0);
/// assert_eq!(card_count(100, 250, 0.5).unwrap(), 3.5);
/// ```
///
/// # Errors
///
/// [`LayoutError::ZeroCardWidth`] if `desired_unit_card_width` is zero,
/// [`LayoutError::PeekingOutOfRange`] if `peeking_amount` is not in `[0, 1]`.
pub fn card_count(
    desired_unit_card_width: u32,
    width_for_children: u32,
    peeking_amount: f32,
) -> Result<f32, LayoutError> {
    if desired_unit_card_width == 0 {
        return Err(LayoutError::ZeroCardWidth);
    }
    check_peeking(peeking_amount)?;

    let count_for_desired_width = width_for_children as f32 / desired_unit_card_width as f32;
    let whole_count = round_half_up(count_for_desired_width - peeking_amount);
    Ok(whole_count.max(MIN_UNIT_CARD_COUNT as f32) + peeking_amount)
}

/// Width of a 1x card so that [`card_count`] cards fill `width_for_children`.
///
/// The result is rounded, so `unit_card_width * card_count` only approximates
/// `width_for_children`.
///
/// # Errors
///
/// Same as [`card_count`].
pub fn unit_card_width(
    desired_unit_card_width: u32,
    width_for_children: u32,
    peeking_amount: f32,
) -> Result<u32, LayoutError> {
    let count = card_count(desired_unit_card_width, width_for_children, peeking_amount)?;
    // count >= 3, so the quotient is finite and non-negative.
    Ok(round_half_up(width_for_children as f32 / count) as u32)
}

fn check_peeking(peeking_amount: f32) -> Result<(), LayoutError> {
    if (0.0..=1.0).contains(&peeking_amount) {
        Ok(())
    } else {
        Err(LayoutError::PeekingOutOfRange(peeking_amount))
    }
}
