//! Simple fixed layout policy.

use tracing::trace;

use super::HorizontalLayoutPolicy;
use crate::calculator::unit_card_width;
use crate::error::LayoutError;
use crate::units::Dp;

const CONTENT_PADDING: Dp = Dp(16.0);
const HEIGHT_RATIO: f32 = 9.0 / 16.0;

/// Fixed layout with 16dp paddings and a 16:9 scroller.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLayoutPolicy {
    /// Desired width of an item before the multiplier is applied.
    pub desired_item_width: Dp,

    /// Fraction of an extra item shown past the edge.
    pub child_peek_amount: f32,

    /// Scales the desired item width.
    pub base_width_multiplier: f32,
}

impl FixedLayoutPolicy {
    /// Create a policy with the default peek amount (0.1) and multiplier (1.0).
    #[must_use]
    pub fn new(desired_item_width: Dp) -> Self {
        Self {
            desired_item_width,
            child_peek_amount: 0.1,
            base_width_multiplier: 1.0,
        }
    }

    /// Set the peek amount.
    #[must_use]
    pub fn with_peek_amount(mut self, amount: f32) -> Self {
        self.child_peek_amount = amount;
        self
    }

    /// Set the base width multiplier.
    #[must_use]
    pub fn with_base_width_multiplier(mut self, multiplier: f32) -> Self {
        self.base_width_multiplier = multiplier;
        self
    }
}

impl HorizontalLayoutPolicy for FixedLayoutPolicy {
    fn content_start_padding(&self) -> Dp {
        CONTENT_PADDING
    }

    fn content_end_padding(&self) -> Dp {
        CONTENT_PADDING
    }

    fn child_width(&self, scroller_width: Dp) -> Result<Option<Dp>, LayoutError> {
        let available = self.width_for_children(scroller_width);
        let desired = self.desired_item_width * self.base_width_multiplier;
        let width = unit_card_width(desired.to_whole(), available.to_whole(), self.child_peek_amount)?;
        trace!(%scroller_width, %desired, width, "fixed child width");
        Ok(Some(Dp::from(width)))
    }

    fn scroller_height(&self, child_width: Option<Dp>) -> Option<Dp> {
        child_width.map(|w| w * HEIGHT_RATIO)
    }
}
