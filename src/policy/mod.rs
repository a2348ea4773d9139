//! Layout policies for horizontally scrolling clusters.
//!
//! A policy turns the measured width of a scroller into the width every child
//! gets, and optionally the height the scroller should take for that child
//! width. Measuring and placing the children is left to the caller.
//!
//! ## Policies
//!
//! - `FixedByGridLayoutPolicy`: built from a `ClusterConfig`, children span
//!   a whole number of unit widths
//! - `FixedLayoutPolicy`: fixed 16dp paddings, 16:9 scroller height

pub mod fixed;
pub mod fixed_by_grid;

pub use fixed::FixedLayoutPolicy;
pub use fixed_by_grid::{FixedByGridLayoutPolicy, ScrollerHeightFn};

use crate::error::LayoutError;
use crate::units::Dp;

/// Policy for laying out a horizontally scrollable list.
pub trait HorizontalLayoutPolicy: Send + Sync {
    /// Padding before the first child.
    fn content_start_padding(&self) -> Dp;

    /// Padding after the last child.
    fn content_end_padding(&self) -> Dp;

    /// Width applied to every child for a scroller of `scroller_width`.
    ///
    /// `None` means children keep their own measured width.
    fn child_width(&self, scroller_width: Dp) -> Result<Option<Dp>, LayoutError>;

    /// Height of the scroller for the given child width, or `None` if the
    /// height does not depend on it.
    fn scroller_height(&self, child_width: Option<Dp>) -> Option<Dp>;

    /// Width left for children once both content paddings are removed.
    fn width_for_children(&self, scroller_width: Dp) -> Dp {
        scroller_width.saturating_sub(self.content_start_padding() + self.content_end_padding())
    }
}
