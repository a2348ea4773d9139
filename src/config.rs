//! Cluster configuration.
//!
//! A `ClusterConfig` describes a fixed-by-grid cluster: the padding around
//! its content, how much of an extra card peeks past the edge, and the width
//! a 1x card would ideally have. Layout policies are built from it.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::units::Dp;

/// Configuration for a fixed-by-grid cluster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Padding before the first card.
    pub content_start_padding: Dp,

    /// Padding after the last card.
    pub content_end_padding: Dp,

    /// Fraction of an extra card shown past the edge, in `[0, 1]`.
    pub peeking_amount: f32,

    /// Desired width of a 1x card.
    pub desired_card_width: Dp,

    /// Number of unit widths one child spans (2 for a 2x card).
    pub width_multiplier: u32,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            content_start_padding: Dp(16.0),
            content_end_padding: Dp(16.0),
            peeking_amount: 0.1,
            desired_card_width: Dp(112.0),
            width_multiplier: 1,
        }
    }
}

impl ClusterConfig {
    /// Set both content paddings.
    #[must_use]
    pub fn with_padding(mut self, padding: Dp) -> Self {
        self.content_start_padding = padding;
        self.content_end_padding = padding;
        self
    }

    /// Set the start padding.
    #[must_use]
    pub fn with_start_padding(mut self, padding: Dp) -> Self {
        self.content_start_padding = padding;
        self
    }

    /// Set the end padding.
    #[must_use]
    pub fn with_end_padding(mut self, padding: Dp) -> Self {
        self.content_end_padding = padding;
        self
    }

    /// Set the peeking amount.
    #[must_use]
    pub fn with_peeking_amount(mut self, amount: f32) -> Self {
        self.peeking_amount = amount;
        self
    }

    /// Set the desired 1x card width.
    #[must_use]
    pub fn with_desired_card_width(mut self, width: Dp) -> Self {
        self.desired_card_width = width;
        self
    }

    /// Set the width multiplier.
    #[must_use]
    pub fn with_width_multiplier(mut self, multiplier: u32) -> Self {
        self.width_multiplier = multiplier;
        self
    }

    /// Check every field is in range.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, padding) in [
            ("content_start_padding", self.content_start_padding),
            ("content_end_padding", self.content_end_padding),
        ] {
            if !padding.0.is_finite() || padding.0 < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be a non-negative length, got {padding}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.peeking_amount) {
            return Err(LayoutError::InvalidConfig(format!(
                "peeking_amount must be in [0, 1], got {}",
                self.peeking_amount
            )));
        }
        // Sub-1dp widths truncate to zero when handed to the calculator.
        if !self.desired_card_width.0.is_finite() || self.desired_card_width.to_whole() == 0 {
            return Err(LayoutError::InvalidConfig(format!(
                "desired_card_width must be at least 1dp, got {}",
                self.desired_card_width
            )));
        }
        if self.width_multiplier == 0 {
            return Err(LayoutError::InvalidConfig(
                "width_multiplier must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
