//! Density-independent lengths.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A length in density-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Dp(pub f32);

impl Dp {
    /// Zero length.
    pub const ZERO: Dp = Dp(0.0);

    /// Create a new length.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Whole dp, truncated toward zero. Negative and NaN lengths become 0.
    #[must_use]
    pub fn to_whole(self) -> u32 {
        self.0 as u32
    }

    /// Subtract, stopping at zero.
    #[must_use]
    pub fn saturating_sub(self, rhs: Dp) -> Dp {
        Dp((self.0 - rhs.0).max(0.0))
    }
}

impl From<u32> for Dp {
    fn from(value: u32) -> Self {
        Dp(value as f32)
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl std::fmt::Display for Dp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}dp", self.0)
    }
}
