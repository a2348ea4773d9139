//! Layout errors.
//!
//! Every calculation rejects out-of-range input instead of clamping it.
//! In-domain input never produces an error.

use thiserror::Error;

/// Errors returned by the card count calculations and layout policies.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// A per-card width used as a divisor was zero.
    #[error("card width must be greater than zero")]
    ZeroCardWidth,

    /// Peeking amount outside `[0, 1]` (or NaN).
    #[error("peeking amount {0} is outside [0, 1]")]
    PeekingOutOfRange(f32),

    /// A `ClusterConfig` failed validation.
    #[error("invalid cluster config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LayoutError::ZeroCardWidth.to_string(),
            "card width must be greater than zero"
        );
        assert_eq!(
            LayoutError::PeekingOutOfRange(1.5).to_string(),
            "peeking amount 1.5 is outside [0, 1]"
        );
    }
}
