//! Fixed-by-grid layout policy.

use std::sync::Arc;

use tracing::trace;

use super::HorizontalLayoutPolicy;
use crate::calculator::unit_card_width;
use crate::config::ClusterConfig;
use crate::error::LayoutError;
use crate::units::Dp;

/// Maps the width of a child to the height of the scroller.
pub type ScrollerHeightFn = Arc<dyn Fn(Dp) -> Dp + Send + Sync>;

/// Distributes the scroller width equally among the visible children,
/// leaving room for the peeking card.
///
/// Each child is `width_multiplier` unit cards wide, where the unit width
/// comes from [`unit_card_width`].
#[derive(Clone)]
pub struct FixedByGridLayoutPolicy {
    config: ClusterConfig,
    scroller_height: Option<ScrollerHeightFn>,
}

impl FixedByGridLayoutPolicy {
    /// Create a policy from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is out of range.
    pub fn new(config: ClusterConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            scroller_height: None,
        })
    }

    /// Derive the scroller height from the child width.
    #[must_use]
    pub fn with_scroller_height(mut self, f: impl Fn(Dp) -> Dp + Send + Sync + 'static) -> Self {
        self.scroller_height = Some(Arc::new(f));
        self
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }
}

impl std::fmt::Debug for FixedByGridLayoutPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedByGridLayoutPolicy")
            .field("config", &self.config)
            .field("scroller_height", &self.scroller_height.is_some())
            .finish()
    }
}

impl HorizontalLayoutPolicy for FixedByGridLayoutPolicy {
    fn content_start_padding(&self) -> Dp {
        self.config.content_start_padding
    }

    fn content_end_padding(&self) -> Dp {
        self.config.content_end_padding
    }

    fn child_width(&self, scroller_width: Dp) -> Result<Option<Dp>, LayoutError> {
        let available = self.width_for_children(scroller_width);
        let unit = unit_card_width(
            self.config.desired_card_width.to_whole(),
            available.to_whole(),
            self.config.peeking_amount,
        )?;
        let child = Dp::from(unit) * self.config.width_multiplier as f32;
        trace!(%scroller_width, %available, unit, %child, "fixed-by-grid child width");
        Ok(Some(child))
    }

    fn scroller_height(&self, child_width: Option<Dp>) -> Option<Dp> {
        let f = self.scroller_height.as_ref()?;
        child_width.map(|w| f(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> FixedByGridLayoutPolicy {
        FixedByGridLayoutPolicy::new(
            ClusterConfig::default()
                .with_desired_card_width(Dp(100.0))
                .with_peeking_amount(0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_width_for_children_removes_padding() {
        assert_eq!(policy().width_for_children(Dp(1032.0)), Dp(1000.0));
        assert_eq!(policy().width_for_children(Dp(20.0)), Dp::ZERO);
    }

    #[test]
    fn test_child_width() {
        // 1000 / 10 cards
        assert_eq!(policy().child_width(Dp(1032.0)).unwrap(), Some(Dp(100.0)));
    }

    #[test]
    fn test_child_width_with_multiplier() {
        let policy = FixedByGridLayoutPolicy::new(
            ClusterConfig::default()
                .with_desired_card_width(Dp(100.0))
                .with_peeking_amount(0.0)
                .with_width_multiplier(2),
        )
        .unwrap();
        assert_eq!(policy.child_width(Dp(1032.0)).unwrap(), Some(Dp(200.0)));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = FixedByGridLayoutPolicy::new(ClusterConfig::default().with_peeking_amount(2.0));
        assert!(matches!(result, Err(LayoutError::InvalidConfig(_))));
    }

    #[test]
    fn test_scroller_height() {
        assert_eq!(policy().scroller_height(Some(Dp(100.0))), None);

        let policy = policy().with_scroller_height(|w| w * 1.5);
        assert_eq!(policy.scroller_height(Some(Dp(100.0))), Some(Dp(150.0)));
        assert_eq!(policy.scroller_height(None), None);
    }

    #[test]
    fn test_debug_hides_closure() {
        let debug = format!("{:?}", policy().with_scroller_height(|w| w));
        assert!(debug.contains("scroller_height: true"));
    }
}
