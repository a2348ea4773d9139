//! Layout policy bindings for Python.

use pyo3::prelude::*;

use crate::config::ClusterConfig;
use crate::policy::{FixedByGridLayoutPolicy, FixedLayoutPolicy, HorizontalLayoutPolicy};
use crate::units::Dp;

/// Python wrapper for FixedByGridLayoutPolicy.
///
/// Scroller height is left to the caller.
#[pyclass(name = "FixedByGridLayoutPolicy")]
#[derive(Clone, Debug)]
pub struct PyFixedByGridLayoutPolicy(pub FixedByGridLayoutPolicy);

#[pymethods]
impl PyFixedByGridLayoutPolicy {
    /// Create a new policy. Raises `ValueError` for an invalid configuration.
    #[new]
    #[pyo3(signature = (
        desired_card_width = 112.0,
        peeking_amount = 0.1,
        start_padding = 16.0,
        end_padding = 16.0,
        width_multiplier = 1
    ))]
    fn new(
        desired_card_width: f32,
        peeking_amount: f32,
        start_padding: f32,
        end_padding: f32,
        width_multiplier: u32,
    ) -> PyResult<Self> {
        let config = ClusterConfig::default()
            .with_desired_card_width(Dp(desired_card_width))
            .with_peeking_amount(peeking_amount)
            .with_start_padding(Dp(start_padding))
            .with_end_padding(Dp(end_padding))
            .with_width_multiplier(width_multiplier);
        Ok(Self(FixedByGridLayoutPolicy::new(config)?))
    }

    /// Width of every child for a scroller of `scroller_width` dp.
    fn child_width(&self, scroller_width: f32) -> PyResult<Option<f32>> {
        Ok(self.0.child_width(Dp(scroller_width))?.map(Dp::value))
    }

    /// Width left for children once content padding is removed.
    fn width_for_children(&self, scroller_width: f32) -> f32 {
        self.0.width_for_children(Dp(scroller_width)).value()
    }

    fn __repr__(&self) -> String {
        let config = self.0.config();
        format!(
            "FixedByGridLayoutPolicy(desired_card_width={}, peeking_amount={}, width_multiplier={})",
            config.desired_card_width.value(),
            config.peeking_amount,
            config.width_multiplier
        )
    }
}

/// Python wrapper for FixedLayoutPolicy.
#[pyclass(name = "FixedLayoutPolicy")]
#[derive(Clone, Debug)]
pub struct PyFixedLayoutPolicy(pub FixedLayoutPolicy);

#[pymethods]
impl PyFixedLayoutPolicy {
    #[new]
    #[pyo3(signature = (desired_item_width, child_peek_amount = 0.1, base_width_multiplier = 1.0))]
    fn new(desired_item_width: f32, child_peek_amount: f32, base_width_multiplier: f32) -> Self {
        Self(
            FixedLayoutPolicy::new(Dp(desired_item_width))
                .with_peek_amount(child_peek_amount)
                .with_base_width_multiplier(base_width_multiplier),
        )
    }

    /// Width of every child. Raises `ValueError` for an out-of-range peek amount.
    fn child_width(&self, scroller_width: f32) -> PyResult<Option<f32>> {
        Ok(self.0.child_width(Dp(scroller_width))?.map(Dp::value))
    }

    /// 16:9 scroller height for the given child width.
    fn scroller_height(&self, child_width: Option<f32>) -> Option<f32> {
        self.0.scroller_height(child_width.map(Dp)).map(Dp::value)
    }

    fn __repr__(&self) -> String {
        format!(
            "FixedLayoutPolicy(desired_item_width={}, child_peek_amount={}, base_width_multiplier={})",
            self.0.desired_item_width.value(),
            self.0.child_peek_amount,
            self.0.base_width_multiplier
        )
    }
}
