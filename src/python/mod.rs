//! Python bindings for the cluster layout calculations.
//!
//! # Quick Start
//!
//! ```python
//! import cluster_layout as cl
//!
//! cl.card_count(100, 1000, 0.1)          # 10.1
//! cl.unit_card_width(100, 1000, 0.1)     # 99
//! cl.fit_min_width(100, 1000, 10)        # (9, 102)
//!
//! policy = cl.FixedByGridLayoutPolicy(desired_card_width=100.0, peeking_amount=0.0)
//! policy.child_width(1032.0)             # 100.0
//!
//! fixed = cl.FixedLayoutPolicy(100.0, child_peek_amount=0.0)
//! fixed.scroller_height(fixed.child_width(1632.0))  # 56.25
//! ```
//!
//! Every `LayoutError` is raised as `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::LayoutError;

mod py_calculator;
mod py_policy;

pub use py_calculator::*;
pub use py_policy::*;

impl From<LayoutError> for PyErr {
    fn from(err: LayoutError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// cluster_layout: card count and card width calculations for card clusters.
#[pymodule]
fn cluster_layout(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Calculator
    m.add_function(wrap_pyfunction!(card_count, m)?)?;
    m.add_function(wrap_pyfunction!(unit_card_width, m)?)?;
    m.add_function(wrap_pyfunction!(max_card_count_for_min_width, m)?)?;
    m.add_function(wrap_pyfunction!(card_width_from_min_width, m)?)?;
    m.add_function(wrap_pyfunction!(fit_min_width, m)?)?;

    // Policies
    m.add_class::<PyFixedByGridLayoutPolicy>()?;
    m.add_class::<PyFixedLayoutPolicy>()?;

    Ok(())
}
