//! Calculator bindings for Python.

use pyo3::prelude::*;

use crate::calculator;

/// Number of cards in a cluster including the peeking fraction.
#[pyfunction]
pub fn card_count(
    desired_unit_card_width: u32,
    width_for_children: u32,
    peeking_amount: f32,
) -> PyResult<f32> {
    Ok(calculator::card_count(desired_unit_card_width, width_for_children, peeking_amount)?)
}

/// Width of a 1x card in a peeking cluster.
#[pyfunction]
pub fn unit_card_width(
    desired_unit_card_width: u32,
    width_for_children: u32,
    peeking_amount: f32,
) -> PyResult<u32> {
    Ok(calculator::unit_card_width(desired_unit_card_width, width_for_children, peeking_amount)?)
}

/// Largest number of cards of at least `min_width_per_card` that fit.
#[pyfunction]
pub fn max_card_count_for_min_width(
    min_width_per_card: u32,
    width_for_children: u32,
    padding: u32,
) -> PyResult<u32> {
    Ok(calculator::max_card_count_for_min_width(min_width_per_card, width_for_children, padding)?)
}

/// Width each of `count` cards takes to fill the row. Negative when the
/// gaps are wider than the row.
#[pyfunction]
pub fn card_width_from_min_width(count: u32, width_for_children: u32, padding: u32) -> i64 {
    calculator::card_width_from_min_width(count, width_for_children, padding)
}

/// Returns `(count, card_width)`.
#[pyfunction]
pub fn fit_min_width(
    min_width_per_card: u32,
    width_for_children: u32,
    padding: u32,
) -> PyResult<(u32, u32)> {
    let fit = calculator::fit_min_width(min_width_per_card, width_for_children, padding)?;
    Ok((fit.count, fit.card_width))
}
