//! # cluster-layout
//!
//! Card count and card width calculations for horizontally scrolling card
//! clusters.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is a deterministic function of
//!    its arguments. No state, no I/O, safe to call from any thread.
//!
//! 2. **Peeking Is Exact**: The fraction of the extra card shown at the edge
//!    is carried through to the card count unrounded.
//!
//! 3. **Fail Loudly**: Out-of-range input (zero card width, peeking outside
//!    `[0, 1]`) is rejected with `LayoutError` rather than clamped.
//!
//! ## Modules
//!
//! - `calculator`: Card count and card width formulas
//! - `units`: `Dp` length type
//! - `config`: `ClusterConfig` for fixed-by-grid clusters
//! - `policy`: `HorizontalLayoutPolicy` and its implementations
//! - `error`: `LayoutError`
//!
//! ## Example
//!
//! ```
//! use cluster_layout::{card_count, unit_card_width};
//!
//! // 1000dp of room for cards that would like to be 100dp wide,
//! // with half of an 11th card peeking.
//! let count = card_count(100, 1000, 0.5).unwrap();
//! assert_eq!(count, 10.5);
//! assert_eq!(unit_card_width(100, 1000, 0.5).unwrap(), 95);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod policy;
pub mod units;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::calculator::{
    card_count, card_width_from_min_width, fit_min_width, max_card_count_for_min_width,
    unit_card_width, GridFit, MIN_UNIT_CARD_COUNT,
};

pub use crate::config::ClusterConfig;
pub use crate::error::LayoutError;
pub use crate::units::Dp;

pub use crate::policy::{
    FixedByGridLayoutPolicy, FixedLayoutPolicy, HorizontalLayoutPolicy, ScrollerHeightFn,
};
