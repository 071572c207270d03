//! despeckle-filter - Speckle-reduction filters
//!
//! This crate provides sliding-window spatial filters for 2D real-valued
//! intensity imagery, aimed at reducing speckle noise in coherent (radar)
//! images while preserving edges:
//!
//! - Mean filter (plain window averaging)
//! - Median filter (order-statistic selection, no full sort)
//! - Classical Lee adaptive filter
//! - Enhanced Lee filter (damped, piecewise blend)
//!
//! All filters share one engine: every output pixel is reduced from a
//! square, mirror-padded window of the input. Enable the `parallel` feature
//! to partition rows across rayon workers.

pub mod engine;
mod error;
pub mod mirror;
pub mod reducer;
pub mod select;
pub mod window;

pub use error::{FilterError, FilterResult};
pub use reducer::Reducer;

// Re-export commonly used functions
pub use engine::{apply, enhanced_lee_filter, lee_filter, mean_filter, median_filter};
