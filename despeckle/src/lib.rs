//! Despeckle - Speckle-reduction filtering for Rust
//!
//! Sliding-window spatial filters for 2D real-valued imagery, built for
//! reducing speckle noise in coherent (radar) images while preserving
//! edges.
//!
//! # Overview
//!
//! Four filters share one windowed engine:
//!
//! - Mean and median filters for simple smoothing
//! - Classical Lee and enhanced Lee adaptive filters, which blend each
//!   pixel with its local mean according to the local coefficient of
//!   variation
//!
//! Image borders are handled by mirror padding. Enable the `parallel`
//! feature to process rows across rayon workers.
//!
//! # Example
//!
//! ```
//! use despeckle::Raster;
//! use despeckle::filter::enhanced_lee_filter;
//!
//! let image = Raster::filled(64, 64, 5.0).unwrap();
//! let out = enhanced_lee_filter(&image, 7, 4, 1.0).unwrap();
//! assert_eq!(out.get(32, 32).unwrap(), 5.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use despeckle_core::*;

// Re-export the filter crate as a module
pub use despeckle_filter as filter;
