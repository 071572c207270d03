//! Despeckle Core - Basic data structures for speckle filtering
//!
//! This crate provides the fundamental data structures used throughout
//! the despeckle filtering library:
//!
//! - [`Raster`] - Dense real-valued (f64) image, addressed by (row, col)
//! - [`Error`] / [`Result`] - Unified error handling
//!
//! # Example
//!
//! ```
//! use despeckle_core::Raster;
//!
//! let raster = Raster::new(480, 640).unwrap();
//! assert_eq!(raster.dimensions(), (480, 640));
//! ```

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::Raster;
