//! Error types for despeckle-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),

    /// Window radius too large for the image
    ///
    /// The mirror boundary scheme performs a single reflection, which is
    /// only valid when `(ws - 1) / 2 < min(rows, cols)`.
    #[error("window size {ws} too large for {rows}x{cols} image")]
    WindowTooLarge {
        /// Requested window side
        ws: u32,
        /// Image rows
        rows: usize,
        /// Image columns
        cols: usize,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
