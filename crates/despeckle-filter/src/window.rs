//! Window sampling
//!
//! Gathers the square neighborhood around a target pixel into a flat scratch
//! buffer, reflecting out-of-range coordinates back into the image with
//! [`mirror`].

use crate::mirror::mirror;
use despeckle_core::Raster;

/// Fill `buf` with the `ws * ws` neighborhood of (`row`, `col`).
///
/// The buffer is cleared and refilled in row-major order over the window's
/// local offsets: for `dr` in `0..ws`, then `dc` in `0..ws`, the sample at
/// flat index `dr * ws + dc` is taken from the mirrored coordinate
/// `(row - scale + dr, col - scale + dc)` where `scale = (ws - 1) / 2`.
///
/// The enumeration order is part of the contract: when `ws` is odd, the
/// sample at flat index `(ws*ws - 1) / 2` is the target pixel itself, which
/// the adaptive reducers read back as the unfiltered center intensity.
pub fn fill_window(src: &Raster, row: usize, col: usize, ws: usize, buf: &mut Vec<f64>) {
    let (rows, cols) = src.dimensions();
    let scale = (ws - 1) / 2;

    buf.clear();
    for dr in 0..ws {
        let r = mirror(row as isize - scale as isize + dr as isize, rows);
        let src_row = src.row(r);
        for dc in 0..ws {
            let c = mirror(col as isize - scale as isize + dc as isize, cols);
            buf.push(src_row[c]);
        }
    }
}
