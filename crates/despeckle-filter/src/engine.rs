//! Filtering engine
//!
//! Drives a [`Reducer`] over every pixel of an input raster: for each output
//! cell the engine fills a scratch window (mirror-padded at the borders) and
//! writes the reduced value. Every window is drawn solely from the immutable
//! input, never from partially written output, so pixel ordering is free and
//! rows can be processed in parallel.
//!
//! The scratch window buffer is allocated once per worker and reused across
//! pixels.

use crate::error::{FilterError, FilterResult};
use crate::reducer::Reducer;
use crate::window::fill_window;
use despeckle_core::Raster;

/// Apply `reducer` over a sliding `ws x ws` window of `src`.
///
/// `ws` is expected to be odd; an even value is accepted and produces the
/// asymmetric window described in [`fill_window`](crate::window::fill_window).
///
/// # Errors
///
/// * `FilterError::InvalidParameters` if `ws == 0`.
/// * `FilterError::WindowTooLarge` if the window radius `(ws-1)/2` reaches
///   the smaller image dimension, which would break the single-reflection
///   mirror scheme.
pub fn apply(src: &Raster, ws: u32, reducer: &Reducer) -> FilterResult<Raster> {
    if ws == 0 {
        return Err(FilterError::InvalidParameters(
            "window size must be positive".into(),
        ));
    }

    let (rows, cols) = src.dimensions();
    let scale = ((ws - 1) / 2) as usize;
    if scale >= rows || scale >= cols {
        return Err(FilterError::WindowTooLarge { ws, rows, cols });
    }

    log::debug!("applying {reducer:?} over {rows}x{cols} raster, {ws}x{ws} window");

    let mut out = Raster::new(rows, cols)?;
    run_rows(src, &mut out, ws as usize, reducer);
    Ok(out)
}

#[cfg(not(feature = "parallel"))]
fn run_rows(src: &Raster, out: &mut Raster, ws: usize, reducer: &Reducer) {
    let rows = src.rows();
    let mut window = Vec::with_capacity(ws * ws);

    for r in 0..rows {
        let out_row = out.row_mut(r);
        for (c, cell) in out_row.iter_mut().enumerate() {
            fill_window(src, r, c, ws, &mut window);
            *cell = reducer.reduce(&mut window);
        }
    }
}

#[cfg(feature = "parallel")]
fn run_rows(src: &Raster, out: &mut Raster, ws: usize, reducer: &Reducer) {
    use rayon::prelude::*;

    let cols = src.cols();
    out.data_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each_init(
            || Vec::with_capacity(ws * ws),
            |window, (r, out_row)| {
                for (c, cell) in out_row.iter_mut().enumerate() {
                    fill_window(src, r, c, ws, window);
                    *cell = reducer.reduce(window);
                }
            },
        );
}

/// Apply a mean filter.
///
/// Replaces each pixel by the arithmetic mean of its `ws x ws` mirrored
/// neighborhood.
pub fn mean_filter(src: &Raster, ws: u32) -> FilterResult<Raster> {
    apply(src, ws, &Reducer::Mean)
}

/// Apply a median filter.
///
/// Replaces each pixel by the median of its `ws x ws` mirrored neighborhood.
pub fn median_filter(src: &Raster, ws: u32) -> FilterResult<Raster> {
    apply(src, ws, &Reducer::Median)
}

/// Apply the classical Lee adaptive filter.
///
/// # Arguments
/// * `src` - Input intensity raster
/// * `ws` - Window side (expected odd)
/// * `nlook` - Number of looks (must be >= 1)
///
/// # Example
///
/// ```
/// use despeckle_core::Raster;
/// use despeckle_filter::lee_filter;
///
/// let image = Raster::filled(16, 16, 3.0).unwrap();
/// let out = lee_filter(&image, 5, 4).unwrap();
/// assert_eq!(out.get(8, 8).unwrap(), 3.0);
/// ```
pub fn lee_filter(src: &Raster, ws: u32, nlook: u32) -> FilterResult<Raster> {
    check_nlook(nlook)?;
    apply(src, ws, &Reducer::Lee { nlook })
}

/// Apply the enhanced Lee filter.
///
/// # Arguments
/// * `src` - Input intensity raster
/// * `ws` - Window side (expected odd)
/// * `nlook` - Number of looks (must be >= 1)
/// * `damp` - Damping factor (must be positive and finite)
pub fn enhanced_lee_filter(src: &Raster, ws: u32, nlook: u32, damp: f64) -> FilterResult<Raster> {
    check_nlook(nlook)?;
    if !damp.is_finite() || damp <= 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "damping factor must be positive and finite, got {damp}"
        )));
    }
    apply(src, ws, &Reducer::EnhancedLee { nlook, damp })
}

fn check_nlook(nlook: u32) -> FilterResult<()> {
    if nlook == 0 {
        return Err(FilterError::InvalidParameters(
            "number of looks must be >= 1".into(),
        ));
    }
    Ok(())
}
