//! Window reducers
//!
//! A reducer turns one filled window into one output intensity. Four
//! strategies are provided: arithmetic mean, median, the classical Lee
//! adaptive filter (Lee, 1981) and the enhanced Lee filter (Lopes et al.,
//! 1990). The adaptive pair blends the window mean with the unfiltered
//! center intensity according to the local coefficient of variation, which
//! smooths homogeneous regions while leaving edges and point targets alone.

use crate::select::select_kth;

/// Per-window reduction strategy, with the parameters each variant needs.
///
/// `nlook` is the number of independent looks averaged into each pixel; it
/// sets the theoretical noise coefficient of variation `Cu = sqrt(1/nlook)`.
/// `damp` controls how quickly the enhanced Lee blend falls off between its
/// two thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reducer {
    /// Arithmetic mean of the window
    Mean,
    /// Median of the window (order statistic at rank `(len-1)/2`)
    Median,
    /// Classical Lee adaptive filter
    Lee {
        /// Number of looks (>= 1)
        nlook: u32,
    },
    /// Enhanced (damped, piecewise) Lee filter
    EnhancedLee {
        /// Number of looks (>= 1)
        nlook: u32,
        /// Damping factor (> 0)
        damp: f64,
    },
}

impl Reducer {
    /// Reduce one window to a single output value.
    ///
    /// The buffer contents may be reordered (the median selection works in
    /// place); callers refill the window for every pixel.
    pub fn reduce(&self, window: &mut [f64]) -> f64 {
        match *self {
            Reducer::Mean => mean(window),
            Reducer::Median => select_kth(window, (window.len() - 1) / 2),
            Reducer::Lee { nlook } => lee(window, nlook),
            Reducer::EnhancedLee { nlook, damp } => enhanced_lee(window, nlook, damp),
        }
    }
}

fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Local statistics the Lee-family reducers share.
struct WindowStats {
    /// Window mean (Im)
    mean: f64,
    /// Population standard deviation (S), divisor `len` not `len - 1`
    stdev: f64,
    /// Center sample (Ic), the target pixel's own intensity
    center: f64,
}

fn window_stats(window: &[f64]) -> WindowStats {
    let len = window.len() as f64;
    let mean = window.iter().sum::<f64>() / len;
    let ssd: f64 = window
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum();

    WindowStats {
        mean,
        stdev: (ssd / len).sqrt(),
        center: window[(window.len() - 1) / 2],
    }
}

/// Classical Lee filter: `Ic*W + Im*(1-W)` with `W = 1 - Cu^2/Ci^2`.
///
/// `W` is deliberately not clamped; when `Ci < Cu` the weight goes negative
/// and the blend overshoots past the mean, matching the classical
/// formulation. A zero-variance window short-circuits to the mean, so
/// homogeneous regions (and constant images) pass through unchanged instead
/// of dividing by a zero coefficient of variation.
fn lee(window: &[f64], nlook: u32) -> f64 {
    let WindowStats {
        mean: im,
        stdev: s,
        center: ic,
    } = window_stats(window);

    if s == 0.0 {
        return im;
    }

    let ci = s / im;
    let cu = (1.0 / f64::from(nlook)).sqrt();
    let w = 1.0 - cu.powi(2) / ci.powi(2);
    ic * w + im * (1.0 - w)
}

/// Enhanced Lee filter: three-region blend between `Im` and `Ic`.
///
/// Below `Cu` the window is treated as homogeneous and fully smoothed;
/// above `Cmax = sqrt(1 + 2/nlook)` the pixel is left untouched; in
/// between, the weight decays exponentially with the normalized position
/// between the two thresholds, scaled by `damp`.
fn enhanced_lee(window: &[f64], nlook: u32, damp: f64) -> f64 {
    let WindowStats {
        mean: im,
        stdev: s,
        center: ic,
    } = window_stats(window);

    if s == 0.0 {
        return im;
    }

    let ci = s / im;
    let cu = (1.0 / f64::from(nlook)).sqrt();
    let cmax = (1.0 + 2.0 / f64::from(nlook)).sqrt();

    if ci <= cu {
        im
    } else if ci >= cmax {
        ic
    } else {
        let w = (-damp * (ci - cu) / (cmax - ci)).exp();
        im * w + ic * (1.0 - w)
    }
}
