//! Speckle filter regression test
//!
//! End-to-end checks of the four filters through the public API: known
//! neighborhoods, order-statistic cross-checks against a sort-based
//! reference, and edge behavior of the adaptive pair.

use despeckle_core::Raster;
use despeckle_filter::window::fill_window;
use despeckle_filter::{
    enhanced_lee_filter, lee_filter, mean_filter, median_filter,
};
use rand::RngExt;

fn random_raster(rows: usize, cols: usize, lo: f64, hi: f64) -> Raster {
    let mut rng = rand::rng();
    let data = (0..rows * cols).map(|_| rng.random_range(lo..hi)).collect();
    Raster::from_data(rows, cols, data).unwrap()
}

#[test]
fn mean_reg() {
    // 5x5 ramp, 3x3 window: the interior neighborhood of (2,2) is
    // {7,8,9,12,13,14,17,18,19}, whose mean is the center value itself.
    let src = Raster::from_data(5, 5, (1..=25).map(f64::from).collect()).unwrap();
    let out = mean_filter(&src, 3).unwrap();
    assert_eq!(out.dimensions(), (5, 5));
    assert_eq!(out.get(2, 2).unwrap(), 13.0);

    // Averaging a speckled image must reduce variance.
    let noisy = random_raster(32, 32, 0.0, 100.0);
    let smoothed = mean_filter(&noisy, 5).unwrap();

    let variance = |r: &Raster| {
        let m = r.mean();
        r.data().iter().map(|v| (v - m) * (v - m)).sum::<f64>() / r.data().len() as f64
    };
    let var_in = variance(&noisy);
    let var_out = variance(&smoothed);
    eprintln!("variance before {var_in:.2}, after {var_out:.2}");
    assert!(var_out < var_in);
}

#[test]
fn median_reg() {
    // Every output pixel must equal the value at the middle rank of the
    // brute-force sorted mirrored window.
    let src = random_raster(20, 17, -50.0, 50.0);

    for ws in [3usize, 5] {
        let out = median_filter(&src, ws as u32).unwrap();
        let mut window = Vec::with_capacity(ws * ws);

        for r in 0..src.rows() {
            for c in 0..src.cols() {
                fill_window(&src, r, c, ws, &mut window);
                let mut sorted = window.clone();
                sorted.sort_by(|x, y| x.partial_cmp(y).unwrap());
                let expected = sorted[(ws * ws - 1) / 2];
                assert_eq!(
                    out.get_unchecked(r, c),
                    expected,
                    "ws={} at ({},{})",
                    ws,
                    r,
                    c
                );
            }
        }
    }
}

#[test]
fn lee_homogeneous_reg() {
    // Low-contrast imagery keeps Ci below Cu everywhere, so the enhanced
    // Lee output is exactly the window mean at every pixel.
    let src = random_raster(16, 16, 99.0, 101.0);
    let ws = 5usize;
    let nlook = 4u32;

    let out = enhanced_lee_filter(&src, ws as u32, nlook, 1.0).unwrap();
    let mut window = Vec::with_capacity(ws * ws);

    for r in 0..src.rows() {
        for c in 0..src.cols() {
            fill_window(&src, r, c, ws, &mut window);
            let im = window.iter().sum::<f64>() / window.len() as f64;
            assert_eq!(out.get_unchecked(r, c), im, "at ({r},{c})");
        }
    }
}

#[test]
fn enhanced_lee_edge_reg() {
    // A sharp step: the enhanced Lee filter must keep the step far
    // steeper than plain averaging does.
    let mut src = Raster::new(20, 20).unwrap();
    for r in 0..20 {
        for c in 0..20 {
            src.set_unchecked(r, c, if c < 10 { 10.0 } else { 200.0 });
        }
    }

    let adaptive = enhanced_lee_filter(&src, 3, 4, 1.0).unwrap();
    let averaged = mean_filter(&src, 3).unwrap();

    let adaptive_step = adaptive.get(10, 10).unwrap() - adaptive.get(10, 9).unwrap();
    let averaged_step = averaged.get(10, 10).unwrap() - averaged.get(10, 9).unwrap();
    eprintln!("step across edge: adaptive {adaptive_step:.1}, averaged {averaged_step:.1}");

    // The last pixel before the step sits almost at Cmax; its blend
    // weight collapses and it keeps its own intensity.
    assert!((adaptive.get(10, 9).unwrap() - 10.0).abs() < 1e-6);
    assert!(adaptive_step > 130.0);
    assert!(averaged_step < 100.0);
}

#[test]
fn constant_image_reg() {
    // All four filters leave a constant image untouched.
    let src = Raster::filled(3, 3, 5.0).unwrap();

    for out in [
        mean_filter(&src, 3).unwrap(),
        median_filter(&src, 3).unwrap(),
        lee_filter(&src, 3, 4).unwrap(),
        enhanced_lee_filter(&src, 3, 4, 1.0).unwrap(),
    ] {
        assert_eq!(out.dimensions(), (3, 3));
        for &val in out.data() {
            assert_eq!(val, 5.0);
        }
    }
}

#[test]
fn unit_window_reg() {
    // ws = 1 reduces every filter to the identity transform.
    let src = random_raster(11, 13, -10.0, 10.0);

    for out in [
        mean_filter(&src, 1).unwrap(),
        median_filter(&src, 1).unwrap(),
        lee_filter(&src, 1, 1).unwrap(),
        enhanced_lee_filter(&src, 1, 1, 1.0).unwrap(),
    ] {
        assert_eq!(out.data(), src.data());
    }
}
