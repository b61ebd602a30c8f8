//! Niblack local threshold estimation.
//!
//! Computes a per-pixel binarization threshold `t = mean + k * std` over a
//! square window centered on each pixel, using integral images for
//! constant-time window statistics. Windows are clamped to the image bounds,
//! so edge pixels use shrunken windows rather than padded or wrapped data.

use crate::image::ImageView;
use crate::integral::IntegralImages;
use multiversion::multiversion;
use rayon::prelude::*;

/// Default local window size (pixels per side). Should be odd.
pub const DEFAULT_WINDOW_SIZE: usize = 15;
/// Default sensitivity constant. Niblack's formula expects values in
/// `[-0.2, -0.1]` for dark-on-light text, but any value is accepted.
pub const DEFAULT_K: f32 = -0.2;

/// Estimate the Niblack local threshold for every pixel.
///
/// Returns a row-major `width * height` map of threshold values. The
/// computation is deterministic and purely functional; rows of the output are
/// computed in parallel from the immutable integral tables.
///
/// `window_size` should be odd; an even value is not rejected and simply
/// yields the window implied by its floor-divided half size. A zero-size
/// image produces an empty map.
///
/// Local variance is clamped to zero before the square root, so near-constant
/// windows never produce NaN from floating-point cancellation.
#[must_use]
pub fn niblack_threshold(img: &ImageView, window_size: usize, k: f32) -> Vec<f32> {
    let _span = tracing::info_span!("niblack_threshold").entered();

    if img.is_empty() {
        return Vec::new();
    }

    let tables = IntegralImages::build(img);
    let half = window_size / 2;
    let (rows, cols) = (img.height, img.width);

    let mut out = vec![0f32; img.pixel_count()];
    out.par_chunks_mut(cols)
        .enumerate()
        .for_each(|(y, dst_row)| {
            // 1-based integral-table row coordinate.
            threshold_row(dst_row, &tables, y + 1, rows, cols, half, k);
        });
    out
}

/// Binarize an image against a precomputed threshold map.
///
/// Writes 255 where `pixel >= threshold` and 0 elsewhere. The map must come
/// from an estimator call on an image of the same dimensions.
///
/// # Panics
/// Panics if `thresholds` or `dst` length does not match the image pixel count.
pub fn binarize(img: &ImageView, thresholds: &[f32], dst: &mut [u8]) {
    assert_eq!(
        thresholds.len(),
        img.pixel_count(),
        "Threshold map size does not match image dimensions"
    );
    assert_eq!(
        dst.len(),
        img.pixel_count(),
        "Output buffer size does not match image dimensions"
    );

    for y in 0..img.height {
        let src_row = img.get_row(y);
        let start = y * img.width;
        binarize_row(
            src_row,
            &thresholds[start..start + img.width],
            &mut dst[start..start + img.width],
        );
    }
}

/// Fill one output row with `mean + k * std` over the clamped local window.
/// `y` is the 1-based integral-table row of this output row.
#[multiversion(targets(
    "x86_64+avx2+bmi1+bmi2+popcnt+lzcnt",
    "x86_64+avx512f+avx512bw+avx512dq+avx512vl",
    "aarch64+neon"
))]
fn threshold_row(
    dst: &mut [f32],
    tables: &IntegralImages,
    y: usize,
    rows: usize,
    cols: usize,
    half: usize,
    k: f32,
) {
    let y1 = y.saturating_sub(half).max(1);
    let y2 = y.saturating_add(half).min(rows);
    let window_rows = (y2 - y1 + 1) as f64;
    let kf = f64::from(k);

    for (i, out) in dst.iter_mut().enumerate() {
        let x = i + 1;
        let x1 = x.saturating_sub(half).max(1);
        let x2 = x.saturating_add(half).min(cols);

        let (sum, sq_sum) = tables.window_sums(x1, y1, x2, y2);

        // Window always contains at least the center pixel, so area >= 1.
        let area = window_rows * (x2 - x1 + 1) as f64;
        let mean = sum as f64 / area;
        let variance = (sq_sum as f64 / area - mean * mean).max(0.0);

        *out = (mean + kf * variance.sqrt()) as f32;
    }
}

/// Branchless row binarization against a per-pixel threshold.
#[multiversion(targets(
    "x86_64+avx2+bmi1+bmi2+popcnt+lzcnt",
    "x86_64+avx512f+avx512bw+avx512dq+avx512vl",
    "aarch64+neon"
))]
fn binarize_row(src: &[u8], thresholds: &[f32], dst: &mut [u8]) {
    for i in 0..src.len() {
        // (s >= t) -> 0xFF, else 0x00
        dst[i] = u8::from(f32::from(src[i]) >= thresholds[i]).wrapping_neg();
    }
}
