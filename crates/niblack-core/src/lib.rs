//! Niblack adaptive thresholding with integral-image acceleration.
//!
//! Computes a per-pixel binarization threshold for a grayscale image using
//! Niblack's local-statistics method: `t = mean + k * std` over a square
//! window centered on each pixel.
//!
//! # Architecture Overview
//!
//! The transform is a pure function over the input image, split into two
//! passes optimized for cache locality and data parallelism:
//!
//! 1. **Integral images**: summed-area tables over raw and squared pixel
//!    values, built in one sweep with running row sums. Exact `u64`
//!    accumulation, one zero guard row/column so window queries need no
//!    boundary branching.
//! 2. **Threshold map**: rows of the output are filled in parallel, each
//!    pixel deriving its clamped window bounds and reading both tables with
//!    four-corner inclusion-exclusion. Multiversion SIMD dispatch on the
//!    per-row kernels.
//!
//! Windows shrink at image edges rather than padding or wrapping, so every
//! output cell is the statistic of real pixels only.
//!
//! # Example
//!
//! ```
//! use niblack_core::{binarize, niblack_threshold, ImageView, DEFAULT_K, DEFAULT_WINDOW_SIZE};
//!
//! let pixels = vec![128u8; 64 * 64];
//! let img = ImageView::from_packed(&pixels, 64, 64).unwrap();
//!
//! let thresholds = niblack_threshold(&img, DEFAULT_WINDOW_SIZE, DEFAULT_K);
//! assert_eq!(thresholds.len(), 64 * 64);
//!
//! // Optional: binarize against the map (pixel >= threshold -> 255).
//! let mut binary = vec![0u8; 64 * 64];
//! binarize(&img, &thresholds, &mut binary);
//! ```

/// Image buffer abstractions.
pub mod image;
/// Summed-area tables for constant-time window statistics.
pub mod integral;
/// Niblack threshold estimation and binarization.
pub mod threshold;

pub use crate::image::ImageView;
pub use crate::integral::IntegralImages;
pub use crate::threshold::{binarize, niblack_threshold, DEFAULT_K, DEFAULT_WINDOW_SIZE};
