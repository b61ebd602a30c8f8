//! Summed-area tables for constant-time local window statistics.

use crate::image::ImageView;

/// Integral images over raw pixel values and squared pixel values.
///
/// Both tables are `(height + 1) x (width + 1)` with row 0 and column 0 all
/// zero, so inclusive rectangle queries need no boundary branching. Cell
/// `(r, c)` holds the sum over image rows `0..r` and columns `0..c`.
/// Accumulation is done in `u64`, which is exact for 8-bit samples at any
/// realistic image size.
pub struct IntegralImages {
    sum: Vec<u64>,
    sq_sum: Vec<u64>,
    /// Row stride of both tables (`width + 1`).
    stride: usize,
}

impl IntegralImages {
    /// Build both tables in a single sweep using running row sums.
    #[must_use]
    pub fn build(img: &ImageView) -> Self {
        let stride = img.width + 1;
        let len = stride * (img.height + 1);
        let mut sum = vec![0u64; len];
        let mut sq_sum = vec![0u64; len];

        for y in 0..img.height {
            let src_row = img.get_row(y);
            let above = y * stride;
            let current = (y + 1) * stride;

            let mut row_acc = 0u64;
            let mut row_sq_acc = 0u64;
            for (x, &p) in src_row.iter().enumerate() {
                let v = u64::from(p);
                row_acc += v;
                row_sq_acc += v * v;
                sum[current + x + 1] = sum[above + x + 1] + row_acc;
                sq_sum[current + x + 1] = sq_sum[above + x + 1] + row_sq_acc;
            }
        }

        Self {
            sum,
            sq_sum,
            stride,
        }
    }

    /// Sum and squared sum over the inclusive rectangle `[y1..y2] x [x1..x2]`
    /// in 1-based table coordinates, via four-corner inclusion-exclusion.
    #[inline(always)]
    #[must_use]
    pub fn window_sums(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> (u64, u64) {
        debug_assert!(x1 >= 1 && y1 >= 1 && x2 >= x1 && y2 >= y1);
        let s = self.stride;
        let br = y2 * s + x2;
        let bl = y2 * s + (x1 - 1);
        let tr = (y1 - 1) * s + x2;
        let tl = (y1 - 1) * s + (x1 - 1);
        (
            self.sum[br] + self.sum[tl] - self.sum[bl] - self.sum[tr],
            self.sq_sum[br] + self.sq_sum[tl] - self.sq_sum[bl] - self.sq_sum[tr],
        )
    }
}
