//! Stride-aware grayscale image view for zero-copy ingestion.

/// A borrowed view into a grayscale image buffer with explicit stride support.
/// This allows handling buffers with row padding or non-standard layouts
/// without copying. The underlying data is never mutated.
#[derive(Clone, Copy)]
pub struct ImageView<'a> {
    pub data: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub stride: usize,
}

impl<'a> ImageView<'a> {
    /// Create a new ImageView after validating that the buffer size matches
    /// the dimensions and stride.
    pub fn new(data: &'a [u8], width: usize, height: usize, stride: usize) -> Result<Self, String> {
        if stride < width {
            return Err(format!(
                "Stride ({}) cannot be less than width ({})",
                stride, width
            ));
        }
        let required_size = if height > 0 && width > 0 {
            (height - 1) * stride + width
        } else {
            0
        };
        if data.len() < required_size {
            return Err(format!(
                "Buffer size ({}) is too small for {}x{} image with stride {} (required: {})",
                data.len(),
                width,
                height,
                stride,
                required_size
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// View over a tightly packed buffer (stride == width).
    pub fn from_packed(data: &'a [u8], width: usize, height: usize) -> Result<Self, String> {
        Self::new(data, width, height, width)
    }

    /// Number of pixels in the image.
    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// True if the image has no pixels in at least one dimension.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Safe accessor for a specific row.
    #[inline(always)]
    pub fn get_row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "Row index {} out of bounds", y);
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Safe accessor for a specific pixel.
    #[inline(always)]
    pub fn get_pixel(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width, "Column index {} out of bounds", x);
        self.get_row(y)[x]
    }
}
