//! Owned RGBA8 image in row-major layout (stride == width).
//!
//! The slicer decodes the source into one of these and every tile owns an
//! independent crop, so border drawing never aliases the source buffer.

use super::traits::{PixelGrid, PixelGridMut};

/// One RGBA pixel, 8 bits per channel.
pub type Rgba8 = [u8; 4];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgba8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgba8>,
}

impl ImageRgba8 {
    /// Construct a transparent-black buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![[0; 4]; w * h],
        }
    }

    /// Construct from an existing row-major pixel vector.
    ///
    /// Panics if `data` does not hold exactly `w * h` pixels.
    pub fn from_raw(w: usize, h: usize, data: Vec<Rgba8>) -> Self {
        assert_eq!(data.len(), w * h, "pixel buffer size mismatch");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: Rgba8) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    /// Copy the region `[left, left+width) × [top, top+height)` into a new,
    /// independently-owned buffer.
    ///
    /// Callers must keep the region inside the image; the slicer only passes
    /// frames validated against the source dimensions.
    pub fn crop(&self, left: usize, top: usize, width: usize, height: usize) -> ImageRgba8 {
        debug_assert!(left + width <= self.w, "crop exceeds image width");
        debug_assert!(top + height <= self.h, "crop exceeds image height");

        let mut data = Vec::with_capacity(width * height);
        for y in top..top + height {
            data.extend_from_slice(&self.row(y)[left..left + width]);
        }
        ImageRgba8::from_raw(width, height, data)
    }
}

impl PixelGrid for ImageRgba8 {
    type Pixel = Rgba8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl PixelGridMut for ImageRgba8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
