//! Raised-edge bevel applied to every tile.
//!
//! Draws a light band along the top and left edges and a dark band along the
//! bottom and right edges, giving each piece a pseudo-3D appearance. Draw
//! order is fixed (top, left, bottom, right) so the shadow wins at the
//! bottom-left and top-right corners; tests pin this down.

use crate::image::{ImageRgba8, PixelGridMut, Rgba8};

/// Default highlight: opaque white.
pub const HIGHLIGHT: Rgba8 = [255, 255, 255, 255];
/// Default shadow: opaque mid-gray (#808080).
pub const SHADOW: Rgba8 = [128, 128, 128, 255];

/// Bevel colors and band thickness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BevelParams {
    pub highlight: Rgba8,
    pub shadow: Rgba8,
    /// Band thickness in pixels, clamped to the tile dimensions.
    pub thickness: usize,
}

impl Default for BevelParams {
    fn default() -> Self {
        Self {
            highlight: HIGHLIGHT,
            shadow: SHADOW,
            thickness: 2,
        }
    }
}

/// Draw the bevel bands in place. Pixels beyond `thickness` from every edge
/// are left untouched.
pub fn apply_bevel(tile: &mut ImageRgba8, params: &BevelParams) {
    let w = tile.width();
    let h = tile.height();
    if w == 0 || h == 0 {
        return;
    }
    let band_h = params.thickness.min(h);
    let band_w = params.thickness.min(w);

    for y in 0..band_h {
        tile.fill_row_span(y, 0, w, params.highlight);
    }
    for x in 0..band_w {
        tile.fill_col_span(x, 0, h, params.highlight);
    }
    for y in h - band_h..h {
        tile.fill_row_span(y, 0, w, params.shadow);
    }
    for x in w - band_w..w {
        tile.fill_col_span(x, 0, h, params.shadow);
    }
}
