use super::grid::TileFrame;
use serde::Serialize;

/// Geometry of one written tile, in the source image's pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileMeta {
    pub row: usize,
    pub col: usize,
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub width: usize,
    pub height: usize,
}

impl From<TileFrame> for TileMeta {
    fn from(frame: TileFrame) -> Self {
        Self {
            row: frame.row,
            col: frame.col,
            left: frame.left,
            top: frame.top,
            right: frame.right,
            bottom: frame.bottom,
            width: frame.width(),
            height: frame.height(),
        }
    }
}

/// Outcome of one slicing call: every tile's geometry in row-major order plus
/// the source dimensions. Immutable after creation; the caller serializes it
/// for whatever presentation layer consumes the pieces.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SliceResult {
    pub tiles: Vec<TileMeta>,
    pub image_width: usize,
    pub image_height: usize,
    pub latency_ms: f64,
}
