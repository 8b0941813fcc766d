//! Grid validation and tile-frame geometry.
//!
//! Piece dimensions come from floor division of the image size by the grid
//! counts. Frames tile the top-left `(cols*piece_width) × (rows*piece_height)`
//! subregion exactly; remainder pixels belong to no frame.

use super::error::SliceError;
use serde::{Deserialize, Serialize};

/// Requested grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the grid against the source dimensions and resolve the piece size.
    ///
    /// Rejects zero rows/cols and grids finer than the image (which would
    /// produce zero-area tiles) with `InvalidGridSpec`.
    pub fn validate(
        &self,
        image_width: usize,
        image_height: usize,
    ) -> Result<TileLayout, SliceError> {
        if self.rows == 0 || self.cols == 0 || self.cols > image_width || self.rows > image_height
        {
            return Err(SliceError::InvalidGridSpec {
                rows: self.rows,
                cols: self.cols,
                image_width,
                image_height,
            });
        }
        Ok(TileLayout {
            rows: self.rows,
            cols: self.cols,
            piece_width: image_width / self.cols,
            piece_height: image_height / self.rows,
        })
    }
}

/// A validated grid with resolved piece dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileLayout {
    pub rows: usize,
    pub cols: usize,
    pub piece_width: usize,
    pub piece_height: usize,
}

impl TileLayout {
    pub fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Bounding box of the tile at (row, col).
    pub fn frame(&self, row: usize, col: usize) -> TileFrame {
        let left = col * self.piece_width;
        let top = row * self.piece_height;
        TileFrame {
            row,
            col,
            left,
            top,
            right: left + self.piece_width,
            bottom: top + self.piece_height,
        }
    }

    /// All frames in row-major order.
    pub fn frames(&self) -> impl Iterator<Item = TileFrame> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| self.frame(row, col)))
    }
}

/// Pixel bounding box of one tile in the source image's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileFrame {
    pub row: usize,
    pub col: usize,
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl TileFrame {
    #[inline]
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bottom - self.top
    }
}
