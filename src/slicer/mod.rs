//! Image-to-grid slicing engine.
//!
//! Overview
//! - Validates the requested grid against the source dimensions; degenerate
//!   grids (zero rows/cols, or more cells than pixels) are rejected up front.
//! - Computes per-tile bounding boxes with floor division, so an image that
//!   does not divide evenly loses its bottom/right remainder strip. This
//!   truncation is deliberate and relied upon by consumers of the metadata.
//! - Crops each tile into an independently-owned RGBA buffer, draws the bevel
//!   bands in place, and writes the tile to `piece_{row}_{col}.png` under the
//!   output directory.
//! - Returns a `SliceResult` listing every tile's geometry in row-major
//!   order together with the source dimensions.
//!
//! Modules
//! - [`grid`] – grid validation and tile-frame geometry.
//! - [`bevel`] – the raised-edge border treatment applied to every tile.
//! - [`tile`] – serializable tile metadata and the slice result.
//! - [`writer`] – tile filenames, output-directory handling, stale-piece
//!   cleanup.
//! - `pipeline` – the [`Slicer`] implementation tying the stages together.
//! - [`error`] – the `SliceError` taxonomy.
//!
//! The first error aborts the remaining grid; tiles already written stay on
//! disk. Callers wanting a pristine directory invoke
//! [`writer::clear_previous_pieces`] before slicing.

pub mod bevel;
pub mod error;
pub mod grid;
mod pipeline;
pub mod tile;
pub mod writer;

pub use error::SliceError;
pub use grid::{GridSpec, TileFrame, TileLayout};
pub use pipeline::{Slicer, SlicerParams};
pub use tile::{SliceResult, TileMeta};
