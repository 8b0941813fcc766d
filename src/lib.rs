#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod image;
pub mod slicer;

// CLI/config plumbing for the binary; public so external harnesses can reuse
// the loaders.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: slicer + results.
pub use crate::slicer::{GridSpec, SliceResult, Slicer, SlicerParams, TileMeta};

// Error taxonomy surfaced by every slicing operation.
pub use crate::slicer::SliceError;

// Bevel rendering is useful on its own for tools that post-process tiles.
pub use crate::slicer::bevel::{apply_bevel, BevelParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use puzzle_slicer::prelude::*;
///
/// let image = ImageRgba8::new(12, 12);
/// let grid = GridSpec::new(3, 3);
/// assert!(grid.validate(image.width(), image.height()).is_ok());
/// ```
pub mod prelude {
    pub use crate::image::ImageRgba8;
    pub use crate::{GridSpec, SliceError, SliceResult, Slicer, SlicerParams};
}
