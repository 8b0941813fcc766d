use std::path::PathBuf;

/// Reasons why a slicing call may fail.
///
/// The first error aborts the remaining grid; there is no catch-and-continue
/// and no retry. `SliceIo` carries the `(row, col)` that was in progress when
/// a tile write failed so callers can report a precise message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// The source image could not be located or decoded.
    ImageNotFound { path: PathBuf, reason: String },
    /// Rows/cols of zero, or a grid finer than the image's pixel dimensions.
    InvalidGridSpec {
        rows: usize,
        cols: usize,
        image_width: usize,
        image_height: usize,
    },
    /// The output directory could not be created, or a tile write failed.
    SliceIo {
        path: PathBuf,
        tile: Option<(usize, usize)>,
        reason: String,
    },
}

impl std::fmt::Display for SliceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceError::ImageNotFound { path, reason } => {
                write!(f, "failed to open source image {}: {reason}", path.display())
            }
            SliceError::InvalidGridSpec {
                rows,
                cols,
                image_width,
                image_height,
            } => write!(
                f,
                "invalid grid {rows}x{cols} for a {image_width}x{image_height} image \
                 (rows and cols must be >= 1 and no larger than the image dimensions)"
            ),
            SliceError::SliceIo {
                path,
                tile: Some((row, col)),
                reason,
            } => write!(
                f,
                "failed to write tile ({row}, {col}) to {}: {reason}",
                path.display()
            ),
            SliceError::SliceIo {
                path,
                tile: None,
                reason,
            } => write!(f, "output location {} unusable: {reason}", path.display()),
        }
    }
}

impl std::error::Error for SliceError {}
