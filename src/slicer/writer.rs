//! Tile persistence: deterministic filenames, output-directory handling, and
//! the explicit stale-piece cleanup step.
//!
//! The output directory is shared across slicing sessions. A new grid with
//! fewer pieces would otherwise leave the previous session's files mixed in,
//! so callers clear it explicitly via [`clear_previous_pieces`] before
//! slicing; the slicer itself never deletes anything.

use super::error::SliceError;
use crate::image::io::save_rgba_image;
use crate::image::ImageRgba8;
use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic per-tile filename: `piece_{row}_{col}.png`.
pub fn piece_filename(row: usize, col: usize) -> String {
    format!("piece_{row}_{col}.png")
}

/// Create the output directory if absent. Idempotent.
pub fn ensure_output_dir(dir: &Path) -> Result<(), SliceError> {
    fs::create_dir_all(dir).map_err(|e| SliceError::SliceIo {
        path: dir.to_path_buf(),
        tile: None,
        reason: e.to_string(),
    })
}

/// Encode one tile as PNG under `dir`, overwriting any previous file.
pub fn write_tile(
    dir: &Path,
    row: usize,
    col: usize,
    tile: &ImageRgba8,
) -> Result<PathBuf, SliceError> {
    let path = dir.join(piece_filename(row, col));
    save_rgba_image(tile, &path).map_err(|reason| SliceError::SliceIo {
        path: path.clone(),
        tile: Some((row, col)),
        reason,
    })?;
    Ok(path)
}

/// Remove piece files left over from a previous session.
///
/// Only regular files matching the `piece_{row}_{col}.png` scheme are
/// removed; everything else in the directory is kept. A missing directory is
/// not an error. Returns the number of files removed.
pub fn clear_previous_pieces(dir: &Path) -> Result<usize, SliceError> {
    let io_err = |e: std::io::Error| SliceError::SliceIo {
        path: dir.to_path_buf(),
        tile: None,
        reason: e.to_string(),
    };

    if !dir.is_dir() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_piece_filename(name) && entry.file_type().map_err(io_err)?.is_file() {
            fs::remove_file(entry.path()).map_err(io_err)?;
            removed += 1;
        }
    }
    Ok(removed)
}

fn is_piece_filename(name: &str) -> bool {
    let Some(stem) = name.strip_prefix("piece_").and_then(|s| s.strip_suffix(".png")) else {
        return false;
    };
    match stem.split_once('_') {
        Some((row, col)) => {
            !row.is_empty()
                && !col.is_empty()
                && row.bytes().all(|b| b.is_ascii_digit())
                && col.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
