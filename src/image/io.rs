//! I/O helpers for RGBA images and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA8 buffer.
//! - `save_rgba_image`: write an `ImageRgba8` to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Load/save report the underlying decoder/encoder message only; the slicer
//! attaches the path and tile context when it wraps them into `SliceError`.

use super::rgba::{ImageRgba8, Rgba8};
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<ImageRgba8, String> {
    let img = image::open(path).map_err(|e| e.to_string())?.into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data: Vec<Rgba8> = img
        .into_raw()
        .chunks_exact(4)
        .map(|px| [px[0], px[1], px[2], px[3]])
        .collect();
    Ok(ImageRgba8::from_raw(width, height, data))
}

/// Save an RGBA buffer to disk; the format is chosen from the extension.
pub fn save_rgba_image(image: &ImageRgba8, path: &Path) -> Result<(), String> {
    let flat: Vec<u8> = image.data.iter().flatten().copied().collect();
    let out = RgbaImage::from_raw(image.w as u32, image.h as u32, flat)
        .ok_or_else(|| "failed to create image buffer".to_string())?;
    out.save(path).map_err(|e| e.to_string())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
