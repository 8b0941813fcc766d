use super::bevel::{apply_bevel, BevelParams};
use super::error::SliceError;
use super::grid::{GridSpec, TileFrame};
use super::tile::{SliceResult, TileMeta};
use super::writer;
use crate::image::io::load_rgba_image;
use crate::image::ImageRgba8;

use log::debug;
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// Slicer-wide parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlicerParams {
    pub bevel: BevelParams,
    /// Fan the per-tile crop/bevel work out over rayon. Tile files and
    /// metadata are still produced in row-major order.
    pub parallel: bool,
}

/// The slicing engine. Holds no state between invocations; every call
/// produces a fresh set of tile buffers and a fresh result.
#[derive(Clone, Debug, Default)]
pub struct Slicer {
    params: SlicerParams,
}

impl Slicer {
    pub fn new(params: SlicerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SlicerParams {
        &self.params
    }

    /// Decode `image_path` and slice it. Both a missing file and an
    /// undecodable one surface as `ImageNotFound`; nothing is written to the
    /// output directory before the decode succeeds.
    pub fn slice_file(
        &self,
        image_path: &Path,
        grid: GridSpec,
        output_dir: &Path,
    ) -> Result<SliceResult, SliceError> {
        let image = load_rgba_image(image_path).map_err(|reason| SliceError::ImageNotFound {
            path: image_path.to_path_buf(),
            reason,
        })?;
        self.slice(&image, grid, output_dir)
    }

    /// Slice `image` into `grid.rows * grid.cols` beveled PNG tiles under
    /// `output_dir` and return their geometry in row-major order.
    ///
    /// The first failed tile write aborts the rest of the grid; files already
    /// written remain on disk (no atomicity across the grid).
    pub fn slice(
        &self,
        image: &ImageRgba8,
        grid: GridSpec,
        output_dir: &Path,
    ) -> Result<SliceResult, SliceError> {
        let start = Instant::now();
        let layout = grid.validate(image.w, image.h)?;
        writer::ensure_output_dir(output_dir)?;
        debug!(
            "slicing {}x{} image into {}x{} grid, piece size {}x{}",
            image.w, image.h, layout.rows, layout.cols, layout.piece_width, layout.piece_height
        );

        let mut tiles = Vec::with_capacity(layout.tile_count());
        if self.params.parallel {
            let frames: Vec<TileFrame> = layout.frames().collect();
            let buffers: Vec<ImageRgba8> = frames
                .par_iter()
                .map(|frame| self.render_tile(image, frame))
                .collect();
            for (frame, buffer) in frames.into_iter().zip(&buffers) {
                writer::write_tile(output_dir, frame.row, frame.col, buffer)?;
                tiles.push(TileMeta::from(frame));
            }
        } else {
            for frame in layout.frames() {
                let buffer = self.render_tile(image, &frame);
                writer::write_tile(output_dir, frame.row, frame.col, &buffer)?;
                tiles.push(TileMeta::from(frame));
            }
        }

        let latency_ms = start.elapsed().as_secs_f64() * 1e3;
        debug!(
            "wrote {} tiles to {} in {:.3} ms",
            tiles.len(),
            output_dir.display(),
            latency_ms
        );
        Ok(SliceResult {
            tiles,
            image_width: image.w,
            image_height: image.h,
            latency_ms,
        })
    }

    fn render_tile(&self, image: &ImageRgba8, frame: &TileFrame) -> ImageRgba8 {
        let mut tile = image.crop(frame.left, frame.top, frame.width(), frame.height());
        apply_bevel(&mut tile, &self.params.bevel);
        tile
    }
}
