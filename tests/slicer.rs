mod common;

use common::synthetic_image::coordinate_rgba;
use puzzle_slicer::image::io::{load_rgba_image, save_rgba_image, write_json_file};
use puzzle_slicer::slicer::bevel::{HIGHLIGHT, SHADOW};
use puzzle_slicer::slicer::writer::{clear_previous_pieces, piece_filename};
use puzzle_slicer::{GridSpec, SliceError, Slicer, SlicerParams};
use std::fs;
use tempfile::tempdir;

#[test]
fn four_by_four_grid_produces_sixteen_uniform_tiles() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");
    let image = coordinate_rgba(400, 400);

    let result = Slicer::default()
        .slice(&image, GridSpec::new(4, 4), &out)
        .unwrap();

    assert_eq!(result.image_width, 400);
    assert_eq!(result.image_height, 400);
    assert_eq!(result.tiles.len(), 16);

    for (i, tile) in result.tiles.iter().enumerate() {
        assert_eq!(tile.row, i / 4, "metadata must be row-major");
        assert_eq!(tile.col, i % 4);
        assert_eq!(tile.width, 100);
        assert_eq!(tile.height, 100);
        assert_eq!(tile.left, tile.col * 100);
        assert_eq!(tile.top, tile.row * 100);
        assert_eq!(tile.right, tile.left + 100);
        assert_eq!(tile.bottom, tile.top + 100);
        assert!(
            out.join(piece_filename(tile.row, tile.col)).is_file(),
            "missing {}",
            piece_filename(tile.row, tile.col)
        );
    }
}

#[test]
fn written_tiles_carry_the_bevel_and_the_source_pixels() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");
    let image = coordinate_rgba(400, 400);

    Slicer::default()
        .slice(&image, GridSpec::new(4, 4), &out)
        .unwrap();

    let tile = load_rgba_image(&out.join("piece_1_2.png")).unwrap();
    assert_eq!((tile.width(), tile.height()), (100, 100));

    // Bevel bands survive the PNG round trip.
    assert_eq!(tile.get(50, 0), HIGHLIGHT);
    assert_eq!(tile.get(50, 1), HIGHLIGHT);
    assert_eq!(tile.get(0, 50), HIGHLIGHT);
    assert_eq!(tile.get(50, 99), SHADOW);
    assert_eq!(tile.get(99, 50), SHADOW);

    // Interior pixels are the source crop: tile (1, 2) starts at (200, 100).
    assert_eq!(tile.get(10, 10), image.get(210, 110));
    assert_eq!(tile.get(97, 97), image.get(297, 197));
}

#[test]
fn truncation_drops_the_remainder_strip() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");
    let image = coordinate_rgba(10, 10);

    let result = Slicer::default()
        .slice(&image, GridSpec::new(3, 3), &out)
        .unwrap();

    assert_eq!(result.tiles.len(), 9);
    for tile in &result.tiles {
        assert_eq!(tile.width, 3, "floor(10/3) = 3");
        assert_eq!(tile.height, 3);
        assert!(tile.right <= 9, "last pixel strip stays outside all tiles");
        assert!(tile.bottom <= 9);
    }
}

#[test]
fn single_cell_grid_covers_the_whole_image() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");
    let image = coordinate_rgba(17, 11);

    let result = Slicer::default()
        .slice(&image, GridSpec::new(1, 1), &out)
        .unwrap();

    assert_eq!(result.tiles.len(), 1);
    let tile = &result.tiles[0];
    assert_eq!((tile.left, tile.top, tile.right, tile.bottom), (0, 0, 17, 11));
}

#[test]
fn slicing_twice_is_deterministic_and_overwrites() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");
    let image = coordinate_rgba(120, 90);
    let slicer = Slicer::default();

    let first = slicer.slice(&image, GridSpec::new(3, 4), &out).unwrap();
    let second = slicer.slice(&image, GridSpec::new(3, 4), &out).unwrap();

    assert_eq!(first.tiles, second.tiles);
    assert_eq!(fs::read_dir(&out).unwrap().count(), 12, "no stale files accumulate");
}

#[test]
fn parallel_rendering_keeps_row_major_order() {
    let dir = tempdir().unwrap();
    let sequential_out = dir.path().join("seq");
    let parallel_out = dir.path().join("par");
    let image = coordinate_rgba(200, 200);

    let sequential = Slicer::default()
        .slice(&image, GridSpec::new(5, 5), &sequential_out)
        .unwrap();
    let parallel = Slicer::new(SlicerParams {
        parallel: true,
        ..Default::default()
    })
    .slice(&image, GridSpec::new(5, 5), &parallel_out)
    .unwrap();

    assert_eq!(sequential.tiles, parallel.tiles);
    let a = load_rgba_image(&sequential_out.join("piece_4_4.png")).unwrap();
    let b = load_rgba_image(&parallel_out.join("piece_4_4.png")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn nonexistent_source_reports_image_not_found() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");

    let err = Slicer::default()
        .slice_file(&dir.path().join("no_such.png"), GridSpec::new(4, 4), &out)
        .unwrap_err();

    assert!(matches!(err, SliceError::ImageNotFound { .. }), "got {err}");
    assert!(!out.exists(), "nothing may be written on decode failure");
}

#[test]
fn undecodable_source_reports_image_not_found() {
    let dir = tempdir().unwrap();
    let bogus = dir.path().join("not_an_image.png");
    fs::write(&bogus, b"definitely not a png").unwrap();
    let out = dir.path().join("pieces");

    let err = Slicer::default()
        .slice_file(&bogus, GridSpec::new(2, 2), &out)
        .unwrap_err();

    assert!(matches!(err, SliceError::ImageNotFound { .. }), "got {err}");
    assert!(!out.exists());
}

#[test]
fn degenerate_grids_are_rejected_before_any_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");
    let image = coordinate_rgba(10, 10);
    let slicer = Slicer::default();

    for grid in [GridSpec::new(0, 4), GridSpec::new(4, 0), GridSpec::new(4, 11)] {
        let err = slicer.slice(&image, grid, &out).unwrap_err();
        assert!(matches!(err, SliceError::InvalidGridSpec { .. }), "got {err}");
    }
    assert!(!out.exists(), "rejected grids must not create the output dir");
}

#[test]
fn clear_previous_removes_only_piece_files() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");
    let image = coordinate_rgba(40, 40);

    Slicer::default()
        .slice(&image, GridSpec::new(2, 2), &out)
        .unwrap();
    fs::write(out.join("notes.txt"), b"keep me").unwrap();
    save_rgba_image(&coordinate_rgba(4, 4), &out.join("piece_extra.png")).unwrap();

    let removed = clear_previous_pieces(&out).unwrap();
    assert_eq!(removed, 4, "only the four grid pieces match the scheme");
    assert!(out.join("notes.txt").is_file());
    assert!(out.join("piece_extra.png").is_file(), "non-scheme names are kept");
    assert!(!out.join("piece_0_0.png").exists());
}

#[test]
fn manifest_serializes_the_slice_result() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pieces");
    let image = coordinate_rgba(60, 60);

    let result = Slicer::default()
        .slice(&image, GridSpec::new(2, 3), &out)
        .unwrap();
    let manifest = dir.path().join("manifest/slice.json");
    write_json_file(&manifest, &result).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(parsed["image_width"], 60);
    assert_eq!(parsed["tiles"].as_array().unwrap().len(), 6);
    assert_eq!(parsed["tiles"][5]["row"], 1);
    assert_eq!(parsed["tiles"][5]["col"], 2);
}
