use puzzle_slicer::image::ImageRgba8;

/// Generates an opaque RGBA image whose pixel values encode their own
/// coordinates, so any crop can be checked back against the source.
pub fn coordinate_rgba(width: usize, height: usize) -> ImageRgba8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = ImageRgba8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let px = [
                (x % 256) as u8,
                (y % 256) as u8,
                ((x + y) % 256) as u8,
                255,
            ];
            img.set(x, y, px);
        }
    }
    img
}
