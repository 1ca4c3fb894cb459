//! PNG conversion for indexed images.
//!
//! Export resolves indices through a palette with optional integer scaling;
//! import maps RGBA pixels back to the nearest palette index.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PifError, Result};
use crate::image::{Image, Rgbmap};
use crate::types::{Palette, Rgb, TRANSPARENT};

/// Alpha below this imports as the transparent index.
const ALPHA_CUTOFF: u8 = 128;

/// Write an image to a PNG file through `palette`.
///
/// # Arguments
///
/// * `image` - The indexed image to write
/// * `palette` - Colours for each index; index 0 becomes fully transparent
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(image: &Image<'_>, palette: &Palette, path: &Path, scale: u32) -> Result<()> {
    let scaled = scale_pixels(image, scale);

    let rgba = scaled.to_rgba8(palette);
    let img: RgbaImage = ImageBuffer::from_raw(scaled.width() as u32, scaled.height() as u32, rgba)
        .ok_or_else(|| PifError::Build {
            message: format!(
                "Cannot encode a {}x{} image as PNG",
                scaled.width(),
                scaled.height()
            ),
            help: None,
        })?;

    img.save(path).map_err(|e| PifError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    log::debug!(
        "wrote {}x{} PNG to {}",
        scaled.width(),
        scaled.height(),
        path.display()
    );

    Ok(())
}

/// Read a PNG (or any format the `image` crate decodes) into palette indices.
///
/// Pixels with alpha below 128 become [`TRANSPARENT`]; the rest map to the
/// nearest palette entry, through `rgbmap` when one is given.
pub fn read_png(path: &Path, palette: &Palette, rgbmap: Option<&Rgbmap>) -> Result<Image<'static>> {
    let decoded = image::open(path)
        .map_err(|e| PifError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgba8();

    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    let pixels = decoded
        .pixels()
        .map(|&Rgba([r, g, b, a])| {
            if a < ALPHA_CUTOFF {
                return TRANSPARENT;
            }
            let rgb = Rgb::new(r, g, b);
            match rgbmap {
                Some(map) => map.color(rgb),
                None => palette.closest(rgb),
            }
        })
        .collect();

    log::debug!("read {}x{} image from {}", width, height, path.display());
    Image::from_pixels(width, height, pixels)
}

/// Scale an image's pixels by an integer factor.
///
/// Uses nearest-neighbour scaling for crisp pixel art. A scale of 0 is
/// treated as 1.
pub fn scale_pixels(image: &Image<'_>, scale: u32) -> Image<'static> {
    let scale = scale.max(1) as usize;
    let (width, height) = (image.width(), image.height());

    let mut pixels = Vec::with_capacity(width * height * scale * scale);
    for row in image.pixels().chunks(width.max(1)).take(height) {
        let mut scaled_row = Vec::with_capacity(width * scale);
        for &pixel in row {
            scaled_row.extend(std::iter::repeat(pixel).take(scale));
        }
        for _ in 0..scale {
            pixels.extend_from_slice(&scaled_row);
        }
    }

    let mut scaled = Image::new(width * scale, height * scale);
    scaled.pixels_mut().copy_from_slice(&pixels);
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let image = Image::from_pixels(2, 2, vec![1, 2, 2, 1]).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&image, &Palette::standard(), &path, 1).unwrap();

        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]); // Black
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]); // White
    }

    #[test]
    fn test_write_png_scaled() {
        let image = Image::from_pixels(2, 1, vec![3, 2]).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&image, &Palette::standard(), &path, 2).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);

        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(3, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_with_transparency() {
        let image = Image::from_pixels(2, 1, vec![0, 3]).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_png(&image, &Palette::standard(), &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_read_png_maps_to_palette() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.png");

        let mut src: RgbaImage = ImageBuffer::new(4, 1);
        src.put_pixel(0, 0, Rgba([250, 10, 5, 255]));
        src.put_pixel(1, 0, Rgba([20, 20, 20, 255]));
        src.put_pixel(2, 0, Rgba([240, 240, 240, 200]));
        src.put_pixel(3, 0, Rgba([255, 0, 0, 40]));
        src.save(&path).unwrap();

        let palette = Palette::standard();
        let image = read_png(&path, &palette, None).unwrap();
        assert_eq!(image.pixels(), &[3, 1, 2, 0]);

        let rgbmap = palette.rgbmap(4);
        let image = read_png(&path, &palette, Some(&rgbmap)).unwrap();
        assert_eq!(image.pixels(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_png_round_trip_through_palette() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trip.png");

        let palette = Palette::standard();
        let image = Image::from_pixels(3, 2, vec![0, 1, 2, 3, 2, 1]).unwrap();
        write_png(&image, &palette, &path, 1).unwrap();

        assert_eq!(read_png(&path, &palette, None).unwrap(), image);
    }

    #[test]
    fn test_read_png_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_png(&dir.path().join("nope.png"), &Palette::standard(), None).unwrap_err();
        assert!(matches!(err, PifError::Io { .. }));
    }

    #[test]
    fn test_scale_pixels() {
        let image = Image::from_pixels(2, 1, vec![1, 2]).unwrap();

        let scaled = scale_pixels(&image, 2);

        assert_eq!(scaled.width(), 4);
        assert_eq!(scaled.height(), 2);
        assert_eq!(scaled.pixels(), &[1, 1, 2, 2, 1, 1, 2, 2]);
    }

    #[test]
    fn test_scale_pixels_no_scale() {
        let image = Image::from_pixels(1, 1, vec![1]).unwrap();
        assert_eq!(scale_pixels(&image, 1), image);
        assert_eq!(scale_pixels(&image, 0), image);
    }
}
