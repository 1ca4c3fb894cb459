//! Precomputed palette lookups.
//!
//! A [`Colormap`] answers "this colour, darker" and "these two colours,
//! mixed" in O(1); an [`Rgbmap`] answers "nearest index to this RGB" in O(1).
//! Both are stored as images so they can be saved with the image codec.

use crate::error::{PifError, Result};
use crate::types::{Palette, Rgb, TRANSPARENT};

use super::Image;

/// Shade levels used when a caller has no preference.
pub const DEFAULT_SHADES: usize = 64;

/// Shade and blend tables for one palette.
///
/// Laid out as a `W x (shades + W)` image for a palette of `W` colours:
/// rows `0..shades` hold each colour at decreasing brightness, and row
/// `shades + to`, column `from` holds the blend of `from` towards `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colormap {
    image: Image<'static>,
    shades: usize,
}

impl Colormap {
    /// Build the tables for `palette` with `shades` brightness levels and
    /// blend factor `t` (0 keeps the stored colour, 1 takes the incoming one).
    ///
    /// Panics if `shades` is zero.
    pub fn new(palette: &Palette, shades: usize, t: f32) -> Self {
        assert!(shades > 0, "colormap needs at least one shade");

        let size = palette.len();
        let mut pixels = vec![TRANSPARENT; size * (size + shades)];

        for y in 0..shades {
            let factor = shade_factor(y, shades);
            for x in 1..size {
                let rgb = palette.colors()[x];
                let scale = |c: u8| (c as f32 * factor).min(255.0) as u8;
                pixels[y * size + x] = palette.closest(Rgb::new(scale(rgb.r), scale(rgb.g), scale(rgb.b)));
            }
        }

        for to in 1..size {
            let row = (shades + to) * size;
            for from in 1..size {
                let mixed = palette.colors()[from].lerp(palette.colors()[to], t);
                pixels[row + from] = palette.closest(mixed);
            }
        }

        log::debug!(
            "built colormap for {} colours, {} shades, t = {}",
            size,
            shades,
            t
        );

        let image = Image {
            width: size,
            height: size + shades,
            pixels,
            skip_transparent: true,
            shader: None,
        };
        Self { image, shades }
    }

    /// Wrap a colormap image loaded from disk.
    pub fn from_image(image: Image<'_>) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || width > 256 || height <= width {
            return Err(PifError::Validation {
                message: format!("A {}x{} image is not a colormap", width, height),
                help: Some("Colormaps are W wide and taller than W, with W <= 256".to_string()),
            });
        }

        let image = Image::from_pixels(width, height, image.into_pixels())?;
        Ok(Self {
            image,
            shades: height - width,
        })
    }

    /// Number of brightness levels.
    pub fn shades(&self) -> usize {
        self.shades
    }

    /// Number of palette entries covered.
    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn image(&self) -> &Image<'static> {
        &self.image
    }

    pub fn into_image(self) -> Image<'static> {
        self.image
    }

    /// Look up `color` at brightness `t`, clamped to `0..=1`.
    ///
    /// `t = 0` is the brightest level, `t = 0.5` roughly the colour itself
    /// and `t = 1` black.
    pub fn shade(&self, color: u8, t: f32) -> u8 {
        debug_assert!((color as usize) < self.width());

        let t = t.clamp(0.0, 1.0);
        let row = ((t * self.shades as f32) as usize).min(self.shades - 1);
        self.image.pixels[row * self.width() + color as usize]
    }

    /// Blend `to` over `from`.
    ///
    /// If either side is transparent the other is returned unchanged.
    pub fn blend(&self, from: u8, to: u8) -> u8 {
        debug_assert!((from as usize) < self.width());
        debug_assert!((to as usize) < self.width());

        if from == TRANSPARENT {
            return to;
        }
        if to == TRANSPARENT {
            return from;
        }

        let row = self.shades + to as usize;
        self.image.pixels[row * self.width() + from as usize]
    }
}

/// Brightness multiplier for shade row `y`: 2 at the top, 0 at the bottom.
fn shade_factor(y: usize, shades: usize) -> f32 {
    if shades <= 1 {
        return 1.0;
    }
    2.0 * (shades - 1 - y) as f32 / (shades - 1) as f32
}

/// Nearest-index lookup over a discretized RGB cube.
///
/// A `size x size²` image: the cell at `x = r`, `y = g * size + b` holds the
/// nearest palette index to that lattice point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgbmap {
    image: Image<'static>,
    size: usize,
}

impl Rgbmap {
    /// Precompute `palette.closest` for every lattice point.
    ///
    /// Panics if `size < 2`.
    pub fn new(palette: &Palette, size: u8) -> Self {
        assert!(size >= 2, "rgbmap needs at least two levels per channel");

        let size = size as usize;
        let value = |level: usize| (level * 255 / (size - 1)) as u8;

        let mut pixels = vec![TRANSPARENT; size * size * size];
        for g in 0..size {
            for b in 0..size {
                let row = (g * size + b) * size;
                for r in 0..size {
                    pixels[row + r] = palette.closest(Rgb::new(value(r), value(g), value(b)));
                }
            }
        }

        log::debug!("built {}-level rgbmap for {} colours", size, palette.len());

        let image = Image {
            width: size,
            height: size * size,
            pixels,
            skip_transparent: true,
            shader: None,
        };
        Self { image, size }
    }

    /// Wrap an rgbmap image loaded from disk.
    pub fn from_image(image: Image<'_>) -> Result<Self> {
        let size = image.width();
        if !(2..=255).contains(&size) || image.height() != size * size {
            return Err(PifError::Validation {
                message: format!(
                    "A {}x{} image is not an rgbmap",
                    image.width(),
                    image.height()
                ),
                help: Some("Rgbmaps are N wide and N*N tall, with 2 <= N <= 255".to_string()),
            });
        }

        let image = Image::from_pixels(size, size * size, image.into_pixels())?;
        Ok(Self { image, size })
    }

    /// Levels per channel.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn image(&self) -> &Image<'static> {
        &self.image
    }

    /// Nearest palette index to `rgb`, snapped to the lattice.
    pub fn color(&self, rgb: Rgb) -> u8 {
        let level = |c: u8| (c as usize * (self.size - 1) + 127) / 255;
        let (r, g, b) = (level(rgb.r), level(rgb.g), level(rgb.b));
        self.image.pixels[(g * self.size + b) * self.size + r]
    }
}

impl Palette {
    /// Build the shade/blend tables for this palette.
    pub fn colormap(&self, shades: usize, t: f32) -> Colormap {
        Colormap::new(self, shades, t)
    }

    /// Build an RGB lookup cube with `size` levels per channel.
    pub fn rgbmap(&self, size: u8) -> Rgbmap {
        Rgbmap::new(self, size)
    }
}
