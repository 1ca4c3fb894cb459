//! Fixed-size indexed palette with nearest-colour search.

use std::ops::Index;

use crate::error::{PifError, Result};

use super::Rgb;

/// Maximum number of entries in a palette.
pub const MAX_COLORS: usize = 256;

/// Reserved index meaning "nothing is drawn here".
pub const TRANSPARENT: u8 = 0;

/// Index of black in the standard palette.
pub const STD_BLACK: u8 = 1;

/// Index of white in the standard palette.
pub const STD_WHITE: u8 = 2;

/// An ordered table of up to 256 colours.
///
/// Index [`TRANSPARENT`] is a sentinel: it has a stored colour like every
/// other entry but is never returned by [`Palette::closest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create an all-black palette of `size` entries.
    ///
    /// Panics if `size` is not in `1..=256`.
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_COLORS).contains(&size),
            "palette size {} out of range",
            size
        );
        Self {
            colors: vec![Rgb::BLACK; size],
        }
    }

    /// Create a palette from a list of colours.
    pub fn from_colors(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() || colors.len() > MAX_COLORS {
            return Err(PifError::Validation {
                message: format!("Palette has {} colours", colors.len()),
                help: Some(format!("A palette holds between 1 and {} colours", MAX_COLORS)),
            });
        }
        Ok(Self { colors })
    }

    /// The builtin 4-colour palette: transparent, black, white, red.
    pub fn standard() -> Self {
        Self {
            colors: vec![Rgb::BLACK, Rgb::BLACK, Rgb::WHITE, Rgb::RED],
        }
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least the sentinel.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get a colour by index.
    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.colors.get(index as usize).copied()
    }

    /// Replace a colour by index.
    ///
    /// Panics if `index` is outside the palette.
    pub fn set(&mut self, index: u8, rgb: Rgb) {
        self.colors[index as usize] = rgb;
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Find the index whose colour is nearest to `rgb`.
    ///
    /// Skips the transparent sentinel; ties resolve to the lowest index.
    /// A palette holding only the sentinel yields [`TRANSPARENT`].
    pub fn closest(&self, rgb: Rgb) -> u8 {
        let mut best = TRANSPARENT;
        let mut best_diff = i32::MAX;

        for (i, colour) in self.colors.iter().enumerate().skip(1) {
            let diff = colour.diff(rgb);
            if diff < best_diff {
                best_diff = diff;
                best = i as u8;
            }
        }

        best
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<u8> for Palette {
    type Output = Rgb;

    fn index(&self, index: u8) -> &Rgb {
        &self.colors[index as usize]
    }
}

/// Composes a palette from explicit colours and generated ranges.
///
/// Replaces patching a shared colour table in place: ranges are written
/// into the builder, and the finished [`Palette`] is never mutated again.
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    colors: Vec<Rgb>,
    overflow: Option<usize>,
}

impl PaletteBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing palette.
    pub fn from_palette(base: &Palette) -> Self {
        Self {
            colors: base.colors.clone(),
            overflow: None,
        }
    }

    /// Append a colour.
    pub fn color(&mut self, rgb: Rgb) {
        let index = self.colors.len();
        self.put(index, rgb);
    }

    /// Append several colours.
    pub fn colors(&mut self, colors: impl IntoIterator<Item = Rgb>) {
        for rgb in colors {
            self.color(rgb);
        }
    }

    /// Pad with black up to `size` entries.
    pub fn size(&mut self, size: usize) {
        if size > MAX_COLORS {
            self.overflow = Some(size);
            return;
        }
        if self.colors.len() < size {
            self.colors.resize(size, Rgb::BLACK);
        }
    }

    /// Write `count` evenly spaced hues starting at index `start`.
    ///
    /// Hue `i` is `i / (count - 1)` of the full circle, so the first and
    /// last entries are both red.
    pub fn hue_spectrum(&mut self, start: usize, count: usize, saturation: f32, lightness: f32) {
        use ::palette::{Hsl, IntoColor, Srgb};

        for i in 0..count {
            let hue = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            let hsl = Hsl::new(hue * 360.0, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
            let rgb: Srgb<f32> = hsl.into_color();

            self.put(
                start + i,
                Rgb::new(
                    (rgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
                    (rgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
                    (rgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
                ),
            );
        }
    }

    /// Write a linear ramp of `count` colours from `from` to `to` at `start`.
    pub fn gradient(&mut self, start: usize, count: usize, from: Rgb, to: Rgb) {
        for i in 0..count {
            let t = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            self.put(start + i, from.lerp(to, t));
        }
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Build the palette.
    pub fn build(self) -> Result<Palette> {
        if let Some(index) = self.overflow {
            return Err(PifError::Validation {
                message: format!("Palette entry {} is out of range", index),
                help: Some(format!("A palette holds at most {} colours", MAX_COLORS)),
            });
        }
        Palette::from_colors(self.colors)
    }

    fn put(&mut self, index: usize, rgb: Rgb) {
        if index >= MAX_COLORS {
            self.overflow.get_or_insert(index);
            return;
        }
        if index >= self.colors.len() {
            self.colors.resize(index + 1, Rgb::BLACK);
        }
        self.colors[index] = rgb;
    }
}
