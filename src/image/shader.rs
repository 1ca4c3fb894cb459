//! Per-pixel shaders.
//!
//! A shader intercepts every point-write on the image it is attached to and
//! decides what index ends up in the buffer. Built-in shaders cover colormap
//! blending, checkerboard dithering and resampling copies; anything else can
//! implement [`Shader`] directly, or be a plain function with the same
//! signature as [`Shader::shade`].
//!
//! # Example
//!
//! ```
//! use pif::{Blend, Image, Palette, STD_BLACK, STD_WHITE};
//!
//! let palette = Palette::standard();
//! let colormap = palette.colormap(2, 0.5);
//! let blend = Blend::new(&colormap);
//!
//! let mut canvas = Image::new(8, 8);
//! canvas.clear(STD_BLACK);
//! canvas.set_shader(Some(&blend));
//! canvas.fill_circle(4, 4, 3, STD_WHITE);
//! ```

use crate::types::{Mat2, Rect, TRANSPARENT};

use super::{Colormap, Image};

/// Decides the stored value of a single point-write.
pub trait Shader {
    /// Return the index to store at `(x, y)`.
    ///
    /// `pixel` is the value currently stored there, `color` the index being
    /// drawn, and `image` the target image (before the write) so the shader
    /// can read neighbouring pixels.
    fn shade(&self, x: i32, y: i32, pixel: u8, color: u8, image: &Image<'_>) -> u8;
}

impl<F> Shader for F
where
    F: Fn(i32, i32, u8, u8, &Image<'_>) -> u8,
{
    fn shade(&self, x: i32, y: i32, pixel: u8, color: u8, image: &Image<'_>) -> u8 {
        self(x, y, pixel, color, image)
    }
}

/// Mixes the incoming colour with the stored one through a colormap.
#[derive(Debug, Clone, Copy)]
pub struct Blend<'c> {
    colormap: &'c Colormap,
}

impl<'c> Blend<'c> {
    pub fn new(colormap: &'c Colormap) -> Self {
        Self { colormap }
    }
}

impl Shader for Blend<'_> {
    fn shade(&self, _x: i32, _y: i32, pixel: u8, color: u8, _image: &Image<'_>) -> u8 {
        self.colormap.blend(pixel, color)
    }
}

/// Checkerboard: only points with even `x + y` are written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dither;

impl Shader for Dither {
    fn shade(&self, x: i32, y: i32, pixel: u8, color: u8, _image: &Image<'_>) -> u8 {
        if (x + y).rem_euclid(2) == 0 {
            color
        } else {
            pixel
        }
    }
}

/// Copy shader: samples a source image stretched over the whole target.
///
/// The drawn colour is ignored; filling a shape with this shader attached
/// stamps that shape out of the source.
#[derive(Debug, Clone, Copy)]
pub struct Stretch<'a> {
    src: &'a Image<'a>,
}

impl<'a> Stretch<'a> {
    pub fn new(src: &'a Image<'a>) -> Self {
        Self { src }
    }
}

impl Shader for Stretch<'_> {
    fn shade(&self, x: i32, y: i32, pixel: u8, _color: u8, image: &Image<'_>) -> u8 {
        let sx = (x as f32 / image.width() as f32 * self.src.width() as f32) as i32;
        let sy = (y as f32 / image.height() as f32 * self.src.height() as f32) as i32;
        self.src.get(sx, sy).unwrap_or(pixel)
    }
}

/// Parameters of one transformed copy, and the shader that performs it.
///
/// As a shader it maps each destination point back into the source:
/// undo the transform around the pivot `(dest_rect.x + cx, dest_rect.y + cy)`
/// with `inverse`, then scale from `dest_rect` into `src_rect` and sample.
#[derive(Debug, Clone, Copy)]
pub struct CopyInfo<'a> {
    pub src: &'a Image<'a>,
    pub src_rect: Rect,
    pub dest_rect: Rect,
    pub cx: i32,
    pub cy: i32,
    /// Inverse of the forward transform; `None` copies without transforming.
    pub inverse: Option<Mat2>,
}

impl CopyInfo<'_> {
    /// Source coordinates sampled for destination point `(x, y)`.
    pub fn source_point(&self, x: i32, y: i32) -> Option<(i32, i32)> {
        if self.dest_rect.is_empty() || self.src_rect.is_empty() {
            return None;
        }

        // Sample at pixel centres so exact transforms land on exact pixels.
        let (mut px, mut py) = (x as f32 + 0.5, y as f32 + 0.5);
        if let Some(inverse) = self.inverse {
            let pivot_x = (self.dest_rect.x + self.cx) as f32;
            let pivot_y = (self.dest_rect.y + self.cy) as f32;
            let (dx, dy) = inverse.apply(px - pivot_x, py - pivot_y);
            px = dx + pivot_x;
            py = dy + pivot_y;
        }

        let u = ((px - self.dest_rect.x as f32) * self.src_rect.w as f32
            / self.dest_rect.w as f32)
            .floor();
        let v = ((py - self.dest_rect.y as f32) * self.src_rect.h as f32
            / self.dest_rect.h as f32)
            .floor();

        if !(0.0..self.src_rect.w as f32).contains(&u) || !(0.0..self.src_rect.h as f32).contains(&v)
        {
            return None;
        }

        Some((self.src_rect.x + u as i32, self.src_rect.y + v as i32))
    }
}

impl Shader for CopyInfo<'_> {
    fn shade(&self, x: i32, y: i32, pixel: u8, _color: u8, image: &Image<'_>) -> u8 {
        let sample = self
            .source_point(x, y)
            .and_then(|(sx, sy)| self.src.get(sx, sy));

        match sample {
            Some(TRANSPARENT) if image.skip_transparent() => pixel,
            Some(value) => value,
            None => pixel,
        }
    }
}
