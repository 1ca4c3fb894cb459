//! Indexed image buffers.
//!
//! An [`Image`] is a grid of palette indices. Every drawing primitive in
//! [`crate::render`] reduces to [`Image::draw_point`], which clips to the
//! buffer and routes the write through the attached [`Shader`], if any.

mod colormap;
mod shader;

use std::fmt;

use crate::error::{PifError, Result};
use crate::types::{Palette, Rect, Rgb, TRANSPARENT};

pub use colormap::{Colormap, Rgbmap, DEFAULT_SHADES};
pub use shader::{Blend, CopyInfo, Dither, Shader, Stretch};

/// A palette-indexed image.
///
/// The lifetime `'s` bounds the attached shader and whatever that shader
/// borrows (a colormap, a source image). Images without a shader can be
/// given any lifetime, including `'static`.
#[derive(Clone)]
pub struct Image<'s> {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    skip_transparent: bool,
    shader: Option<&'s dyn Shader>,
}

impl<'s> Image<'s> {
    /// Create a transparent image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width * height],
            skip_transparent: true,
            shader: None,
        }
    }

    /// Create an image from row-major pixel indices.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(PifError::Validation {
                message: format!(
                    "{} pixels do not fill a {}x{} image",
                    pixels.len(),
                    width,
                    height
                ),
                help: None,
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            skip_transparent: true,
            shader: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn size(&self) -> usize {
        self.pixels.len()
    }

    /// The whole image as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Raw row-major indices, for display hosts and codecs.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn skip_transparent(&self) -> bool {
        self.skip_transparent
    }

    /// Control whether drawing the [`TRANSPARENT`] index is a no-op.
    pub fn set_skip_transparent(&mut self, enable: bool) {
        self.skip_transparent = enable;
    }

    pub fn shader(&self) -> Option<&'s dyn Shader> {
        self.shader
    }

    /// Attach (or detach, with `None`) the shader every point-write goes through.
    pub fn set_shader(&mut self, shader: Option<&'s dyn Shader>) {
        self.shader = shader;
    }

    /// Get a reference to the pixel at `(x, y)`, or `None` outside the image.
    pub fn at(&self, x: i32, y: i32) -> Option<&u8> {
        self.index(x, y).map(|i| &self.pixels[i])
    }

    pub fn at_mut(&mut self, x: i32, y: i32) -> Option<&mut u8> {
        self.index(x, y).map(move |i| &mut self.pixels[i])
    }

    /// Get the pixel value at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.at(x, y).copied()
    }

    /// Write one point through the shader pipeline.
    ///
    /// Out-of-bounds points are dropped. With no shader attached the pixel
    /// is overwritten; otherwise the shader decides the stored value.
    pub fn draw_point(&mut self, x: i32, y: i32, color: u8) {
        if self.skips(color) {
            return;
        }

        let Some(i) = self.index(x, y) else {
            return;
        };

        let value = match self.shader {
            None => color,
            Some(shader) => shader.shade(x, y, self.pixels[i], color, self),
        };
        self.pixels[i] = value;
    }

    /// Overwrite every pixel, bypassing the shader.
    pub fn clear(&mut self, color: u8) {
        self.pixels.fill(color);
    }

    /// Change the image size, keeping the overlapping top-left region.
    ///
    /// Newly exposed pixels are set to `fill`.
    pub fn resize(&mut self, width: usize, height: usize, fill: u8) {
        let mut pixels = vec![fill; width * height];

        let keep_w = self.width.min(width);
        for y in 0..self.height.min(height) {
            let src = y * self.width;
            let dst = y * width;
            pixels[dst..dst + keep_w].copy_from_slice(&self.pixels[src..src + keep_w]);
        }

        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }

    /// Take another image's size and pixels, keeping this image's shader.
    pub fn copy_from(&mut self, other: &Image<'_>) {
        self.width = other.width;
        self.height = other.height;
        self.pixels.clear();
        self.pixels.extend_from_slice(&other.pixels);
    }

    /// Remap every index from one palette to its nearest match in another.
    ///
    /// The transparent sentinel is left alone.
    pub fn convert_palette(&mut self, from: &Palette, to: &Palette) {
        for pixel in self.pixels.iter_mut().filter(|p| **p != TRANSPARENT) {
            if let Some(rgb) = from.get(*pixel) {
                *pixel = to.closest(rgb);
            }
        }
    }

    /// Resolve every index through `palette` into a flat RGBA buffer.
    ///
    /// The transparent sentinel becomes fully transparent black.
    pub fn to_rgba8(&self, palette: &Palette) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            if pixel == TRANSPARENT {
                buffer.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                let rgb = palette.get(pixel).unwrap_or(Rgb::BLACK);
                buffer.extend_from_slice(&[rgb.r, rgb.g, rgb.b, 255]);
            }
        }
        buffer
    }

    /// Whether a write of `color` is suppressed outright.
    pub(crate) fn skips(&self, color: u8) -> bool {
        color == TRANSPARENT && self.skip_transparent
    }

    /// Width and height as signed drawing coordinates.
    pub(crate) fn extent(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }

    /// Run `draw` against this image's pixels with a different shader.
    ///
    /// The buffer is moved into a staging image for the duration, so the
    /// shader may borrow data that lives shorter than `'s`.
    pub(crate) fn with_shader<F>(&mut self, shader: &dyn Shader, draw: F)
    where
        F: FnOnce(&mut Image<'_>),
    {
        let mut stage = Image {
            width: self.width,
            height: self.height,
            pixels: std::mem::take(&mut self.pixels),
            skip_transparent: self.skip_transparent,
            shader: Some(shader),
        };
        draw(&mut stage);
        self.pixels = stage.pixels;
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl fmt::Debug for Image<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("skip_transparent", &self.skip_transparent)
            .field("shader", &self.shader.is_some())
            .finish_non_exhaustive()
    }
}

/// Images compare by size and content; the shader binding is ignored.
impl PartialEq for Image<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

impl Eq for Image<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let img = Image::new(4, 3);
        assert_eq!(img.size(), 12);
        assert!(img.pixels().iter().all(|&p| p == TRANSPARENT));
        assert!(img.skip_transparent());
        assert!(img.shader().is_none());
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(Image::from_pixels(2, 2, vec![1, 2, 3, 4]).is_ok());
        assert!(Image::from_pixels(2, 2, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_at_bounds() {
        let mut img = Image::new(3, 2);
        *img.at_mut(2, 1).unwrap() = 7;
        assert_eq!(img.at(2, 1), Some(&7));
        assert_eq!(img.at(3, 1), None);
        assert_eq!(img.at(0, 2), None);
        assert_eq!(img.at(-1, 0), None);
        assert_eq!(img.pixels()[5], 7);
    }

    #[test]
    fn test_draw_point_clips() {
        let mut img = Image::new(4, 4);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MIN, i32::MAX)] {
            img.draw_point(x, y, 3);
        }
        assert!(img.pixels().iter().all(|&p| p == TRANSPARENT));

        img.draw_point(3, 3, 3);
        assert_eq!(img.get(3, 3), Some(3));
    }

    #[test]
    fn test_transparent_skip() {
        let mut img = Image::new(2, 2);
        img.clear(5);

        img.draw_point(0, 0, TRANSPARENT);
        assert_eq!(img.get(0, 0), Some(5));

        img.set_skip_transparent(false);
        img.draw_point(0, 0, TRANSPARENT);
        assert_eq!(img.get(0, 0), Some(TRANSPARENT));
    }

    fn invert(_x: i32, _y: i32, pixel: u8, _color: u8, _img: &Image<'_>) -> u8 {
        255 - pixel
    }

    #[test]
    fn test_draw_point_uses_shader() {
        let mut img = Image::new(2, 1);
        img.set_shader(Some(&invert));
        img.draw_point(1, 0, 9);
        assert_eq!(img.pixels(), &[0, 255]);

        img.set_shader(None);
        img.draw_point(0, 0, 9);
        assert_eq!(img.pixels(), &[9, 255]);
    }

    #[test]
    fn test_resize_keeps_overlap() {
        let mut img = Image::from_pixels(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();

        img.resize(4, 3, 9);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.pixels(), &[1, 2, 3, 9, 4, 5, 6, 9, 9, 9, 9, 9]);

        img.resize(2, 1, 0);
        assert_eq!(img.pixels(), &[1, 2]);
    }

    #[test]
    fn test_copy_from_and_clone() {
        let src = Image::from_pixels(2, 1, vec![3, 4]).unwrap();
        let mut dst = Image::new(5, 5);
        dst.copy_from(&src);
        assert_eq!(dst, src);

        let dup = dst.clone();
        assert_eq!(dup, src);
    }

    #[test]
    fn test_convert_palette() {
        let from = Palette::standard();
        let to = Palette::from_colors(vec![Rgb::BLACK, Rgb::RED, Rgb::WHITE, Rgb::BLACK]).unwrap();

        let mut img = Image::from_pixels(4, 1, vec![0, 1, 2, 3]).unwrap();
        img.convert_palette(&from, &to);
        assert_eq!(img.pixels(), &[0, 3, 2, 1]);
    }

    #[test]
    fn test_to_rgba8() {
        let img = Image::from_pixels(2, 1, vec![0, 3]).unwrap();
        let rgba = img.to_rgba8(&Palette::standard());
        assert_eq!(rgba, vec![0, 0, 0, 0, 255, 0, 0, 255]);
    }

    #[test]
    fn test_with_shader_restores_buffer() {
        let mut img = Image::new(2, 2);
        img.with_shader(&invert, |stage| stage.draw_point(0, 0, 1));
        assert_eq!(img.get(0, 0), Some(255));
        assert_eq!(img.size(), 4);
        assert!(img.shader().is_none());
    }
}
