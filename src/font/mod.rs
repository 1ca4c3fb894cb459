//! Bitmap fonts.
//!
//! A [`Font`] is a glyph sheet (an ordinary indexed [`Image`]) plus a
//! 256-entry width table. Glyphs are packed left to right in byte order,
//! wrapping to a new row of height `char_height` whenever the next glyph
//! would overflow the sheet. Text is indexed by byte, so only single-byte
//! characters have glyphs.

use crate::codec::read_font;
use crate::error::Result;
use crate::image::Image;
use crate::types::TRANSPARENT;

/// The built-in 6-pixel font, stored in the `PIFF` format.
const DEFAULT_FONT: &[u8] = include_bytes!("../../assets/default.pbf");

/// Where one character lives on the glyph sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    pub x: i32,
    pub y: i32,
    pub width: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    sheet: Image<'static>,
    glyphs: [Glyph; 256],
    char_height: u8,
    char_spacing: u8,
    line_spacing: u8,
    scale: f32,
}

impl Font {
    /// Lay out glyphs for `widths` on `sheet`.
    pub fn new(
        sheet: Image<'static>,
        widths: &[u8; 256],
        char_height: u8,
        char_spacing: u8,
        line_spacing: u8,
    ) -> Self {
        let sheet_width = sheet.width() as i32;
        let mut glyphs = [Glyph::default(); 256];

        let (mut x, mut y) = (0, 0);
        for (glyph, &width) in glyphs.iter_mut().zip(widths) {
            if x + width as i32 > sheet_width {
                x = 0;
                y += char_height as i32;
            }
            *glyph = Glyph { x, y, width };
            x += width as i32;
        }

        Self {
            sheet,
            glyphs,
            char_height,
            char_spacing,
            line_spacing,
            scale: 1.0,
        }
    }

    /// The embedded default font: 6 pixels high, spacing 1, printable ASCII.
    pub fn builtin() -> Result<Self> {
        read_font(&mut &DEFAULT_FONT[..])
    }

    pub fn sheet(&self) -> &Image<'static> {
        &self.sheet
    }

    pub fn char_height(&self) -> u8 {
        self.char_height
    }

    pub fn char_spacing(&self) -> u8 {
        self.char_spacing
    }

    pub fn line_spacing(&self) -> u8 {
        self.line_spacing
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the gap between characters and between lines, in unscaled pixels.
    pub fn set_spacing(&mut self, char_spacing: u8, line_spacing: u8) {
        self.char_spacing = char_spacing;
        self.line_spacing = line_spacing;
    }

    /// Set the render scale. Zero or negative scales draw nothing.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn glyph(&self, ch: u8) -> Glyph {
        self.glyphs[ch as usize]
    }

    /// Unscaled glyph widths, as stored on disk.
    pub fn widths(&self) -> [u8; 256] {
        self.glyphs.map(|g| g.width)
    }

    /// Scaled size of one character.
    pub fn char_size(&self, ch: u8) -> (i32, i32) {
        (
            self.scaled(self.glyph(ch).width as i32),
            self.scaled(self.char_height as i32),
        )
    }

    /// Scaled size of `text` as [`Font::render_text`] would lay it out.
    ///
    /// Lines break on `\n`; the first line adds no line spacing.
    pub fn text_size(&self, text: &str) -> (i32, i32) {
        let mut width = 0;
        let mut height = self.scaled(self.char_height as i32);
        let mut row_width = 0;

        for ch in text.bytes() {
            if ch == b'\n' {
                row_width = 0;
                height += self.line_advance();
                continue;
            }

            let space = if row_width > 0 { self.char_spacing as i32 } else { 0 };
            row_width += self.scaled(self.glyph(ch).width as i32 + space);
            width = width.max(row_width);
        }

        (width, height)
    }

    /// Draw one character with its top-left corner at `(x, y)`.
    ///
    /// Transparent sheet pixels are skipped. Other pixels are drawn in
    /// `color`, or in their own sheet colour when `color` is
    /// [`TRANSPARENT`], which allows multi-colour glyph sheets.
    pub fn render_char(&self, dest: &mut Image<'_>, ch: u8, x: i32, y: i32, color: u8) {
        let glyph = self.glyph(ch);
        if glyph.width == 0 {
            return;
        }

        let (w, h) = self.char_size(ch);
        let dest_height = dest.height() as i32;

        for dy in 0..h {
            let dest_y = y + dy;
            if dest_y < 0 {
                continue;
            }
            if dest_y >= dest_height {
                break;
            }
            let src_y = glyph.y + (dy as f32 / self.scale) as i32;

            for dx in 0..w {
                let src_x = glyph.x + (dx as f32 / self.scale) as i32;
                let pixel = match self.sheet.get(src_x, src_y) {
                    Some(TRANSPARENT) | None => continue,
                    Some(pixel) => pixel,
                };

                let value = if color == TRANSPARENT { pixel } else { color };
                dest.draw_point(x + dx, dest_y, value);
            }
        }
    }

    /// Draw `text` starting at `(x, y)`; `\n` returns to `x` on the next line.
    pub fn render_text(&self, dest: &mut Image<'_>, text: &str, x: i32, y: i32, color: u8) {
        let (mut pen_x, mut pen_y) = (x, y);

        for ch in text.bytes() {
            if ch == b'\n' {
                pen_x = x;
                pen_y += self.line_advance();
                continue;
            }

            self.render_char(dest, ch, pen_x, pen_y, color);
            pen_x += self.scaled(self.glyph(ch).width as i32 + self.char_spacing as i32);
        }
    }

    fn line_advance(&self) -> i32 {
        self.scaled(self.char_height as i32 + self.line_spacing as i32)
    }

    fn scaled(&self, n: i32) -> i32 {
        (n as f32 * self.scale).round() as i32
    }
}
