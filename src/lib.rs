//! pif - palettized image toolkit
//!
//! An 8-bit indexed rasterizer: palettes and colormaps, images with a
//! pluggable per-pixel shader, line/circle/rect/triangle primitives, affine
//! blits, bitmap fonts, and the tiny PIFP/PIFI/PIFF binary formats.

pub mod cli;
pub mod codec;
pub mod error;
pub mod font;
pub mod image;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use crate::codec::{
    load_font, load_image, load_palette, read_font, read_image, read_palette, save_font,
    save_image, save_palette, sniff_kind, write_font, write_image, write_palette, AssetKind,
};
pub use crate::error::{PifError, Result};
pub use crate::font::{Font, Glyph};
pub use crate::image::{
    Blend, Colormap, CopyInfo, Dither, Image, Rgbmap, Shader, Stretch, DEFAULT_SHADES,
};
pub use crate::parser::{parse_recipe, PaletteRecipe};
pub use crate::render::{read_png, scale_pixels, write_png};
pub use crate::types::{
    Mat2, Palette, PaletteBuilder, Rect, Rgb, MAX_COLORS, STD_BLACK, STD_WHITE, TRANSPARENT,
};
