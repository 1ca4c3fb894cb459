//! Core value types for pif.
//!
//! This module contains the fundamental types used throughout the rasterizer:
//! - `Rgb` - palette entry colours
//! - `Palette` - indexed colour tables and their builder
//! - `Rect`, `Mat2` - drawing geometry

mod geometry;
mod palette;
mod rgb;

pub use geometry::{Mat2, Rect};
pub use palette::{Palette, PaletteBuilder, MAX_COLORS, STD_BLACK, STD_WHITE, TRANSPARENT};
pub use rgb::Rgb;
