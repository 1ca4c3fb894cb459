//! Parsers for text inputs.
//!
//! Binary assets are handled by [`crate::codec`]; this module covers the
//! human-written YAML that feeds the palette builder.

mod recipe;

pub use recipe::{parse_recipe, PaletteRecipe, RangeSpec};
