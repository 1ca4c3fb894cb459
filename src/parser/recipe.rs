//! Palette recipe parser.
//!
//! A recipe is a YAML document describing how to compose a palette:
//!
//! ```yaml
//! standard: true          # start from [transparent, black, white, red]
//! colors: ["#224", "#808080"]
//! ranges:
//!   - type: hue
//!     start: 16
//!     count: 32
//!     saturation: 1.0
//!     lightness: 0.5
//!   - type: gradient
//!     start: 48
//!     count: 8
//!     from: "#000"
//!     to: "#fff"
//! size: 64                # pad with black
//! ```
//!
//! Steps apply in that order: base, explicit colours, ranges, padding.

use serde::Deserialize;

use crate::error::{PifError, Result};
use crate::types::{Palette, PaletteBuilder, Rgb};

/// A parsed palette recipe.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PaletteRecipe {
    /// Start from the standard 4-colour palette.
    #[serde(default)]
    pub standard: bool,
    /// Hex colours appended after the base.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Generated sub-ranges, written in order.
    #[serde(default)]
    pub ranges: Vec<RangeSpec>,
    /// Minimum palette size; shorter palettes are padded with black.
    #[serde(default)]
    pub size: Option<usize>,
}

/// One generated sub-range of a recipe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RangeSpec {
    Hue {
        start: usize,
        count: usize,
        #[serde(default = "default_saturation")]
        saturation: f32,
        #[serde(default = "default_lightness")]
        lightness: f32,
    },
    Gradient {
        start: usize,
        count: usize,
        from: String,
        to: String,
    },
}

fn default_saturation() -> f32 {
    1.0
}

fn default_lightness() -> f32 {
    0.5
}

impl PaletteRecipe {
    /// Turn the recipe into a builder, resolving hex colours.
    pub fn to_builder(&self) -> Result<PaletteBuilder> {
        let mut builder = if self.standard {
            PaletteBuilder::from_palette(&Palette::standard())
        } else {
            PaletteBuilder::new()
        };

        for hex in &self.colors {
            builder.color(Rgb::from_hex(hex)?);
        }

        for range in &self.ranges {
            match range {
                RangeSpec::Hue {
                    start,
                    count,
                    saturation,
                    lightness,
                } => builder.hue_spectrum(*start, *count, *saturation, *lightness),
                RangeSpec::Gradient {
                    start,
                    count,
                    from,
                    to,
                } => builder.gradient(*start, *count, Rgb::from_hex(from)?, Rgb::from_hex(to)?),
            }
        }

        if let Some(size) = self.size {
            builder.size(size);
        }

        Ok(builder)
    }
}

/// Parse a YAML palette recipe into a builder.
pub fn parse_recipe(source: &str) -> Result<PaletteBuilder> {
    let recipe: PaletteRecipe = serde_yaml::from_str(source).map_err(|e| PifError::Parse {
        message: format!("Invalid palette recipe: {}", e),
        help: Some("See `pif palette --help` for the recipe format".to_string()),
    })?;
    recipe.to_builder()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colors_only() {
        let palette = parse_recipe("colors: ['#000', '#000', '#fff', '#f00']")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(palette, Palette::standard());
    }

    #[test]
    fn test_parse_full_recipe() {
        let source = r##"
standard: true
colors: ["#808080"]
ranges:
  - type: hue
    start: 8
    count: 4
  - type: gradient
    start: 12
    count: 3
    from: "#000000"
    to: "#ffffff"
size: 20
"##;
        let palette = parse_recipe(source).unwrap().build().unwrap();

        assert_eq!(palette.len(), 20);
        assert_eq!(palette.get(3), Some(Rgb::RED));
        assert_eq!(palette.get(4), Some(Rgb::new(128, 128, 128)));
        // Gap between explicit colours and the first range is black.
        assert_eq!(palette.get(5), Some(Rgb::BLACK));
        // First and last hue are both red.
        assert_eq!(palette.get(8), Some(Rgb::RED));
        assert_eq!(palette.get(11), Some(Rgb::RED));
        assert_eq!(palette.get(12), Some(Rgb::BLACK));
        assert_eq!(palette.get(14), Some(Rgb::WHITE));
        assert_eq!(palette.get(19), Some(Rgb::BLACK));
    }

    #[test]
    fn test_hue_defaults() {
        let recipe: PaletteRecipe =
            serde_yaml::from_str("ranges: [{type: hue, start: 0, count: 2}]").unwrap();
        assert_eq!(
            recipe.ranges,
            vec![RangeSpec::Hue {
                start: 0,
                count: 2,
                saturation: 1.0,
                lightness: 0.5
            }]
        );
    }

    #[test]
    fn test_bad_hex_is_parse_error() {
        let err = parse_recipe("colors: ['#12']").unwrap_err();
        assert!(matches!(err, PifError::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_recipe("colours: ['#fff']").is_err());
        assert!(parse_recipe("ranges: [{type: spiral, start: 0, count: 1}]").is_err());
    }

    #[test]
    fn test_oversized_recipe_fails_to_build() {
        let builder = parse_recipe("ranges: [{type: hue, start: 250, count: 10}]").unwrap();
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_empty_recipe_fails_to_build() {
        let builder = parse_recipe("{}").unwrap();
        assert!(builder.is_empty());
        assert!(builder.build().is_err());
    }
}
