//! RGB triple type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{PifError, Result};

/// An opaque RGB colour, one entry of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);

    /// Squared euclidean distance between two colours.
    pub fn diff(self, other: Rgb) -> i32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        dr * dr + dg * dg + db * db
    }

    /// Linear interpolation towards `other`, truncating each channel.
    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        fn channel(a: u8, b: u8, t: f32) -> u8 {
            let a = a as f32;
            (a + t * (b as f32 - a)).clamp(0.0, 255.0) as u8
        }

        Self::new(
            channel(self.r, other.r, t),
            channel(self.g, other.g, t),
            channel(self.b, other.b, t),
        )
    }

    /// Pack as `0xRRGGBBAA` with full alpha.
    pub fn to_pixel_rgba32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, 255])
    }

    /// Pack as `0xAABBGGRR` with full alpha.
    pub fn to_pixel_abgr32(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, 255])
    }

    /// Unpack a `0xRRGGBBAA` pixel, ignoring alpha.
    pub fn from_pixel_rgba32(pixel: u32) -> Self {
        let [r, g, b, _] = pixel.to_be_bytes();
        Self::new(r, g, b)
    }

    /// Unpack a `0xAABBGGRR` pixel, ignoring alpha.
    pub fn from_pixel_abgr32(pixel: u32) -> Self {
        let [r, g, b, _] = pixel.to_le_bytes();
        Self::new(r, g, b)
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_byte(&hex[0..1])?;
                let g = parse_hex_byte(&hex[1..2])?;
                let b = parse_hex_byte(&hex[2..3])?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl FromStr for Rgb {
    type Err = PifError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn invalid_hex(s: &str) -> PifError {
    PifError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

/// Parse one or two hex digits.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| PifError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
