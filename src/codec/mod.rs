//! Binary asset formats.
//!
//! Three formats share one shape: a 4-byte ASCII magic followed by a fixed
//! layout, all multi-byte integers little-endian.
//!
//! | Format  | Magic  | Ext   | Body                                                   |
//! |---------|--------|-------|--------------------------------------------------------|
//! | Palette | `PIFP` | `pal` | `size - 1` (u8), then `size` RGB triples               |
//! | Image   | `PIFI` | `pif` | width (u32), height (u32), then `w * h` index bytes    |
//! | Font    | `PIFF` | `pbf` | char spacing, line spacing, char height (u8 each), 256 glyph widths, then an image |
//!
//! Readers never panic on malformed input: short reads and wrong magic come
//! back as [`PifError::Parse`].

mod pal;
mod pbf;
mod pif;

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;

use crate::error::{PifError, Result};

pub use pal::{load_palette, read_palette, save_palette, write_palette};
pub use pbf::{load_font, read_font, save_font, write_font};
pub use pif::{load_image, read_image, save_image, write_image};

pub const PALETTE_MAGIC: &[u8; 4] = b"PIFP";
pub const IMAGE_MAGIC: &[u8; 4] = b"PIFI";
pub const FONT_MAGIC: &[u8; 4] = b"PIFF";

pub const PALETTE_EXT: &str = "pal";
pub const IMAGE_EXT: &str = "pif";
pub const FONT_EXT: &str = "pbf";

/// Which binary format a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Palette,
    Image,
    Font,
}

impl AssetKind {
    pub fn magic(self) -> &'static [u8; 4] {
        match self {
            AssetKind::Palette => PALETTE_MAGIC,
            AssetKind::Image => IMAGE_MAGIC,
            AssetKind::Font => FONT_MAGIC,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Palette => PALETTE_EXT,
            AssetKind::Image => IMAGE_EXT,
            AssetKind::Font => FONT_EXT,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Palette => "palette",
            AssetKind::Image => "image",
            AssetKind::Font => "font",
        };
        f.write_str(name)
    }
}

/// Identify a file by its magic bytes.
pub fn sniff_kind(bytes: &[u8]) -> Option<AssetKind> {
    let magic = bytes.get(..4)?;
    [AssetKind::Palette, AssetKind::Image, AssetKind::Font]
        .into_iter()
        .find(|kind| kind.magic() == magic)
}

/// Fill `buf` exactly; running out of input is a parse error naming `what`.
pub(crate) fn read_field<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => PifError::parse(format!("Failed to read {}", what)),
        _ => PifError::IoError(e),
    })
}

pub(crate) fn read_u8<R: Read>(reader: &mut R, what: &str) -> Result<u8> {
    let mut buf = [0u8; 1];
    read_field(reader, &mut buf, what)?;
    Ok(buf[0])
}

/// Read and check the 4-byte magic of `kind`.
pub(crate) fn expect_magic<R: Read>(reader: &mut R, kind: AssetKind) -> Result<()> {
    let mut magic = [0u8; 4];
    read_field(reader, &mut magic, "magic bytes")?;
    if &magic != kind.magic() {
        return Err(PifError::Parse {
            message: format!("File is not a PIF {}", kind),
            help: Some(format!(
                "PIF {} files start with {:?}",
                kind,
                String::from_utf8_lossy(kind.magic())
            )),
        });
    }
    Ok(())
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| PifError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| PifError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
