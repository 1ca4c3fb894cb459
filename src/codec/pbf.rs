//! `PIFF` font files.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::font::Font;

use super::pif::{read_image, write_image};
use super::{expect_magic, read_field, read_file, read_u8, write_file, AssetKind, FONT_MAGIC};

pub fn read_font<R: Read>(reader: &mut R) -> Result<Font> {
    expect_magic(reader, AssetKind::Font)?;

    let char_spacing = read_u8(reader, "PIF font character spacing")?;
    let line_spacing = read_u8(reader, "PIF font line spacing")?;
    let char_height = read_u8(reader, "PIF font character height")?;

    let mut widths = [0u8; 256];
    read_field(reader, &mut widths, "PIF font character widths")?;

    let sheet = read_image(reader)?;
    Ok(Font::new(
        sheet,
        &widths,
        char_height,
        char_spacing,
        line_spacing,
    ))
}

pub fn write_font<W: Write>(font: &Font, writer: &mut W) -> Result<()> {
    writer.write_all(FONT_MAGIC)?;
    writer.write_all(&[font.char_spacing(), font.line_spacing(), font.char_height()])?;
    writer.write_all(&font.widths())?;
    write_image(font.sheet(), writer)
}

pub fn load_font(path: &Path) -> Result<Font> {
    let bytes = read_file(path)?;
    let font = read_font(&mut bytes.as_slice())?;
    log::debug!(
        "loaded {}px font from {}",
        font.char_height(),
        path.display()
    );
    Ok(font)
}

pub fn save_font(font: &Font, path: &Path) -> Result<()> {
    let mut bytes = Vec::new();
    write_font(font, &mut bytes)?;
    write_file(path, &bytes)?;
    log::debug!("saved font to {}", path.display());
    Ok(())
}
