//! `PIFP` palette files.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::{Palette, Rgb};

use super::{expect_magic, read_field, read_file, read_u8, write_file, AssetKind, PALETTE_MAGIC};

pub fn read_palette<R: Read>(reader: &mut R) -> Result<Palette> {
    expect_magic(reader, AssetKind::Palette)?;

    let size = read_u8(reader, "PIF palette maximum color index")? as usize + 1;

    let mut body = vec![0u8; size * 3];
    read_field(reader, &mut body, "PIF palette body")?;

    let colors = body
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect();
    Palette::from_colors(colors)
}

pub fn write_palette<W: Write>(palette: &Palette, writer: &mut W) -> Result<()> {
    writer.write_all(PALETTE_MAGIC)?;
    // Palettes always hold 1..=256 entries, so this fits a byte.
    writer.write_all(&[(palette.len() - 1) as u8])?;
    for rgb in palette.colors() {
        writer.write_all(&[rgb.r, rgb.g, rgb.b])?;
    }
    Ok(())
}

pub fn load_palette(path: &Path) -> Result<Palette> {
    let bytes = read_file(path)?;
    let palette = read_palette(&mut bytes.as_slice())?;
    log::debug!("loaded {}-colour palette from {}", palette.len(), path.display());
    Ok(palette)
}

pub fn save_palette(palette: &Palette, path: &Path) -> Result<()> {
    let mut bytes = Vec::with_capacity(5 + palette.len() * 3);
    write_palette(palette, &mut bytes)?;
    write_file(path, &bytes)?;
    log::debug!("saved {}-colour palette to {}", palette.len(), path.display());
    Ok(())
}
