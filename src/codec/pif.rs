//! `PIFI` image files.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{PifError, Result};
use crate::image::Image;

use super::{expect_magic, read_field, read_file, write_file, AssetKind, IMAGE_MAGIC};

pub fn read_image<R: Read>(reader: &mut R) -> Result<Image<'static>> {
    expect_magic(reader, AssetKind::Image)?;

    let mut header = [0u8; 8];
    read_field(reader, &mut header, "PIF image size")?;
    let width = u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;
    let height = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;

    let size = width.checked_mul(height).ok_or_else(|| PifError::Parse {
        message: format!("PIF image size {}x{} is too large", width, height),
        help: None,
    })?;

    // Read through `take` so a lying header cannot force a huge allocation.
    let mut pixels = Vec::new();
    reader.take(size as u64).read_to_end(&mut pixels)?;
    if pixels.len() != size {
        return Err(PifError::parse("Failed to read PIF image body"));
    }

    Image::from_pixels(width, height, pixels)
}

pub fn write_image<W: Write>(image: &Image<'_>, writer: &mut W) -> Result<()> {
    let dimension = |n: usize| {
        u32::try_from(n).map_err(|_| PifError::Validation {
            message: format!("{}x{} image is too large to save", image.width(), image.height()),
            help: Some("PIF images are at most 2^32 - 1 pixels on each side".to_string()),
        })
    };
    let width = dimension(image.width())?;
    let height = dimension(image.height())?;

    writer.write_all(IMAGE_MAGIC)?;
    writer.write_all(&width.to_le_bytes())?;
    writer.write_all(&height.to_le_bytes())?;
    writer.write_all(image.pixels())?;
    Ok(())
}

pub fn load_image(path: &Path) -> Result<Image<'static>> {
    let bytes = read_file(path)?;
    let image = read_image(&mut bytes.as_slice())?;
    log::debug!(
        "loaded {}x{} image from {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}

pub fn save_image(image: &Image<'_>, path: &Path) -> Result<()> {
    let mut bytes = Vec::with_capacity(12 + image.size());
    write_image(image, &mut bytes)?;
    write_file(path, &bytes)?;
    log::debug!(
        "saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
