//! Import command: PNG to indexed image.

use std::path::PathBuf;

use clap::Args;

use crate::codec::{load_palette, save_image};
use crate::error::{PifError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::read_png;
use crate::types::TRANSPARENT;

use super::output_path;

/// Quantize a PNG into an indexed image
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Input image (PNG or any format the image crate reads)
    #[arg(required = true)]
    pub png: PathBuf,

    /// Palette file (.pal) to quantize against
    #[arg(long, short, required = true)]
    pub palette: PathBuf,

    /// Output image (defaults to the input with a .pif extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Quantize through an RGB lookup cube with this many levels per channel
    #[arg(long)]
    pub rgbmap: Option<u8>,
}

pub fn run(args: ImportArgs, printer: &Printer) -> Result<()> {
    let palette = load_palette(&args.palette)?;

    let rgbmap = match args.rgbmap {
        Some(size) if size < 2 => {
            return Err(PifError::Validation {
                message: format!("An rgbmap needs at least 2 levels, got {}", size),
                help: Some("Try --rgbmap 16".to_string()),
            })
        }
        Some(size) => Some(palette.rgbmap(size)),
        None => None,
    };

    let image = read_png(&args.png, &palette, rgbmap.as_ref())?;
    let output = output_path(&args.png, args.output, "pif");
    save_image(&image, &output)?;

    let opaque = image.pixels().iter().filter(|&&p| p != TRANSPARENT).count();
    printer.success(
        "Imported",
        &format!(
            "{} -> {} ({}x{}, {} mapped)",
            display_path(&args.png),
            display_path(&output),
            image.width(),
            image.height(),
            plural(opaque, "pixel", "pixels")
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{load_image, save_palette};
    use crate::types::Palette;
    use ::image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn fixture(dir: &std::path::Path) -> (PathBuf, PathBuf) {
        let png = dir.join("in.png");
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([250, 250, 250, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        img.save(&png).unwrap();

        let pal = dir.join("std.pal");
        save_palette(&Palette::standard(), &pal).unwrap();
        (png, pal)
    }

    #[test]
    fn test_import_quantizes() {
        let dir = tempdir().unwrap();
        let (png, pal) = fixture(dir.path());

        let args = ImportArgs {
            png: png.clone(),
            palette: pal,
            output: None,
            rgbmap: Some(8),
        };
        run(args, &Printer::new()).unwrap();

        let image = load_image(&dir.path().join("in.pif")).unwrap();
        assert_eq!(image.pixels(), &[2, 0]);
    }

    #[test]
    fn test_import_rejects_tiny_rgbmap() {
        let dir = tempdir().unwrap();
        let (png, pal) = fixture(dir.path());

        let args = ImportArgs {
            png,
            palette: pal,
            output: None,
            rgbmap: Some(1),
        };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(PifError::Validation { .. })
        ));
    }
}
