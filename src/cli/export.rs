//! Export command: indexed image to PNG.

use std::path::PathBuf;

use clap::Args;

use crate::codec::load_image;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;

use super::{output_path, palette_or_standard};

/// Convert an indexed image to PNG
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Image file (.pif)
    #[arg(required = true)]
    pub image: PathBuf,

    /// Palette file (.pal); defaults to the standard 4-colour palette
    #[arg(long, short)]
    pub palette: Option<PathBuf>,

    /// Output PNG (defaults to the input with a .png extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let image = load_image(&args.image)?;
    let palette = palette_or_standard(args.palette.as_deref())?;
    let output = output_path(&args.image, args.output, "png");

    let unmapped = image
        .pixels()
        .iter()
        .filter(|&&p| p as usize >= palette.len())
        .count();
    if unmapped > 0 {
        printer.warning(
            "Warning",
            &format!(
                "{} outside the {}-colour palette, drawn black",
                plural(unmapped, "pixel", "pixels"),
                palette.len()
            ),
        );
    }

    write_png(&image, &palette, &output, args.scale)?;

    printer.success(
        "Exported",
        &format!(
            "{} -> {} ({}x{})",
            display_path(&args.image),
            display_path(&output),
            image.width() as u32 * args.scale.max(1),
            image.height() as u32 * args.scale.max(1)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::save_image;
    use crate::image::Image;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_png() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("dot.pif");
        save_image(&Image::from_pixels(2, 1, vec![3, 0]).unwrap(), &input).unwrap();

        let args = ExportArgs {
            image: input.clone(),
            palette: None,
            output: None,
            scale: 3,
        };
        run(args, &Printer::new()).unwrap();

        let png = image::open(dir.path().join("dot.png")).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (6, 3));
        assert_eq!(png.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(png.get_pixel(5, 2).0, [0, 0, 0, 0]);
    }
}
