//! Text command: render a string into a fitted image.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::codec::{load_font, save_image};
use crate::error::{PifError, Result};
use crate::font::Font;
use crate::image::Image;
use crate::output::{display_path, Printer};
use crate::render::write_png;
use crate::types::STD_WHITE;

use super::palette_or_standard;

/// Render text into an image
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to render; `\n` starts a new line
    #[arg(required = true)]
    pub text: String,

    /// Font file (.pbf); defaults to the built-in 6px font
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Palette file (.pal) used for PNG output and colour checks
    #[arg(long, short)]
    pub palette: Option<PathBuf>,

    /// Palette index to draw with (0 keeps the glyph sheet's colours)
    #[arg(long, default_value_t = STD_WHITE)]
    pub color: u8,

    /// Render scale
    #[arg(long, default_value = "1")]
    pub scale: f32,

    /// Output file: .png exports through the palette, anything else is .pif
    #[arg(long, short, default_value = "text.pif")]
    pub output: PathBuf,
}

/// Lay out `text` and draw it into an image exactly as large as the text.
pub fn render(font: &Font, text: &str, color: u8) -> Image<'static> {
    let (w, h) = font.text_size(text);
    let mut image = Image::new(w.max(0) as usize, h.max(0) as usize);
    font.render_text(&mut image, text, 0, 0, color);
    image
}

pub fn run(args: TextArgs, printer: &Printer) -> Result<()> {
    let mut font = match &args.font {
        Some(path) => load_font(path)?,
        None => Font::builtin()?,
    };
    font.set_scale(args.scale);

    let palette = palette_or_standard(args.palette.as_deref())?;
    if args.color as usize >= palette.len() {
        return Err(PifError::Validation {
            message: format!(
                "Colour {} is outside the {}-colour palette",
                args.color,
                palette.len()
            ),
            help: Some("Pass --palette or pick a smaller --color".to_string()),
        });
    }

    let text = args.text.replace("\\n", "\n");
    let image = render(&font, &text, args.color);

    if is_png(&args.output) {
        write_png(&image, &palette, &args.output, 1)?;
    } else {
        save_image(&image, &args.output)?;
    }

    printer.success(
        "Rendered",
        &format!(
            "{} ({}x{})",
            display_path(&args.output),
            image.width(),
            image.height()
        ),
    );
    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::load_image;
    use tempfile::tempdir;

    fn args(text: &str, output: PathBuf) -> TextArgs {
        TextArgs {
            text: text.to_string(),
            font: None,
            palette: None,
            color: STD_WHITE,
            scale: 1.0,
            output,
        }
    }

    #[test]
    fn test_render_fits_text() {
        let font = Font::builtin().unwrap();
        let image = render(&font, "Hi\nA", 3);
        assert_eq!((image.width(), image.height()), (5, 13));
        assert!(image.pixels().iter().all(|&p| p == 0 || p == 3));
    }

    #[test]
    fn test_text_to_pif() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("hi.pif");
        run(args("Hi\\nA", output.clone()), &Printer::new()).unwrap();

        let image = load_image(&output).unwrap();
        assert_eq!((image.width(), image.height()), (5, 13));
        assert!(image.pixels().contains(&STD_WHITE));
    }

    #[test]
    fn test_text_to_png() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("hi.PNG");
        run(args("Hi", output.clone()), &Printer::new()).unwrap();

        let png = image::open(&output).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (5, 6));
        assert_eq!(png.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(png.get_pixel(1, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_color_outside_palette() {
        let dir = tempdir().unwrap();
        let mut bad = args("Hi", dir.path().join("x.pif"));
        bad.color = 9;
        assert!(matches!(
            run(bad, &Printer::new()),
            Err(PifError::Validation { .. })
        ));
    }

    #[test]
    fn test_is_png() {
        assert!(is_png(Path::new("a.png")));
        assert!(is_png(Path::new("a.PNG")));
        assert!(!is_png(Path::new("a.pif")));
        assert!(!is_png(Path::new("png")));
    }
}
