//! Palette command: build a `.pal` from a YAML recipe.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::codec::save_palette;
use crate::error::{PifError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_recipe;

/// Build a palette from a YAML recipe
///
/// Recipe keys: `standard` (bool), `colors` (hex list), `ranges`
/// (`{type: hue, start, count, saturation, lightness}` or
/// `{type: gradient, start, count, from, to}`), `size` (pad with black).
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Recipe file (.yaml)
    #[arg(required = true)]
    pub recipe: PathBuf,

    /// Output palette (defaults to the recipe with a .pal extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let source = fs::read_to_string(&args.recipe).map_err(|e| PifError::Io {
        path: args.recipe.clone(),
        message: e.to_string(),
    })?;

    let palette = parse_recipe(&source)?.build()?;
    let output = super::output_path(&args.recipe, args.output, "pal");
    save_palette(&palette, &output)?;

    printer.success(
        "Built",
        &format!(
            "{} ({})",
            display_path(&output),
            plural(palette.len(), "colour", "colours")
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::load_palette;
    use crate::types::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_palette_from_recipe() {
        let dir = tempdir().unwrap();
        let recipe = dir.path().join("warm.yaml");
        fs::write(
            &recipe,
            "standard: true\nranges:\n  - {type: gradient, start: 4, count: 2, from: '#400', to: '#f80'}\n",
        )
        .unwrap();

        let args = PaletteArgs {
            recipe,
            output: None,
        };
        run(args, &Printer::new()).unwrap();

        let palette = load_palette(&dir.path().join("warm.pal")).unwrap();
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.get(4), Some(Rgb::new(0x44, 0, 0)));
        assert_eq!(palette.get(5), Some(Rgb::new(0xff, 0x88, 0)));
    }

    #[test]
    fn test_missing_recipe() {
        let dir = tempdir().unwrap();
        let args = PaletteArgs {
            recipe: dir.path().join("nope.yaml"),
            output: None,
        };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(PifError::Io { .. })
        ));
    }
}
