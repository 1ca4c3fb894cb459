pub mod export;
pub mod import;
pub mod info;
pub mod palette;
pub mod text;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::codec::load_palette;
use crate::error::Result;
use crate::types::Palette;

/// pif - palettized image toolkit
#[derive(Parser, Debug)]
#[command(name = "pif")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe a palette, image or font file
    Info(info::InfoArgs),

    /// Convert an indexed image to PNG
    Export(export::ExportArgs),

    /// Quantize a PNG into an indexed image
    Import(import::ImportArgs),

    /// Build a palette from a YAML recipe
    Palette(palette::PaletteArgs),

    /// Render text into an image
    Text(text::TextArgs),
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Load a palette file, or fall back to the standard palette.
pub(crate) fn palette_or_standard(path: Option<&Path>) -> Result<Palette> {
    match path {
        Some(path) => load_palette(path),
        None => Ok(Palette::standard()),
    }
}

/// The explicit output path, or `input` with its extension replaced.
pub(crate) fn output_path(input: &Path, output: Option<PathBuf>, extension: &str) -> PathBuf {
    output.unwrap_or_else(|| input.with_extension(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::parse_from(["pif", "-vv", "info", "a.pal"]);
        assert_eq!(cli.log_level(), "trace");

        let cli = Cli::parse_from(["pif", "info", "a.pal"]);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_output_path() {
        let input = Path::new("art/logo.png");
        assert_eq!(output_path(input, None, "pif"), PathBuf::from("art/logo.pif"));
        assert_eq!(
            output_path(input, Some(PathBuf::from("out.pif")), "pif"),
            PathBuf::from("out.pif")
        );
    }
}
