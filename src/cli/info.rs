//! Info command: identify and summarize an asset file.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::codec::{read_font, read_image, read_palette, read_file, sniff_kind, AssetKind};
use crate::error::{PifError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::TRANSPARENT;

/// Describe a palette, image or font file
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// File to inspect (.pal, .pif or .pbf)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Print a JSON summary to stdout
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable summary printed by `info --json`.
#[derive(Debug, Serialize, PartialEq)]
pub struct AssetInfo {
    pub kind: AssetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparent_pixels: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_height: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<usize>,
}

impl AssetInfo {
    fn new(kind: AssetKind) -> Self {
        Self {
            kind,
            colors: None,
            width: None,
            height: None,
            transparent_pixels: None,
            char_height: None,
            glyphs: None,
        }
    }
}

/// Decode `bytes` and summarize them.
pub fn describe(bytes: &[u8]) -> Result<AssetInfo> {
    let kind = sniff_kind(bytes).ok_or_else(|| PifError::Parse {
        message: "File is not a PIF palette, image or font".to_string(),
        help: Some("PIF files start with PIFP, PIFI or PIFF".to_string()),
    })?;

    let mut info = AssetInfo::new(kind);
    let mut reader = bytes;
    match kind {
        AssetKind::Palette => {
            let palette = read_palette(&mut reader)?;
            info.colors = Some(palette.colors().iter().map(|c| c.to_string()).collect());
        }
        AssetKind::Image => {
            let image = read_image(&mut reader)?;
            info.width = Some(image.width());
            info.height = Some(image.height());
            info.transparent_pixels =
                Some(image.pixels().iter().filter(|&&p| p == TRANSPARENT).count());
        }
        AssetKind::Font => {
            let font = read_font(&mut reader)?;
            info.width = Some(font.sheet().width());
            info.height = Some(font.sheet().height());
            info.char_height = Some(font.char_height());
            info.glyphs = Some(font.widths().iter().filter(|&&w| w > 0).count());
        }
    }
    Ok(info)
}

pub fn run(args: InfoArgs, printer: &Printer) -> Result<()> {
    let bytes = read_file(&args.file)?;
    let info = describe(&bytes)?;

    if args.json {
        let json = serde_json::to_string_pretty(&info).map_err(|e| PifError::Build {
            message: format!("Failed to serialize info: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    let display = display_path(&args.file);
    let summary = match info.kind {
        AssetKind::Palette => {
            let count = info.colors.as_ref().map_or(0, Vec::len);
            format!("{} ({})", display, plural(count, "colour", "colours"))
        }
        AssetKind::Image => format!(
            "{} ({}x{}, {} transparent)",
            display,
            info.width.unwrap_or(0),
            info.height.unwrap_or(0),
            plural(info.transparent_pixels.unwrap_or(0), "pixel", "pixels")
        ),
        AssetKind::Font => format!(
            "{} ({}px high, {})",
            display,
            info.char_height.unwrap_or(0),
            plural(info.glyphs.unwrap_or(0), "glyph", "glyphs")
        ),
    };
    printer.info(&capitalize(&info.kind.to_string()), &summary);

    if let Some(colors) = &info.colors {
        for (i, color) in colors.iter().enumerate() {
            println!("{:3} {}", i, color);
        }
    }

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
