use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rasterview_core::adjust::{self, Adjustment};
use rasterview_core::io::image_io::{load_raster, save_raster};
use rasterview_core::preset::AdjustmentPreset;

#[derive(Args)]
pub struct AdjustArgs {
    /// Input image file (JPEG, PNG, BMP or GIF)
    pub file: PathBuf,

    /// Brightness delta applied to R, G and B (-255 to 255)
    #[arg(long)]
    pub brightness: Option<i32>,

    /// Red channel delta (-255 to 255)
    #[arg(long)]
    pub red: Option<i32>,

    /// Green channel delta (-255 to 255)
    #[arg(long)]
    pub green: Option<i32>,

    /// Blue channel delta (-255 to 255)
    #[arg(long)]
    pub blue: Option<i32>,

    /// Alpha channel delta (-255 to 255)
    #[arg(long)]
    pub alpha: Option<i32>,

    /// Adjustment preset file (TOML), applied before the flag adjustments
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Output file path; format chosen from the extension
    #[arg(short, long, default_value = "adjusted.png")]
    pub output: PathBuf,
}

pub fn run(args: &AdjustArgs) -> Result<()> {
    let mut raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("Loaded {}x{} image", raster.width(), raster.height());

    let mut adjustments = Vec::new();

    if let Some(ref preset_path) = args.preset {
        let content = std::fs::read_to_string(preset_path)
            .with_context(|| format!("Failed to read {}", preset_path.display()))?;
        let preset: AdjustmentPreset = toml::from_str(&content)
            .with_context(|| format!("Invalid preset file {}", preset_path.display()))?;
        println!(
            "Preset {}: {} adjustment(s)",
            preset_path.display(),
            preset.adjustments.len()
        );
        adjustments.extend(preset.adjustments);
    }

    if let Some(delta) = args.brightness {
        adjustments.push(Adjustment::Brightness { delta });
    }

    if args.red.is_some() || args.green.is_some() || args.blue.is_some() || args.alpha.is_some() {
        adjustments.push(Adjustment::ChannelOffset {
            red: args.red.unwrap_or(0),
            green: args.green.unwrap_or(0),
            blue: args.blue.unwrap_or(0),
            alpha: args.alpha.unwrap_or(0),
        });
    }

    if adjustments.is_empty() {
        anyhow::bail!("No adjustments given; pass --brightness, channel deltas or --preset");
    }

    for adjustment in &adjustments {
        println!("Applying {}", adjustment.name());
        adjust::apply(&mut raster, adjustment);
    }

    save_raster(&raster, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
