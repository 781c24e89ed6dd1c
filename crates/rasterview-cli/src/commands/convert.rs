use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rasterview_core::io::image_io::{load_raster, save_raster};

#[derive(Args)]
pub struct ConvertArgs {
    /// Input image file (JPEG, PNG, BMP or GIF)
    pub file: PathBuf,

    /// Output file path; format chosen from the extension
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!(
        "Loaded {}x{} {}",
        raster.width(),
        raster.height(),
        raster.format.map(|f| f.name()).unwrap_or("image"),
    );

    save_raster(&raster, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
