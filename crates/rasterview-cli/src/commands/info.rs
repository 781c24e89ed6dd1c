use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rasterview_core::io::image_io::load_raster;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file (JPEG, PNG, BMP or GIF)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let format = raster
        .format
        .map(|f| f.name())
        .unwrap_or("unknown");

    println!("File:        {}", args.file.display());
    println!("Format:      {}", format);
    println!("Dimensions:  {}x{}", raster.width(), raster.height());
    println!("Pixels:      {}", raster.pixel_count());
    println!(
        "Alpha:       {}",
        if raster.uses_alpha() { "yes" } else { "no (fully opaque)" }
    );

    let decoded_mb = (raster.as_raw().len()) as f64 / (1024.0 * 1024.0);
    println!("Decoded:     {:.1} MB", decoded_mb);

    Ok(())
}
