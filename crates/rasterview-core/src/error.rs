use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported save format: {0}")]
    UnsupportedSaveFormat(String),

    #[error("Target directory not writable: {}", .0.display())]
    TargetNotWritable(PathBuf),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, RasterError>;
