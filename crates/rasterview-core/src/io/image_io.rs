use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{RasterError, Result};
use crate::raster::{ImageFormatTag, Raster};

/// Decode an image file (JPEG/PNG/BMP/GIF) into an RGBA raster.
///
/// The source path and detected format are recorded on the raster so a later
/// save can preselect the original format.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let decoded = image::open(path)?;
    let buffer = decoded.to_rgba8();
    let (width, height) = buffer.dimensions();
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions { width, height });
    }

    tracing::debug!(path = %path.display(), width, height, "decoded image");

    let mut raster = Raster::from_buffer(buffer);
    raster.source_path = Some(path.to_path_buf());
    raster.format = ImageFormatTag::from_path(path);
    Ok(raster)
}

/// Encode the raster to disk, choosing the codec from the target extension.
///
/// JPEG has no alpha channel, so the raster is flattened to RGB first. GIF
/// and unrecognized extensions are rejected. A non-writable target directory
/// maps to [`RasterError::TargetNotWritable`] so callers can report it apart
/// from generic I/O failures.
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    let tag = ImageFormatTag::from_path(path).ok_or_else(|| {
        RasterError::UnsupportedSaveFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("(none)")
                .to_string(),
        )
    })?;
    if !tag.writable() {
        return Err(RasterError::UnsupportedSaveFormat(tag.name().to_string()));
    }

    ensure_writable_parent(path)?;

    match tag {
        ImageFormatTag::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(raster.as_image().clone()).to_rgb8();
            rgb.save_with_format(path, ImageFormat::Jpeg)?;
        }
        ImageFormatTag::Png => {
            raster.as_image().save_with_format(path, ImageFormat::Png)?;
        }
        ImageFormatTag::Bmp => {
            raster.as_image().save_with_format(path, ImageFormat::Bmp)?;
        }
        ImageFormatTag::Gif => unreachable!("rejected by writable() above"),
    }

    tracing::debug!(path = %path.display(), format = tag.name(), "encoded image");
    Ok(())
}

fn ensure_writable_parent(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let metadata = fs::metadata(parent)?;
    if metadata.permissions().readonly() {
        return Err(RasterError::TargetNotWritable(parent.to_path_buf()));
    }
    Ok(())
}
