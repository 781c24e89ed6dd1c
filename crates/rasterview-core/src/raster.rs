use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::consts::PREVIEW_MAX_EDGE;

/// File format of a raster, derived from the file extension.
///
/// The first extension of each format doubles as the canonical one used when
/// suggesting a file name on save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormatTag {
    Jpeg,
    Png,
    Bmp,
    Gif,
}

impl ImageFormatTag {
    /// Known extensions for this format, canonical one first.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ImageFormatTag::Jpeg => &["jpg", "jpeg", "jpe", "jfif"],
            ImageFormatTag::Png => &["png"],
            ImageFormatTag::Bmp => &["bmp", "dib"],
            ImageFormatTag::Gif => &["gif"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageFormatTag::Jpeg => "JPEG",
            ImageFormatTag::Png => "PNG",
            ImageFormatTag::Bmp => "BMP",
            ImageFormatTag::Gif => "GIF",
        }
    }

    /// GIF can be decoded but is never offered as a save target.
    pub fn writable(&self) -> bool {
        !matches!(self, ImageFormatTag::Gif)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        [
            ImageFormatTag::Jpeg,
            ImageFormatTag::Png,
            ImageFormatTag::Bmp,
            ImageFormatTag::Gif,
        ]
        .into_iter()
        .find(|tag| tag.extensions().contains(&ext.as_str()))
    }
}

/// An in-memory RGBA raster with a record of where it came from.
///
/// Pixel data is a dense row-major RGBA8 buffer. Each open document owns
/// exactly one raster; cloning yields a fully independent buffer.
#[derive(Clone, Debug)]
pub struct Raster {
    buffer: RgbaImage,
    /// Path the raster was decoded from, if any.
    pub source_path: Option<PathBuf>,
    /// Format the raster was decoded from, if known.
    pub format: Option<ImageFormatTag>,
}

impl Raster {
    /// Create an opaque black raster of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])),
            source_path: None,
            format: None,
        }
    }

    pub fn from_buffer(buffer: RgbaImage) -> Self {
        Self {
            buffer,
            source_path: None,
            format: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Color at (x, y). Panics if the coordinate is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.buffer.get_pixel(x, y)
    }

    /// Set the color at (x, y). Panics if the coordinate is out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.buffer.put_pixel(x, y, color);
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }

    pub fn as_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.buffer
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// True if any pixel has a non-opaque alpha value.
    pub fn uses_alpha(&self) -> bool {
        self.buffer.pixels().any(|p| p.0[3] != 255)
    }

    /// Scaled-down copy whose longest edge is at most `max_edge`, preserving
    /// aspect ratio. Returns an unscaled clone when the raster already fits.
    /// Source metadata is not carried over.
    pub fn thumbnail(&self, max_edge: u32) -> Raster {
        let (w, h) = (self.width(), self.height());
        let longest = w.max(h);
        if longest <= max_edge || longest == 0 {
            return Raster::from_buffer(self.buffer.clone());
        }
        let scale = max_edge as f32 / longest as f32;
        let tw = ((w as f32 * scale).round() as u32).max(1);
        let th = ((h as f32 * scale).round() as u32).max(1);
        Raster::from_buffer(imageops::resize(&self.buffer, tw, th, FilterType::Triangle))
    }

    /// Default preview copy for adjustment dialogs.
    pub fn preview_copy(&self) -> Raster {
        self.thumbnail(PREVIEW_MAX_EDGE)
    }
}

impl PartialEq for Raster {
    /// Two rasters are equal when dimensions and pixel content match.
    /// Source metadata is ignored so a reloaded file compares equal.
    fn eq(&self, other: &Self) -> bool {
        self.buffer.dimensions() == other.buffer.dimensions()
            && self.buffer.as_raw() == other.buffer.as_raw()
    }
}
