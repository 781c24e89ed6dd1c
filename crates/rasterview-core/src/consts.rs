/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Smallest accepted per-channel adjustment delta.
pub const DELTA_MIN: i32 = -255;

/// Largest accepted per-channel adjustment delta.
pub const DELTA_MAX: i32 = 255;

/// Longest edge (in pixels) of the scaled-down copy used for dialog previews.
pub const PREVIEW_MAX_EDGE: u32 = 200;

/// Number of bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;
