use rayon::prelude::*;

use crate::adjust::clamp_channel;
use crate::consts::{BYTES_PER_PIXEL, DELTA_MAX, DELTA_MIN, PARALLEL_PIXEL_THRESHOLD};
use crate::raster::Raster;

/// Add `delta` to the R, G and B channels of every pixel, clamping each
/// channel to [0, 255]. Alpha is untouched.
///
/// A delta outside [-255, 255] is treated as a whole-image no-op rather
/// than clamped; see DESIGN.md.
pub fn shift_brightness(raster: &mut Raster, delta: i32) {
    if !(DELTA_MIN..=DELTA_MAX).contains(&delta) {
        tracing::debug!(delta, "brightness delta out of range, skipping");
        return;
    }
    if delta == 0 {
        return;
    }

    let row_bytes = raster.width() as usize * BYTES_PER_PIXEL;
    let parallel = raster.pixel_count() >= PARALLEL_PIXEL_THRESHOLD;
    let raw: &mut [u8] = &mut *raster.as_image_mut();

    if parallel && row_bytes > 0 {
        raw.par_chunks_mut(row_bytes)
            .for_each(|row| shift_row(row, delta));
    } else {
        shift_row(raw, delta);
    }
}

fn shift_row(row: &mut [u8], delta: i32) {
    for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
        for channel in &mut px[..3] {
            *channel = clamp_channel(*channel as i32 + delta);
        }
    }
}
