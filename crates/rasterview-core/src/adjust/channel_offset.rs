use rayon::prelude::*;

use crate::adjust::clamp_channel;
use crate::consts::{BYTES_PER_PIXEL, DELTA_MAX, DELTA_MIN, PARALLEL_PIXEL_THRESHOLD};
use crate::raster::Raster;

/// Add four independent deltas to the R, G, B and A channels of every pixel,
/// clamping each channel to [0, 255].
///
/// The transform runs iff at least one of the four deltas lies in
/// [-255, 255]; when it runs, all four deltas are applied, so an
/// out-of-range delta saturates its channel. See DESIGN.md. Callers that
/// keep every delta in range never observe the difference.
pub fn offset_channels(raster: &mut Raster, red: i32, green: i32, blue: i32, alpha: i32) {
    let in_range = |d: i32| (DELTA_MIN..=DELTA_MAX).contains(&d);
    if !(in_range(red) || in_range(green) || in_range(blue) || in_range(alpha)) {
        tracing::debug!(red, green, blue, alpha, "all channel deltas out of range, skipping");
        return;
    }
    if red == 0 && green == 0 && blue == 0 && alpha == 0 {
        return;
    }

    let deltas = [red, green, blue, alpha];
    let row_bytes = raster.width() as usize * BYTES_PER_PIXEL;
    let parallel = raster.pixel_count() >= PARALLEL_PIXEL_THRESHOLD;
    let raw: &mut [u8] = &mut *raster.as_image_mut();

    if parallel && row_bytes > 0 {
        raw.par_chunks_mut(row_bytes)
            .for_each(|row| offset_row(row, &deltas));
    } else {
        offset_row(raw, &deltas);
    }
}

fn offset_row(row: &mut [u8], deltas: &[i32; 4]) {
    for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
        for (channel, delta) in px.iter_mut().zip(deltas) {
            *channel = clamp_channel(*channel as i32 + delta);
        }
    }
}
