use image::Rgba;

use rasterview_core::adjust::{self, Adjustment};
use rasterview_core::raster::Raster;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_raster(w: u32, h: u32, fill: [u8; 4]) -> Raster {
    let mut raster = Raster::new(w, h);
    for y in 0..h {
        for x in 0..w {
            raster.set_pixel(x, y, Rgba(fill));
        }
    }
    raster
}

fn assert_all_pixels(raster: &Raster, expected: [u8; 4]) {
    for (x, y, px) in raster.as_image().enumerate_pixels() {
        assert_eq!(
            px.0, expected,
            "pixel ({x},{y}) expected {expected:?}, got {:?}",
            px.0
        );
    }
}

// ---------------------------------------------------------------------------
// shift_brightness
// ---------------------------------------------------------------------------

#[test]
fn test_brightness_zero_is_identity() {
    let mut raster = make_raster(4, 4, [10, 20, 30, 255]);
    let before = raster.clone();
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 0 });
    assert_eq!(raster, before);
}

#[test]
fn test_brightness_adds_to_rgb() {
    let mut raster = make_raster(4, 4, [10, 10, 10, 255]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 50 });
    assert_all_pixels(&raster, [60, 60, 60, 255]);
}

#[test]
fn test_brightness_leaves_alpha_untouched() {
    let mut raster = make_raster(4, 4, [100, 100, 100, 128]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 50 });
    assert_all_pixels(&raster, [150, 150, 150, 128]);
}

#[test]
fn test_brightness_clamps_high() {
    let mut raster = make_raster(4, 4, [250, 255, 200, 255]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 100 });
    assert_all_pixels(&raster, [255, 255, 255, 255]);
}

#[test]
fn test_brightness_clamps_low() {
    let mut raster = make_raster(4, 4, [5, 5, 5, 255]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: -20 });
    assert_all_pixels(&raster, [0, 0, 0, 255]);
}

#[test]
fn test_brightness_saturated_channel_stays_saturated() {
    let mut raster = make_raster(2, 2, [255, 0, 128, 255]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 1 });
    assert_all_pixels(&raster, [255, 1, 129, 255]);

    let mut raster = make_raster(2, 2, [255, 0, 128, 255]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: -1 });
    assert_all_pixels(&raster, [254, 0, 127, 255]);
}

#[test]
fn test_brightness_out_of_range_delta_is_noop() {
    let mut raster = make_raster(4, 4, [10, 10, 10, 255]);
    let before = raster.clone();
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 300 });
    assert_eq!(raster, before, "delta +300 must leave the raster unchanged");
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: -300 });
    assert_eq!(raster, before, "delta -300 must leave the raster unchanged");
}

#[test]
fn test_brightness_range_bounds_are_inclusive() {
    let mut raster = make_raster(2, 2, [100, 100, 100, 255]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 255 });
    assert_all_pixels(&raster, [255, 255, 255, 255]);

    let mut raster = make_raster(2, 2, [100, 100, 100, 255]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: -255 });
    assert_all_pixels(&raster, [0, 0, 0, 255]);
}

#[test]
fn test_brightness_varied_pixels() {
    let mut raster = Raster::new(2, 1);
    raster.set_pixel(0, 0, Rgba([0, 100, 250, 255]));
    raster.set_pixel(1, 0, Rgba([30, 200, 5, 64]));
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 10 });
    assert_eq!(raster.pixel(0, 0).0, [10, 110, 255, 255]);
    assert_eq!(raster.pixel(1, 0).0, [40, 210, 15, 64]);
}

#[test]
fn test_brightness_large_image_parallel_path() {
    // 512x512 exceeds the row-parallel threshold.
    let mut raster = make_raster(512, 512, [100, 100, 100, 255]);
    adjust::apply(&mut raster, &Adjustment::Brightness { delta: 50 });
    assert_all_pixels(&raster, [150, 150, 150, 255]);
}

// ---------------------------------------------------------------------------
// offset_channels
// ---------------------------------------------------------------------------

#[test]
fn test_channel_offset_zero_is_identity() {
    let mut raster = make_raster(4, 4, [10, 20, 30, 40]);
    let before = raster.clone();
    adjust::apply(
        &mut raster,
        &Adjustment::ChannelOffset {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
        },
    );
    assert_eq!(raster, before);
}

#[test]
fn test_channel_offset_independent_channels() {
    let mut raster = make_raster(4, 4, [10, 20, 30, 40]);
    adjust::apply(
        &mut raster,
        &Adjustment::ChannelOffset {
            red: 5,
            green: -5,
            blue: 10,
            alpha: 20,
        },
    );
    assert_all_pixels(&raster, [15, 15, 40, 60]);
}

#[test]
fn test_channel_offset_clamps_each_channel() {
    let mut raster = make_raster(4, 4, [250, 5, 128, 200]);
    adjust::apply(
        &mut raster,
        &Adjustment::ChannelOffset {
            red: 100,
            green: -100,
            blue: 0,
            alpha: 100,
        },
    );
    assert_all_pixels(&raster, [255, 0, 128, 255]);
}

#[test]
fn test_channel_offset_adjusts_alpha() {
    let mut raster = make_raster(4, 4, [0, 0, 0, 100]);
    adjust::apply(
        &mut raster,
        &Adjustment::ChannelOffset {
            red: 0,
            green: 0,
            blue: 0,
            alpha: -50,
        },
    );
    assert_all_pixels(&raster, [0, 0, 0, 50]);
}

#[test]
fn test_channel_offset_disjunctive_gate_applies_out_of_range_delta() {
    // One in-range delta is enough for the whole transform to run; the
    // out-of-range red delta is then applied and clamps to 255.
    let mut raster = make_raster(4, 4, [10, 20, 30, 255]);
    adjust::apply(
        &mut raster,
        &Adjustment::ChannelOffset {
            red: 999,
            green: 10,
            blue: 0,
            alpha: 0,
        },
    );
    assert_all_pixels(&raster, [255, 30, 30, 255]);
}

#[test]
fn test_channel_offset_all_out_of_range_is_noop() {
    let mut raster = make_raster(4, 4, [10, 20, 30, 40]);
    let before = raster.clone();
    adjust::apply(
        &mut raster,
        &Adjustment::ChannelOffset {
            red: 1000,
            green: 1000,
            blue: -1000,
            alpha: 256,
        },
    );
    assert_eq!(raster, before);
}

#[test]
fn test_channel_offset_large_image_parallel_path() {
    let mut raster = make_raster(512, 512, [10, 20, 30, 40]);
    adjust::apply(
        &mut raster,
        &Adjustment::ChannelOffset {
            red: 1,
            green: 2,
            blue: 3,
            alpha: 4,
        },
    );
    assert_all_pixels(&raster, [11, 22, 33, 44]);
}

// ---------------------------------------------------------------------------
// Adjustment metadata
// ---------------------------------------------------------------------------

#[test]
fn test_adjustment_names() {
    assert_eq!(Adjustment::Brightness { delta: 1 }.name(), "Brightness");
    assert_eq!(
        Adjustment::ChannelOffset {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0
        }
        .name(),
        "Channel Offset"
    );
}

#[test]
fn test_adjustment_is_identity() {
    assert!(Adjustment::Brightness { delta: 0 }.is_identity());
    assert!(!Adjustment::Brightness { delta: 1 }.is_identity());
    assert!(Adjustment::ChannelOffset {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0
    }
    .is_identity());
    assert!(!Adjustment::ChannelOffset {
        red: 0,
        green: 0,
        blue: 0,
        alpha: -1
    }
    .is_identity());
}
