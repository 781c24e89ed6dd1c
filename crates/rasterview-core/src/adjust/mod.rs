pub mod brightness;
pub mod channel_offset;

use serde::{Deserialize, Serialize};

use crate::raster::Raster;

/// A single per-pixel color adjustment with its parameters.
///
/// Deltas are per-channel offsets in [-255, 255]; 0 is the identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjustment {
    Brightness {
        delta: i32,
    },
    ChannelOffset {
        red: i32,
        green: i32,
        blue: i32,
        alpha: i32,
    },
}

impl Adjustment {
    pub fn name(&self) -> &'static str {
        match self {
            Adjustment::Brightness { .. } => "Brightness",
            Adjustment::ChannelOffset { .. } => "Channel Offset",
        }
    }

    /// True for parameter choices that leave every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        match self {
            Adjustment::Brightness { delta } => *delta == 0,
            Adjustment::ChannelOffset {
                red,
                green,
                blue,
                alpha,
            } => *red == 0 && *green == 0 && *blue == 0 && *alpha == 0,
        }
    }
}

/// Apply a single adjustment to the raster, in place.
///
/// Adjustments never fail; out-of-range parameters degrade to the identity
/// per the individual transform contracts.
pub fn apply(raster: &mut Raster, adjustment: &Adjustment) {
    match adjustment {
        Adjustment::Brightness { delta } => brightness::shift_brightness(raster, *delta),
        Adjustment::ChannelOffset {
            red,
            green,
            blue,
            alpha,
        } => channel_offset::offset_channels(raster, *red, *green, *blue, *alpha),
    }
}

pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
