// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hue math shared by the HSL, HSB and HWB notations.

use crate::{RgbValue, round_half_up};

/// The channel that holds the max value, which picks the hue sector formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DominantChannel {
    Red,
    Green,
    Blue,
}

impl DominantChannel {
    /// When two (or three) channels tie for the max, the first of red, green, blue wins.
    /// So `#ffff00` is red dominant and `#00ffff` is green dominant.
    #[must_use]
    pub fn of(rgb: RgbValue) -> Self {
        let max = rgb.max_channel();
        if rgb.red == max {
            DominantChannel::Red
        } else if rgb.green == max {
            DominantChannel::Green
        } else {
            DominantChannel::Blue
        }
    }
}

/// The hue as a sector value in `[0, 6)`, one unit per 60 degrees. `None` for
/// achromatic colors (all channels equal), which callers report as hue `0`.
#[must_use]
pub fn hue_sector(rgb: RgbValue) -> Option<f64> {
    if rgb.max_channel() == rgb.min_channel() {
        return None;
    }

    let norm = rgb.normalized();
    let max = f64::from(rgb.max_channel()) / 255.0;
    let min = f64::from(rgb.min_channel()) / 255.0;
    let delta = max - min;

    let sector = match DominantChannel::of(rgb) {
        DominantChannel::Red => {
            let wrap = if norm.green < norm.blue { 6.0 } else { 0.0 };
            (norm.green - norm.blue) / delta + wrap
        }
        DominantChannel::Green => (norm.blue - norm.red) / delta + 2.0,
        DominantChannel::Blue => (norm.red - norm.green) / delta + 4.0,
    };

    Some(sector)
}

/// Rounds hue degrees into `[0, 360)`. A sector value just under 6 can round up to 360,
/// which is the same angle as 0.
#[must_use]
pub fn round_hue_degrees(degrees: f64) -> u32 { round_half_up(degrees) % 360 }
