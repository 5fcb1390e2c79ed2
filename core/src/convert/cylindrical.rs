// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The hue based notations: HSL, HSB (aka HSV) and HWB. All three share
//! [`hue_sector`] and differ in how they describe the remaining two components.

use std::fmt::{Display, Formatter, Result};

use crate::{ConvertResult, RgbValue, hue_sector, round_hue_degrees, round_percent,
            try_parse_hex_color};

/// Hue in degrees, saturation and lightness in whole percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u32,
    pub saturation: u32,
    pub lightness: u32,
}

/// Hue in degrees, saturation and brightness in whole percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsb {
    pub hue: u32,
    pub saturation: u32,
    pub brightness: u32,
}

/// Hue in degrees, whiteness and blackness in whole percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hwb {
    pub hue: u32,
    pub whiteness: u32,
    pub blackness: u32,
}

/// `(max, min)` of the normalized channels.
fn normalized_extremes(rgb: RgbValue) -> (f64, f64) {
    (
        f64::from(rgb.max_channel()) / 255.0,
        f64::from(rgb.min_channel()) / 255.0,
    )
}

impl From<RgbValue> for Hsl {
    fn from(rgb: RgbValue) -> Self {
        let (max, min) = normalized_extremes(rgb);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = match hue_sector(rgb) {
            None => (0.0, 0.0),
            Some(sector) => {
                let saturation = if lightness > 0.5 {
                    delta / (2.0 - max - min)
                } else {
                    delta / (max + min)
                };
                (sector / 6.0, saturation)
            }
        };

        Self {
            hue: round_hue_degrees(hue * 360.0),
            saturation: round_percent(saturation),
            lightness: round_percent(lightness),
        }
    }
}

impl From<RgbValue> for Hsb {
    fn from(rgb: RgbValue) -> Self {
        let (max, min) = normalized_extremes(rgb);
        let delta = max - min;
        let saturation = if rgb.max_channel() == 0 { 0.0 } else { delta / max };
        let hue = hue_sector(rgb).map_or(0.0, |sector| sector * 60.0);

        Self {
            hue: round_hue_degrees(hue),
            saturation: round_percent(saturation),
            brightness: round_percent(max),
        }
    }
}

impl From<RgbValue> for Hwb {
    fn from(rgb: RgbValue) -> Self {
        let (max, min) = normalized_extremes(rgb);
        let hue = hue_sector(rgb).map_or(0.0, |sector| sector * 60.0);

        Self {
            hue: round_hue_degrees(hue),
            whiteness: round_percent(min),
            blackness: round_percent(1.0 - max),
        }
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl Display for Hsb {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "hsb({}, {}%, {}%)", self.hue, self.saturation, self.brightness)
    }
}

impl Display for Hwb {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "hwb({}, {}%, {}%)", self.hue, self.whiteness, self.blackness)
    }
}

/// `hsl(H, S%, L%)`.
///
/// # Errors
///
/// Returns [`crate::ConvertError::InvalidHexInput`] if `hex` is not a 6 digit hex color.
pub fn to_hsl(hex: &str) -> ConvertResult<String> {
    let color = try_parse_hex_color(hex)?;
    Ok(Hsl::from(color.rgb()).to_string())
}

/// `hsb(H, S%, B%)`.
///
/// # Errors
///
/// Returns [`crate::ConvertError::InvalidHexInput`] if `hex` is not a 6 digit hex color.
pub fn to_hsb(hex: &str) -> ConvertResult<String> {
    let color = try_parse_hex_color(hex)?;
    Ok(Hsb::from(color.rgb()).to_string())
}

/// `hwb(H, W%, B%)`.
///
/// # Errors
///
/// Returns [`crate::ConvertError::InvalidHexInput`] if `hex` is not a 6 digit hex color.
pub fn to_hwb(hex: &str) -> ConvertResult<String> {
    let color = try_parse_hex_color(hex)?;
    Ok(Hwb::from(color.rgb()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertError;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("#ff0000", "hsl(0, 100%, 50%)")]
    #[test_case("#00ff00", "hsl(120, 100%, 50%)")]
    #[test_case("#0000ff", "hsl(240, 100%, 50%)")]
    #[test_case("#336699", "hsl(210, 50%, 40%)")]
    #[test_case("#ffffff", "hsl(0, 0%, 100%)")]
    #[test_case("#000000", "hsl(0, 0%, 0%)")]
    #[test_case("#808080", "hsl(0, 0%, 50%)")]
    #[test_case("#ffcc00", "hsl(48, 100%, 50%)")]
    fn test_to_hsl(hex: &str, expected: &str) {
        assert_eq!(to_hsl(hex).unwrap(), expected);
    }

    #[test_case("#ff0000", "hsb(0, 100%, 100%)")]
    #[test_case("#336699", "hsb(210, 67%, 60%)")]
    #[test_case("#000000", "hsb(0, 0%, 0%)")]
    #[test_case("#808080", "hsb(0, 0%, 50%)")]
    #[test_case("#ffffff", "hsb(0, 0%, 100%)")]
    fn test_to_hsb(hex: &str, expected: &str) {
        assert_eq!(to_hsb(hex).unwrap(), expected);
    }

    #[test_case("#ff0000", "hwb(0, 0%, 0%)")]
    #[test_case("#336699", "hwb(210, 20%, 40%)")]
    #[test_case("#000000", "hwb(0, 0%, 100%)")]
    #[test_case("#ffffff", "hwb(0, 100%, 0%)")]
    fn test_to_hwb(hex: &str, expected: &str) {
        assert_eq!(to_hwb(hex).unwrap(), expected);
    }

    /// Two channels tied for the max resolve to the red sector before green, and the
    /// green sector before blue. Kept as is, the results are still the expected hues.
    #[test_case("#ffff00", 60)]
    #[test_case("#00ffff", 180)]
    #[test_case("#ff00ff", 300)]
    fn test_tie_break_sectors(hex: &str, hue: u32) {
        let rgb = try_parse_hex_color(hex).unwrap().rgb();
        assert_eq!(Hsl::from(rgb).hue, hue);
        assert_eq!(Hsb::from(rgb).hue, hue);
        assert_eq!(Hwb::from(rgb).hue, hue);
    }

    #[test]
    fn test_hue_just_below_360_wraps_to_0() {
        // Red with a trace of blue lands at 359.76 degrees before rounding.
        assert_eq!(to_hsb("#ff0001").unwrap(), "hsb(0, 100%, 100%)");
        assert_eq!(to_hwb("#ff0001").unwrap(), "hwb(0, 0%, 0%)");
        assert_eq!(to_hsl("#ff0001").unwrap(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(to_hsl("#fff"), Err(ConvertError::invalid_hex("#fff")));
        assert_eq!(to_hsb("zzzzzz"), Err(ConvertError::invalid_hex("zzzzzz")));
        assert_eq!(to_hwb("1234567"), Err(ConvertError::invalid_hex("1234567")));
    }
}
