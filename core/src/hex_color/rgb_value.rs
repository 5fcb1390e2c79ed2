// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit) color representation, 8 bits per channel.

use std::fmt::{Display, Formatter, Result};

/// Represents a color in RGB (24-bit) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Floating point view of an [`RgbValue`], each channel in `[0, 1]`.
#[derive(Clone, PartialEq, Copy, Debug)]
pub struct NormalizedRgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Each channel divided by 255.
    #[must_use]
    pub fn normalized(&self) -> NormalizedRgb {
        NormalizedRgb {
            red: f64::from(self.red) / 255.0,
            green: f64::from(self.green) / 255.0,
            blue: f64::from(self.blue) / 255.0,
        }
    }

    #[must_use]
    pub fn max_channel(&self) -> u8 { self.red.max(self.green).max(self.blue) }

    #[must_use]
    pub fn min_channel(&self) -> u8 { self.red.min(self.green).min(self.blue) }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
