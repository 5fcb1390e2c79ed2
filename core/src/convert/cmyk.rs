// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{ConvertResult, RgbValue, fixed_1_percent, try_parse_hex_color};

/// Naive (not color managed) subtractive approximation of an [`RgbValue`]. Each
/// component is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

impl From<RgbValue> for Cmyk {
    fn from(rgb: RgbValue) -> Self {
        let norm = rgb.normalized();
        let key = 1.0 - f64::from(rgb.max_channel()) / 255.0;

        // Pure black makes this 0 / 0.
        let component = |channel: f64| {
            let it = (1.0 - channel - key) / (1.0 - key);
            if it.is_finite() { it } else { 0.0 }
        };

        Self {
            cyan: component(norm.red),
            magenta: component(norm.green),
            yellow: component(norm.blue),
            key,
        }
    }
}

impl Display for Cmyk {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            fixed_1_percent(self.cyan),
            fixed_1_percent(self.magenta),
            fixed_1_percent(self.yellow),
            fixed_1_percent(self.key)
        )
    }
}

/// `cmyk(C%, M%, Y%, K%)`, each with one decimal place.
///
/// # Errors
///
/// Returns [`crate::ConvertError::InvalidHexInput`] if `hex` is not a 6 digit hex color.
pub fn to_cmyk(hex: &str) -> ConvertResult<String> {
    let color = try_parse_hex_color(hex)?;
    Ok(Cmyk::from(color.rgb()).to_string())
}
