// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AlphaValue, ColorFormat, ConvertResult, to_cmyk, to_hex8, to_hsb, to_hsl,
            to_hwb, to_rgb, to_rgba};

/// The single entry point for callers: convert `hex` (6 hex digits, optional `#`, any
/// case) into `format`.
///
/// `alpha` is only read by [`ColorFormat::Rgba`] and [`ColorFormat::Hex8`], and
/// defaults to `1` when it is `None`. The other formats ignore it.
///
/// # Errors
///
/// Returns [`crate::ConvertError::InvalidHexInput`] if `hex` is not a 6 digit hex color.
/// The input is validated before anything else, for every format.
pub fn convert(
    hex: &str,
    format: ColorFormat,
    alpha: Option<AlphaValue>,
) -> ConvertResult<String> {
    let alpha = alpha.unwrap_or_default();
    match format {
        ColorFormat::Rgb => to_rgb(hex),
        ColorFormat::Rgba => to_rgba(hex, alpha),
        ColorFormat::Hsl => to_hsl(hex),
        ColorFormat::Hsb => to_hsb(hex),
        ColorFormat::Hwb => to_hwb(hex),
        ColorFormat::Cmyk => to_cmyk(hex),
        ColorFormat::Hex8 => to_hex8(hex, alpha),
    }
}
