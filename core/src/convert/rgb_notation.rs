// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The notations that carry the channel bytes directly: `rgb()`, `rgba()` and 8 digit
//! hex. Also the reverse trip from `rgb()` text back to hex.

use nom::{IResult,
          Parser,
          bytes::complete::tag,
          character::complete::{space0, u8 as parse_u8},
          combinator::all_consuming,
          sequence::delimited};

use crate::{AlphaValue, ConvertError, ConvertResult, RgbValue, try_parse_hex_color};

/// `rgb(R, G, B)`.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidHexInput`] if `hex` is not a 6 digit hex color.
pub fn to_rgb(hex: &str) -> ConvertResult<String> {
    let color = try_parse_hex_color(hex)?;
    Ok(color.rgb().to_string())
}

/// `rgba(R, G, B, alpha)`. The alpha is printed as given, in plain decimal notation even
/// when it is tiny (`0.0000001`, never `1e-7`).
///
/// # Errors
///
/// Returns [`ConvertError::InvalidHexInput`] if `hex` is not a 6 digit hex color.
pub fn to_rgba(hex: &str, alpha: AlphaValue) -> ConvertResult<String> {
    let RgbValue { red, green, blue } = try_parse_hex_color(hex)?.rgb();
    Ok(format!("rgba({red}, {green}, {blue}, {alpha})"))
}

/// `#RRGGBBAA`: the 6 digits as typed, followed by `round(alpha * 255)` as 2 lowercase
/// hex digits.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidHexInput`] if `hex` is not a 6 digit hex color.
pub fn to_hex8(hex: &str, alpha: AlphaValue) -> ConvertResult<String> {
    let color = try_parse_hex_color(hex)?;
    Ok(format!("#{}{:02x}", color.digits(), alpha.as_byte()))
}

/// Reverse of [`to_rgb`]: `rgb(R, G, B)` to lowercase `#rrggbb`. Whitespace around the
/// numbers is optional.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidHexInput`] if `rgb_text` is not in the `rgb()`
/// notation, or a channel is out of `[0, 255]`.
pub fn to_hex(rgb_text: &str) -> ConvertResult<String> {
    match all_consuming(parse_rgb_notation).parse(rgb_text) {
        Ok((_, rgb)) => Ok(rgb.to_hex_string()),
        Err(_) => Err(ConvertError::invalid_hex(rgb_text)),
    }
}

/// Parses `rgb(R, G, B)` into an [`RgbValue`].
///
/// # Errors
///
/// Returns a [`nom`] error if the input does not start with the `rgb()` notation.
pub fn parse_rgb_notation(input: &str) -> IResult<&str, RgbValue> {
    let channel = || delimited(space0, parse_u8, space0);
    let (input, _) = tag("rgb(").parse(input)?;
    let (input, (red, _, green, _, blue)) =
        (channel(), tag(","), channel(), tag(","), channel()).parse(input)?;
    let (input, _) = tag(")").parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn alpha(value: f64) -> AlphaValue { AlphaValue::try_new(value).unwrap() }

    #[test_case("#ff0000", "rgb(255, 0, 0)")]
    #[test_case("336699", "rgb(51, 102, 153)")]
    #[test_case("#FFFFFF", "rgb(255, 255, 255)")]
    fn test_to_rgb(hex: &str, expected: &str) {
        assert_eq!(to_rgb(hex).unwrap(), expected);
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(to_rgba("#336699", alpha(0.5)).unwrap(), "rgba(51, 102, 153, 0.5)");
        assert_eq!(to_rgba("#336699", AlphaValue::default()).unwrap(), "rgba(51, 102, 153, 1)");
        assert_eq!(to_rgba("#336699", alpha(0.0)).unwrap(), "rgba(51, 102, 153, 0)");
    }

    #[test]
    fn test_to_rgba_tiny_alpha_is_not_exponential() {
        assert_eq!(
            to_rgba("#336699", alpha(1e-7)).unwrap(),
            "rgba(51, 102, 153, 0.0000001)"
        );
    }

    #[test_case("#336699", 0.5, "#33669980")]
    #[test_case("#336699", 1.0, "#336699ff")]
    #[test_case("#336699", 0.0, "#33669900")]
    #[test_case("AbCdEf", 0.02, "#AbCdEf05")]
    fn test_to_hex8(hex: &str, value: f64, expected: &str) {
        assert_eq!(to_hex8(hex, alpha(value)).unwrap(), expected);
    }

    #[test_case("rgb(255, 0, 0)", "#ff0000")]
    #[test_case("rgb(51,102,153)", "#336699")]
    #[test_case("rgb( 0 , 0 , 0 )", "#000000")]
    fn test_to_hex(input: &str, expected: &str) {
        assert_eq!(to_hex(input).unwrap(), expected);
    }

    #[test_case("rgb(256, 0, 0)")]
    #[test_case("rgb(1, 2)")]
    #[test_case("rgba(1, 2, 3, 1)")]
    #[test_case("rgb(1, 2, 3) ")]
    fn test_to_hex_rejects(input: &str) {
        assert_eq!(to_hex(input), Err(ConvertError::invalid_hex(input)));
    }

    #[test]
    fn test_invalid_input() {
        assert!(to_rgb("#fff").is_err());
        assert!(to_rgba("#fff", AlphaValue::default()).is_err());
        assert!(to_hex8("#ff000080", AlphaValue::default()).is_err());
    }
}
