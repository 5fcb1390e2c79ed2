// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`HexColor`]
//! struct. The hex color string must be in the format `#RRGGBB` or `RRGGBB`, eg:
//! `#FF0000` or `ff0000` for red. Shorthand (`#F00`) and alpha (`#FF000080`) forms are
//! not accepted.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, consumed, map_res, opt}};

use crate::{ConvertError, ConvertResult, HexColor, RgbValue};

/// Parse function that generates a [`HexColor`] from the start of the input. Whatever
/// follows the 6 hex digits is returned as the remainder.
///
/// # Errors
///
/// Returns a [`nom`] error if the input does not start with an optional `#` followed by
/// 6 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, HexColor> {
    let (input, _) = opt(tag("#")).parse(input)?;
    let (input, (digits, (red, green, blue))) =
        consumed((helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg))
            .parse(input)?;
    Ok((
        input,
        HexColor::new(RgbValue { red, green, blue }, digits.to_string()),
    ))
}

/// Strict form of [`parse_hex_color`]: the whole input must be consumed, which is the
/// `^#?[0-9A-Fa-f]{6}$` contract every conversion checks first.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidHexInput`] if the input has any other shape.
pub fn try_parse_hex_color(input: &str) -> ConvertResult<HexColor> {
    match all_consuming(parse_hex_color).parse(input) {
        Ok((_, hex_color)) => Ok(hex_color),
        Err(_) => Err(ConvertError::invalid_hex(input)),
    }
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true` items
    /// will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }
}
