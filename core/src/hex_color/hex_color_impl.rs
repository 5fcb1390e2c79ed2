// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use crate::{ConvertError, RgbValue, try_parse_hex_color};

/// A validated 6 digit hex color. Holds the decoded channels and the 6 digit characters
/// exactly as they were typed (without the `#`), so that notations which echo the input
/// (eg: `HEX8`) keep the caller's letter case.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct HexColor {
    rgb: RgbValue,
    digits: String,
}

impl HexColor {
    /// Only the parser builds these, so `digits` is always 6 ASCII hex digits that
    /// decode to `rgb`.
    pub(crate) fn new(rgb: RgbValue, digits: String) -> Self { Self { rgb, digits } }

    #[must_use]
    pub fn rgb(&self) -> RgbValue { self.rgb }

    #[must_use]
    pub fn digits(&self) -> &str { &self.digits }
}

impl From<RgbValue> for HexColor {
    fn from(rgb: RgbValue) -> Self {
        let digits = format!("{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue);
        Self { rgb, digits }
    }
}

impl FromStr for HexColor {
    type Err = ConvertError;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        try_parse_hex_color(input)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ConvertError;

    fn try_from(input: &str) -> std::result::Result<Self, Self::Error> {
        try_parse_hex_color(input)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "#{}", self.digits) }
}
