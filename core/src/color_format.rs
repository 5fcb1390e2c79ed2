// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The target notations. The textual names (used by [`std::fmt::Display`],
/// [`std::str::FromStr`] and serde) are the upper case variant names: `RGB`, `RGBA`,
/// `HSL`, `HSB`, `HWB`, `CMYK`, `HEX8`. Parsing ignores ASCII case.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorFormat {
    Rgb,
    Rgba,
    Hsl,
    Hsb,
    Hwb,
    Cmyk,
    Hex8,
}

impl ColorFormat {
    /// Formats that encode transparency, and so take an [`crate::AlphaValue`].
    #[must_use]
    pub fn needs_alpha(self) -> bool { matches!(self, ColorFormat::Rgba | ColorFormat::Hex8) }

    /// Every variant, in declaration order.
    #[must_use]
    pub fn all() -> Vec<ColorFormat> { ColorFormat::iter().collect() }
}
