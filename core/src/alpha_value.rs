// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{ConvertError, ConvertResult};

/// Opacity in `[0, 1]`, used by the `RGBA` and `HEX8` notations. Defaults to `1`
/// (fully opaque).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct AlphaValue(f64);

impl Default for AlphaValue {
    fn default() -> Self { Self(1.0) }
}

impl AlphaValue {
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidAlphaInput`] if `value` is not a finite number in
    /// `[0, 1]`.
    pub fn try_new(value: f64) -> ConvertResult<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConvertError::invalid_alpha(value.to_string()))
        }
    }

    #[must_use]
    pub fn value(self) -> f64 { self.0 }

    /// Alpha as a byte, `round(alpha * 255)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_byte(self) -> u8 {
        // In range [0, 255] since the value is in [0, 1].
        (self.0 * 255.0).round() as u8
    }
}

impl Display for AlphaValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

/// Parses alpha text typed by a user. Blank (or whitespace only) text means `1`.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidAlphaInput`] if the text is not a number in `[0, 1]`.
pub fn parse_alpha_input(input: &str) -> ConvertResult<AlphaValue> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(AlphaValue::default());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(|value| AlphaValue::try_new(value).ok())
        .ok_or_else(|| ConvertError::invalid_alpha(input))
}
