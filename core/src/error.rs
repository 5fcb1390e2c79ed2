// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Result type alias for every fallible operation in this crate.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// The ways a conversion request can be rejected. All of them are local validation
/// failures; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum ConvertError {
    #[error("🎨 Not a valid hex color code: '{input}'")]
    #[diagnostic(
        code(hexconv::invalid_hex_input),
        help("Expected exactly 6 hex digits, with an optional leading '#', eg: #336699")
    )]
    InvalidHexInput { input: String },

    #[error("🔍 Not a valid alpha value: '{input}'")]
    #[diagnostic(
        code(hexconv::invalid_alpha_input),
        help("Expected a number between 0 and 1, or nothing for 1")
    )]
    InvalidAlphaInput { input: String },
}

impl ConvertError {
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHexInput {
            input: input.into(),
        }
    }

    pub fn invalid_alpha(input: impl Into<String>) -> Self {
        Self::InvalidAlphaInput {
            input: input.into(),
        }
    }
}
