// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use hexconv_core::ColorFormat;

pub const NO_HEX_AT_CURSOR: &str = "No hex color code found at the cursor.";
pub const NOT_A_VALID_HEX: &str = "Not a valid hex color code.";
pub const CONVERSION_FAILED: &str = "Conversion failed.";

pub const YES: &str = "Yes";
pub const NO: &str = "No";

#[must_use]
pub fn readline_prompt(question: &str) -> String { format!("{question}: ") }

#[must_use]
pub fn alpha_prompt(format: ColorFormat) -> &'static str {
    match format {
        ColorFormat::Hex8 => "Enter alpha value (0-1)",
        _ => "Enter alpha value (0-1) or leave blank for 1",
    }
}

#[must_use]
pub fn replace_prompt(converted: &str) -> String {
    format!("Converted: {converted}. Replace the original value?")
}

#[must_use]
pub fn replaced_msg(original: &str, converted: &str) -> String {
    format!("Replaced {original} with {converted}")
}

#[must_use]
pub fn kept_msg(original: &str, converted: &str) -> String {
    format!("Kept {original} ({converted} was not applied)")
}

#[must_use]
pub fn format_line(format: ColorFormat, converted: &str) -> String {
    format!("{format}: {converted}")
}
