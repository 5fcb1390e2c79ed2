// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use hexconv_core::{AlphaValue, ColorFormat, HexMatch, TextPosition, convert, find_hex_at,
                   parse_alpha_input, replace_hex_match, try_parse_hex_color};

use crate::{CmdrError, CmdrResult, ConverterConfig, Prompt, ui_str};

/// Alpha for `format`, taken from `alpha_text` when given. Otherwise formats that need
/// alpha ask for it, and a closed or blank answer means `1`. Formats that don't need
/// alpha get `None` and nothing is asked.
///
/// # Errors
///
/// Returns [`CmdrError::Convert`] if the alpha text is not a number in `[0, 1]`.
pub async fn resolve_alpha(
    format: ColorFormat,
    alpha_text: Option<&str>,
    prompt: &mut impl Prompt,
) -> CmdrResult<Option<AlphaValue>> {
    if !format.needs_alpha() {
        return Ok(None);
    }
    let answer = match alpha_text {
        Some(it) => it.to_string(),
        None => prompt.ask(ui_str::alpha_prompt(format)).await?.unwrap_or_default(),
    };
    Ok(Some(parse_alpha_input(&answer)?))
}

/// Convert one hex color code.
///
/// # Errors
///
/// Returns [`CmdrError::FormatNotEnabled`], or [`CmdrError::Convert`] for bad hex or
/// alpha input.
pub async fn convert_one(
    hex: &str,
    format: ColorFormat,
    alpha_text: Option<&str>,
    config: &ConverterConfig,
    prompt: &mut impl Prompt,
) -> CmdrResult<String> {
    config.ensure_enabled(format)?;
    try_parse_hex_color(hex)?;
    let alpha = resolve_alpha(format, alpha_text, prompt).await?;
    let converted = convert(hex, format, alpha)?;
    tracing::debug!(message = "Converted", hex, %format, %converted);
    Ok(converted)
}

/// Convert one hex color code into every enabled format, in the order they are listed in
/// the config. Missing alpha is `1`; nothing is asked.
///
/// # Errors
///
/// Returns [`CmdrError::Convert`] for bad hex or alpha input.
pub fn convert_all(
    hex: &str,
    alpha_text: Option<&str>,
    config: &ConverterConfig,
) -> CmdrResult<Vec<(ColorFormat, String)>> {
    let alpha = parse_alpha_input(alpha_text.unwrap_or_default())?;
    config
        .enabled_formats
        .iter()
        .map(|&format| -> CmdrResult<(ColorFormat, String)> {
            Ok((format, convert(hex, format, Some(alpha))?))
        })
        .collect()
}

/// What to convert at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtCursorRequest {
    /// 0 based.
    pub position: TextPosition,
    pub format: ColorFormat,
    pub alpha_text: Option<String>,
    /// Replace without asking, even if the config says to ask.
    pub skip_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtCursorOutcome {
    Replaced {
        hex_match: HexMatch,
        converted: String,
        document: String,
    },
    Kept {
        hex_match: HexMatch,
        converted: String,
    },
}

/// The whole "convert the color under the cursor" flow on an in memory document:
/// locate, validate, ask for alpha if needed, convert, ask to replace, and splice.
///
/// # Errors
///
/// - [`CmdrError::FormatNotEnabled`] if the format is switched off in the config.
/// - [`CmdrError::NoHexAtCursor`] if there is no candidate at the cursor.
/// - [`CmdrError::NotAValidHexColor`] if the candidate isn't a 6 digit code.
/// - [`CmdrError::Convert`] for bad alpha input.
/// - [`CmdrError::ReadPrompt`] if a question can't be asked.
pub async fn convert_at_cursor(
    document: &str,
    request: &AtCursorRequest,
    config: &ConverterConfig,
    prompt: &mut impl Prompt,
) -> CmdrResult<AtCursorOutcome> {
    config.ensure_enabled(request.format)?;

    let position = request.position;
    let hex_match = find_hex_at(document, position).ok_or(CmdrError::NoHexAtCursor {
        line: position.line + 1,
        column: position.column + 1,
    })?;
    tracing::debug!(message = "Found hex at cursor", hex_match = ?hex_match);

    if try_parse_hex_color(&hex_match.text).is_err() {
        return Err(CmdrError::NotAValidHexColor {
            found: hex_match.text,
        });
    }

    let alpha = resolve_alpha(request.format, request.alpha_text.as_deref(), prompt).await?;
    let converted = convert(&hex_match.text, request.format, alpha)?;

    let confirmed = request.skip_confirm
        || !config.confirm_replace
        || prompt.confirm(&ui_str::replace_prompt(&converted)).await?;

    if !confirmed {
        tracing::warn!(message = "Replacement declined", %converted);
        return Ok(AtCursorOutcome::Kept {
            hex_match,
            converted,
        });
    }

    let document =
        replace_hex_match(document, &hex_match, &converted).ok_or(CmdrError::StaleDocument)?;
    Ok(AtCursorOutcome::Replaced {
        hex_match,
        converted,
        document,
    })
}
