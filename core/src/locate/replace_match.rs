// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HexMatch;

/// Byte offset of the char at `column`, or the line length for the column right after
/// the last char.
fn byte_offset_of_column(line: &str, column: usize) -> Option<usize> {
    line.char_indices()
        .map(|(byte_offset, _)| byte_offset)
        .chain(std::iter::once(line.len()))
        .nth(column)
}

/// Splice `replacement` over `hex_match` in `document`. Every other byte of the document
/// (including its line endings) is kept as is.
///
/// Returns `None` if `hex_match` does not describe the document, eg: the line is gone or
/// the text at its columns has changed since it was found.
#[must_use]
pub fn replace_hex_match(
    document: &str,
    hex_match: &HexMatch,
    replacement: &str,
) -> Option<String> {
    let lines = document.split('\n').collect::<Vec<_>>();
    let line = lines.get(hex_match.line)?;

    let start = byte_offset_of_column(line, hex_match.columns.start)?;
    let end = byte_offset_of_column(line, hex_match.columns.end)?;
    if line.get(start..end)? != hex_match.text {
        return None;
    }

    let new_line = format!("{}{replacement}{}", &line[..start], &line[end..]);
    let mut acc = lines;
    acc[hex_match.line] = &new_line;
    Some(acc.join("\n"))
}
