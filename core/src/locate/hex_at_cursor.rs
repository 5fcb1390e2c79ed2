// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Finds the hex color code candidate that a text cursor is touching.
//!
//! A candidate is any run matching `#?[0-9A-Fa-f]{3,8}`. Runs of 3 to 8 digits are all
//! found here, so that a caller can tell "nothing under the cursor" apart from
//! "something that looks like a hex color, but is not a 6 digit one".

use std::ops::Range;

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{opt, recognize}};

/// Shortest digit run that counts as a candidate.
pub const MIN_CANDIDATE_DIGITS: usize = 3;
/// Longest digit run in one candidate. Longer runs are split into several candidates.
pub const MAX_CANDIDATE_DIGITS: usize = 8;

/// 0 based line and column. Columns count [`char`]s, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TextPosition {
    pub line: usize,
    pub column: usize,
}

impl TextPosition {
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self { Self { line, column } }
}

/// A candidate found on `line`, spanning `columns` (end exclusive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexMatch {
    pub line: usize,
    pub columns: Range<usize>,
    pub text: String,
}

/// Parses one candidate from the start of the input.
///
/// # Errors
///
/// Returns a [`nom`] error if the input does not start with `#?[0-9A-Fa-f]{3,8}`.
pub fn parse_hex_candidate(input: &str) -> IResult<&str, &str> {
    recognize((
        opt(tag("#")),
        take_while_m_n(MIN_CANDIDATE_DIGITS, MAX_CANDIDATE_DIGITS, |it: char| {
            it.is_ascii_hexdigit()
        }),
    ))
    .parse(input)
}

/// Scan `position.line` from left to right for non overlapping candidates, and return
/// the first one with `start <= position.column <= end`. A cursor sitting just after
/// the last digit still touches the candidate.
///
/// Returns `None` if the line does not exist, or no candidate touches the cursor.
#[must_use]
pub fn find_hex_at(document: &str, position: TextPosition) -> Option<HexMatch> {
    let line = document.split('\n').nth(position.line)?;

    let mut byte_offset = 0;
    let mut column = 0;

    while byte_offset < line.len() {
        let rest = &line[byte_offset..];

        if let Ok((_, candidate)) = parse_hex_candidate(rest) {
            // Candidates are ASCII, so bytes and chars line up.
            let end = column + candidate.len();
            if column <= position.column && position.column <= end {
                return Some(HexMatch {
                    line: position.line,
                    columns: column..end,
                    text: candidate.to_string(),
                });
            }
            if column > position.column {
                return None;
            }
            byte_offset += candidate.len();
            column = end;
        } else {
            let ch = rest.chars().next()?;
            byte_offset += ch.len_utf8();
            column += 1;
        }
    }

    None
}
