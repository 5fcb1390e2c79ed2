// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Round a non-negative value to the nearest integer, halves going up.
///
/// Only used on the results of the color math, which are never negative and never
/// larger than 600 (a hue sector value of `6 * 60` before wrapping, times 100 for
/// percentages of values in `[0, 1]`). Out of range inputs saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_half_up(value: f64) -> u32 { value.round().max(0.0) as u32 }

/// `value * 100`, rounded.
#[must_use]
pub fn round_percent(value: f64) -> u32 { round_half_up(value * 100.0) }

/// `value * 100` with exactly one decimal place, eg: `42.4`. See [`fixed_1`].
#[must_use]
pub fn fixed_1_percent(value: f64) -> String { fixed_1(value * 100.0) }

/// Non-negative `value` with exactly one decimal place, nearest tenth of the exact
/// binary value, halves going up (`91.25` is `91.3`).
///
/// `{:.1}` alone sends halves to even. An `f64` can only sit exactly halfway between two
/// tenths when it is an odd number of quarters (`x.25` or `x.75`), and `value * 4` is
/// exact, so those are the only values that need nudging.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn fixed_1(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if is_tie {
        format!("{:.1}", value + 0.05)
    } else {
        format!("{value:.1}")
    }
}
