// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use hexconv_core::{AlphaValue, ColorFormat, ConvertError, Hsb, Hsl, Hwb, RgbValue,
                   convert, to_cmyk, to_hex, to_hex8, to_hsb, to_hsl, to_hwb, to_rgb};
use pretty_assertions::assert_eq;
use test_case::test_case;

/// A spread of colors: every channel steps through 0, 17, 34, ... 255, plus some
/// off-grid values.
fn sample_colors() -> Vec<RgbValue> {
    let steps = (0..=255_u8).step_by(17).chain([1, 127, 128, 254]);
    let steps = steps.collect::<Vec<_>>();
    let mut acc = vec![];
    for &red in &steps {
        for &green in &steps {
            for &blue in &steps {
                acc.push(RgbValue::from_u8(red, green, blue));
            }
        }
    }
    acc
}

#[test]
fn rgb_round_trips_through_hex() {
    for rgb in sample_colors() {
        let hex = rgb.to_hex_string();
        let rgb_text = to_rgb(&hex).unwrap();
        assert_eq!(to_hex(&rgb_text).unwrap(), hex);

        let upper = hex.to_uppercase();
        assert_eq!(to_hex(&to_rgb(&upper).unwrap()).unwrap(), hex);
    }
}

#[test]
fn hue_and_percentages_stay_in_range() {
    for rgb in sample_colors() {
        let hsl = Hsl::from(rgb);
        assert!(hsl.hue < 360, "{rgb:?} -> {hsl:?}");
        assert!(hsl.saturation <= 100 && hsl.lightness <= 100, "{rgb:?} -> {hsl:?}");

        let hsb = Hsb::from(rgb);
        assert!(hsb.hue < 360, "{rgb:?} -> {hsb:?}");
        assert!(hsb.saturation <= 100 && hsb.brightness <= 100, "{rgb:?} -> {hsb:?}");

        let hwb = Hwb::from(rgb);
        assert!(hwb.hue < 360, "{rgb:?} -> {hwb:?}");
        assert!(hwb.whiteness <= 100 && hwb.blackness <= 100, "{rgb:?} -> {hwb:?}");
    }
}

#[test_case("#000000")]
#[test_case("#808080")]
#[test_case("#ffffff")]
fn achromatic_has_no_hue_or_saturation(hex: &str) {
    let hsl = to_hsl(hex).unwrap();
    assert!(hsl.starts_with("hsl(0, 0%, "), "{hsl}");
    let hsb = to_hsb(hex).unwrap();
    assert!(hsb.starts_with("hsb(0, 0%, "), "{hsb}");
}

#[test]
fn known_values() {
    assert_eq!(to_cmyk("#000000").unwrap(), "cmyk(0.0%, 0.0%, 0.0%, 100.0%)");
    assert_eq!(to_cmyk("#ffffff").unwrap(), "cmyk(0.0%, 0.0%, 0.0%, 0.0%)");
    assert_eq!(to_rgb("#ff0000").unwrap(), "rgb(255, 0, 0)");
    assert_eq!(to_hsl("#ff0000").unwrap(), "hsl(0, 100%, 50%)");
    assert_eq!(to_hsb("#ff0000").unwrap(), "hsb(0, 100%, 100%)");
    assert_eq!(to_hwb("#ff0000").unwrap(), "hwb(0, 0%, 0%)");

    let alpha = AlphaValue::try_new(0.5).unwrap();
    assert_eq!(to_hex8("#336699", alpha).unwrap(), "#33669980");
}

/// Components that land exactly on a half tenth round up, never to even.
#[test_case("#000750", "cmyk(100.0%, 91.3%, 0.0%, 68.6%)")]
#[test_case("#000f50", "cmyk(100.0%, 81.3%, 0.0%, 68.6%)")]
#[test_case("#188000", "cmyk(81.3%, 0.0%, 100.0%, 49.8%)")]
#[test_case("#700031", "cmyk(0.0%, 100.0%, 56.3%, 56.1%)")]
#[test_case("#a00e00", "cmyk(0.0%, 91.3%, 100.0%, 37.3%)")]
#[test_case("#2f0050", "cmyk(41.3%, 100.0%, 0.0%, 68.6%)")]
fn cmyk_ties_round_up(hex: &str, expected: &str) {
    assert_eq!(to_cmyk(hex).unwrap(), expected);
    assert_eq!(convert(hex, ColorFormat::Cmyk, None).unwrap(), expected);
}

#[test_case("#fff")]
#[test_case("#ggg123")]
#[test_case("1234567")]
#[test_case("")]
#[test_case("#12345g")]
#[test_case("#1234567")]
fn malformed_input_is_invalid_for_every_format(hex: &str) {
    for format in ColorFormat::all() {
        assert_eq!(
            convert(hex, format, None),
            Err(ConvertError::invalid_hex(hex)),
            "{format}"
        );
    }
}

#[test_case("ff0000")]
#[test_case("336699")]
#[test_case("AbCdEf")]
fn leading_hash_is_optional(digits: &str) {
    let with_hash = format!("#{digits}");
    let alpha = AlphaValue::try_new(0.25).ok();
    for format in ColorFormat::all() {
        assert_eq!(
            convert(digits, format, alpha).unwrap(),
            convert(&with_hash, format, alpha).unwrap(),
            "{format}"
        );
    }
}
