// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The format detector. Classifies a trimmed string into exactly one of the four
//! notations, or fails.
//!
//! Detection walks [`RULES`] in order and the FIRST rule whose grammar matches wins.
//! That rule's validation result is final, even if it is an error:
//!
//! | #  | Rule               | Example          |
//! | :- | :----------------- | :--------------- |
//! | 1  | Literal name       | `Cornflower Blue`|
//! | 2  | Hex w/out marker   | `6495ed`         |
//! | 3  | Hex w/ marker      | `#6495ED`        |
//! | 4  | RGB triple         | `100, 149, 237`  |
//! | 5  | HSL triple         | `218, 79%, 0.66` |
//!
//! If nothing matches the result is [`InvalidColorKind::UnrecognizedFormat`].

// Attach.
pub mod grammar;
pub mod rules;

use crate::{ColorError, ColorFormat, ColorValue, HslTriple, InlineString,
            InvalidColorKind, KnownColorName, RgbTriple};

/// A detector rule. See [`rules`].
pub type Rule = fn(&str) -> rules::RuleResult;

/// Ordered, first match wins.
pub const RULES: &[(ColorFormat, Rule)] = &[
    (ColorFormat::Literal, rules::literal_name),
    (ColorFormat::Hex, rules::hex_without_marker),
    (ColorFormat::Hex, rules::hex_with_marker),
    (ColorFormat::Rgb, rules::rgb_triple),
    (ColorFormat::Hsl, rules::hsl_triple),
];

/// The result of a successful detection. The payload keeps what the user typed so the
/// converter can echo it.
#[derive(Clone, PartialEq, Debug)]
pub enum DetectedFormat {
    Literal(&'static KnownColorName),
    Hex(HexDigits),
    Rgb(RgbTriple),
    Hsl(HslTriple),
}

impl DetectedFormat {
    #[must_use]
    pub fn format(&self) -> ColorFormat {
        match self {
            DetectedFormat::Literal(_) => ColorFormat::Literal,
            DetectedFormat::Hex(_) => ColorFormat::Hex,
            DetectedFormat::Rgb(_) => ColorFormat::Rgb,
            DetectedFormat::Hsl(_) => ColorFormat::Hsl,
        }
    }

    /// The 8 bit RGB value of the detected color, eg: for a swatch. Matches the hex.
    #[must_use]
    pub fn rgb(&self) -> RgbTriple {
        match self {
            DetectedFormat::Literal(known) => known.rgb,
            DetectedFormat::Hex(hex_digits) => hex_digits.rgb,
            DetectedFormat::Rgb(rgb) => *rgb,
            DetectedFormat::Hsl(hsl) => ColorValue::from_hsl_triple(hsl).hex_rgb,
        }
    }
}

/// 6 hex digits (uppercased, w/out the `#` marker) and the RGB value they decode to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HexDigits {
    pub digits: InlineString,
    pub rgb: RgbTriple,
}

impl HexDigits {
    #[must_use]
    pub fn new(input: &str, rgb: RgbTriple) -> Self {
        let digits = input
            .trim_start_matches(grammar::HEX_MARKER)
            .chars()
            .map(|it| it.to_ascii_uppercase())
            .collect();
        Self { digits, rgb }
    }

    /// Eg: `#6495ED`.
    #[must_use]
    pub fn to_hex(&self) -> InlineString {
        let mut acc = InlineString::new();
        acc.push(grammar::HEX_MARKER);
        acc.push_str(&self.digits);
        acc
    }
}

/// Classify `input` (already trimmed by the caller).
///
/// # Errors
///
/// - [`ColorError::InvalidColor`] when no rule matches, or when a rule matches but a
///   value is out of range or the component count is wrong.
/// - [`ColorError::NumericParse`] when a rule matches but a component token isn't a
///   number.
pub fn detect(input: &str) -> Result<DetectedFormat, ColorError> {
    for (format, rule) in RULES {
        let Some(result) = rule(input) else {
            continue;
        };
        // % is Display, ? is Debug.
        match &result {
            Ok(detected) => tracing::debug!(
                message = "Detected color format",
                format = %format,
                detected = ?detected
            ),
            Err(error) => tracing::debug!(
                message = "Color format matched w/ invalid values",
                format = %format,
                error = %error
            ),
        }
        return result;
    }

    Err(ColorError::new_invalid_color(
        input,
        InvalidColorKind::UnrecognizedFormat,
    ))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{ColorComponent, HslComponent, OutOfRange, assert_eq2, lookup_name};

    #[test_case("Cornflower Blue", ColorFormat::Literal)]
    #[test_case("6495ed", ColorFormat::Hex)]
    #[test_case("#6495ED", ColorFormat::Hex)]
    #[test_case("100, 149, 237", ColorFormat::Rgb)]
    #[test_case("100 149 237", ColorFormat::Rgb)]
    #[test_case("218, 79%, 66%", ColorFormat::Hsl)]
    #[test_case("218 0.79 0.66", ColorFormat::Hsl)]
    fn test_detect_format(input: &str, expected: ColorFormat) {
        assert_eq2!(detect(input).unwrap().format(), expected);
    }

    #[test]
    fn test_detect_payloads() {
        assert_eq2!(
            detect("red").unwrap(),
            DetectedFormat::Literal(lookup_name("Red").unwrap())
        );
        assert_eq2!(
            detect("#6495ed").unwrap(),
            DetectedFormat::Hex(HexDigits {
                digits: "6495ED".into(),
                rgb: RgbTriple::from_u8(100, 149, 237)
            })
        );
        assert_eq2!(
            detect("255,10,3").unwrap(),
            DetectedFormat::Rgb(RgbTriple::from_u8(255, 10, 3))
        );
        assert_eq2!(
            detect("120, 0.5, 50%").unwrap(),
            DetectedFormat::Hsl(HslTriple::new(
                120,
                HslComponent::Fraction(0.5),
                HslComponent::Percent(50)
            ))
        );
    }

    #[test_case("cornflowerblue", (100, 149, 237))]
    #[test_case("#6495ed", (100, 149, 237))]
    #[test_case("255 10 3", (255, 10, 3))]
    #[test_case("120, 100%, 50%", (0, 255, 0))]
    #[test_case("0, 0%, 50%", (128, 128, 128))]
    fn test_detected_rgb(input: &str, expected: (u8, u8, u8)) {
        assert_eq2!(detect(input).unwrap().rgb(), RgbTriple::from(expected));
    }

    /// Digits are dropped by the literal rule, and it runs first, so `Red 255` is a name.
    #[test]
    fn test_literal_rule_runs_first() {
        assert_eq2!(detect("Red 255").unwrap().format(), ColorFormat::Literal);
    }

    #[test_case("")]
    #[test_case("10, 10")]
    #[test_case("not a color")]
    #[test_case("#6495E")]
    #[test_case("6495ed ")]
    fn test_detect_unrecognized(input: &str) {
        assert!(detect(input).unwrap_err().is_unrecognized_format());
    }

    #[test]
    fn test_detect_out_of_range() {
        let error = detect("300, 10, 10").unwrap_err();
        assert_eq2!(
            error,
            ColorError::new_out_of_range(
                "300, 10, 10",
                OutOfRange::RgbChannel {
                    channel: ColorComponent::Red,
                    value: 300
                }
            )
        );
    }

    #[test_case("255, 10, 3abc", "3abc", ColorComponent::Blue)]
    #[test_case("255,,10,3", "", ColorComponent::Green)]
    #[test_case("120, 50%, 50%5", "50%5", ColorComponent::Lightness)]
    fn test_detect_numeric_parse(input: &str, token: &str, component: ColorComponent) {
        assert_eq2!(
            detect(input).unwrap_err(),
            ColorError::new_numeric_parse(token, component)
        );
    }

    #[test]
    fn test_detect_component_count() {
        assert_eq2!(
            detect("1, 2, 3, 4").unwrap_err(),
            ColorError::new_invalid_color(
                "1, 2, 3, 4",
                InvalidColorKind::ComponentCount {
                    format: ColorFormat::Rgb,
                    found: 4
                }
            )
        );
    }
}
