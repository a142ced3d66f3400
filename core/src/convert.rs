// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The normalizer. Turns a [`DetectedFormat`] into the four-way [`ConvertedColor`].
//!
//! The notation the user typed is echoed (w/ the exact numbers they typed), and the
//! other three are derived from it:
//!
//! | Input     | `name`        | `hex`         | `rgb`         | `hsl`         |
//! | :-------- | :------------ | :------------ | :------------ | :------------ |
//! | `Literal` | table entry   | from table    | from table    | derived       |
//! | `Hex`     | reverse match | echo (upper)  | exact decode  | derived       |
//! | `Rgb`     | reverse match | derived       | echo          | derived       |
//! | `Hsl`     | reverse match | derived       | derived       | echo          |

use serde::{Deserialize, Serialize};

use crate::{ColorError, ColorValue, DetectedFormat, InlineString, detect};

/// The four canonical notations of one color. Built fresh for every conversion.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ConvertedColor {
    /// Display name (eg: `Cornflower Blue`), only when the RGB value is in the Known
    /// Name Table.
    pub name: Option<InlineString>,
    /// Eg: `#6495ED`.
    pub hex: InlineString,
    /// Eg: `100, 149, 237`.
    pub rgb: InlineString,
    /// Eg: `218, 79%, 66%`.
    pub hsl: InlineString,
}

/// Trim `text`, [`detect`] its notation, and [`convert_detected`] it.
///
/// # Errors
///
/// Whatever [`detect`] returns.
pub fn convert(text: &str) -> Result<ConvertedColor, ColorError> {
    let detected = detect(text.trim())?;
    Ok(convert_detected(&detected))
}

/// This can't fail: every value the detector produces is in range.
#[must_use]
pub fn convert_detected(detected: &DetectedFormat) -> ConvertedColor {
    match detected {
        DetectedFormat::Literal(known) => {
            let value = ColorValue::from_rgb(known.rgb);
            ConvertedColor {
                name: Some(known.display_name()),
                hex: known.rgb.to_hex(),
                rgb: known.rgb.to_rgb_string(),
                hsl: value.to_hsl_triple().to_hsl_string(),
            }
        }
        DetectedFormat::Hex(hex_digits) => {
            let value = ColorValue::from_rgb(hex_digits.rgb);
            ConvertedColor {
                name: value.known_name().map(|it| it.display_name()),
                hex: hex_digits.to_hex(),
                rgb: hex_digits.rgb.to_rgb_string(),
                hsl: value.to_hsl_triple().to_hsl_string(),
            }
        }
        DetectedFormat::Rgb(rgb) => {
            let value = ColorValue::from_rgb(*rgb);
            ConvertedColor {
                name: value.known_name().map(|it| it.display_name()),
                hex: rgb.to_hex(),
                rgb: rgb.to_rgb_string(),
                hsl: value.to_hsl_triple().to_hsl_string(),
            }
        }
        DetectedFormat::Hsl(hsl) => {
            let value = ColorValue::from_hsl_triple(hsl);
            ConvertedColor {
                name: value.known_name().map(|it| it.display_name()),
                hex: value.hex_rgb.to_hex(),
                rgb: value.rgb.to_rgb_string(),
                hsl: hsl.to_hsl_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn converted(name: Option<&str>, hex: &str, rgb: &str, hsl: &str) -> ConvertedColor {
        ConvertedColor {
            name: name.map(InlineString::from),
            hex: hex.into(),
            rgb: rgb.into(),
            hsl: hsl.into(),
        }
    }

    #[test_case("Cornflower Blue")]
    #[test_case("cornflowerblue")]
    #[test_case("CORNFLOWERBLUE")]
    #[test_case("6495ed")]
    #[test_case("#6495ED")]
    #[test_case("100, 149, 237")]
    #[test_case("  100 149 237  ")]
    fn test_convert_cornflower_blue(input: &str) {
        assert_eq2!(
            convert(input).unwrap(),
            converted(
                Some("Cornflower Blue"),
                "#6495ED",
                "100, 149, 237",
                "218, 79%, 66%"
            )
        );
    }

    #[test]
    fn test_convert_hsl_echoes_input() {
        assert_eq2!(
            convert("218, 79%, 66%").unwrap(),
            converted(None, "#6496ED", "99, 150, 236", "218, 79%, 66%")
        );
    }

    #[test_case("0, 0%, 50%", converted(Some("Gray"), "#808080", "127, 127, 127", "0, 0%, 50%"))]
    #[test_case("120, 100%, 25%", converted(Some("Green"), "#008000", "0, 127, 0", "120, 100%, 25%"))]
    #[test_case("0, 100%, 25%", converted(Some("Maroon"), "#800000", "127, 0, 0", "0, 100%, 25%"))]
    #[test_case("0, 100%, 50%", converted(Some("Red"), "#FF0000", "255, 0, 0", "0, 100%, 50%"))]
    #[test_case("120, 1.0, 0.5", converted(Some("Lime"), "#00FF00", "0, 255, 0", "120, 100%, 50%"))]
    #[test_case("360, 100%, 50%", converted(Some("Red"), "#FF0000", "255, 0, 0", "360, 100%, 50%"))]
    fn test_convert_hsl(input: &str, expected: ConvertedColor) {
        assert_eq2!(convert(input).unwrap(), expected);
    }

    /// Percents are stored as integers, so leading zeros are not echoed.
    #[test]
    fn test_convert_hsl_leading_zero_percent() {
        let it = convert("120, 050%, 50%").unwrap();
        assert_eq2!(it.hsl, "120, 50%, 50%");
        assert_eq2!(it.hex, convert("120, 50%, 50%").unwrap().hex);
    }

    #[test]
    fn test_convert_rgb_without_name() {
        assert_eq2!(
            convert("255,10,3").unwrap(),
            converted(None, "#FF0A03", "255, 10, 3", "1, 100%, 50%")
        );
    }

    #[test]
    fn test_convert_hex_lowercase_is_uppercased() {
        let it = convert("ff0a03").unwrap();
        assert_eq2!(it.hex, "#FF0A03");
        assert_eq2!(it.rgb, "255, 10, 3");
    }

    #[test]
    fn test_convert_errors() {
        assert!(convert("300, 10, 10").unwrap_err().is_out_of_range());
        assert!(convert("10, 10").unwrap_err().is_unrecognized_format());
        assert!(convert("   ").unwrap_err().is_unrecognized_format());
    }

    #[test]
    fn test_converted_color_to_json() {
        let it = convert("red").unwrap();
        let json = serde_json::to_string(&it).unwrap();
        assert_eq2!(
            json,
            r##"{"name":"Red","hex":"#FF0000","rgb":"255, 0, 0","hsl":"0, 100%, 50%"}"##
        );
        let round_trip: ConvertedColor = serde_json::from_str(&json).unwrap();
        assert_eq2!(round_trip, it);
    }
}
