// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Language neutral error taxonomy for the color pipeline. See [`ColorError`].
//!
//! None of these errors carry pre-rendered, localized text. The [`std::fmt::Display`]
//! impls (used by [`miette`] reports and logs) are in English; a front end that wants
//! a different language matches on the variants and renders its own strings.

use strum_macros::{Display, EnumCount, EnumIter};

use crate::InlineString;

/// The two failure kinds of the pipeline. Both are recoverable, and both are returned to
/// the immediate caller, never logged and swallowed.
///
/// | Variant           | Cause                                                      |
/// | :---------------- | :--------------------------------------------------------- |
/// | [`NumericParse`]  | A token where a number was expected is not a number        |
/// | [`InvalidColor`]  | No grammar matched, or a grammar matched w/ bad values     |
///
/// [`InvalidColor`]: Self::InvalidColor
/// [`NumericParse`]: Self::NumericParse
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ColorError {
    /// A numeric token (RGB channel, HSL hue, or a percentage / fraction) could not be
    /// parsed as a number at all.
    #[error("Could not read '{token}' as a number for the {component} component")]
    #[diagnostic(
        code(colorconv_core::numeric_parse),
        help("Use plain digits, eg: `255, 10, 3` or `120, 50%, 0.25`")
    )]
    NumericParse {
        token: InlineString,
        component: ColorComponent,
    },

    /// The input matched no grammar, or matched one but broke its value constraints.
    #[error("{kind}")]
    #[diagnostic(code(colorconv_core::invalid_color))]
    InvalidColor {
        input: String,
        kind: InvalidColorKind,
    },
}

/// Refinement of [`ColorError::InvalidColor`]: which grammar was tentatively matched, and
/// which constraint failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidColorKind {
    #[error("The input doesn't fit any of the known color patterns")]
    UnrecognizedFormat,

    #[error(transparent)]
    OutOfRange(OutOfRange),

    #[error("This looks like {format} but it has {found} components instead of 3")]
    ComponentCount { format: ColorFormat, found: usize },

    #[error("This is not a canonical HSL color, eg: `218, 79%, 66%`")]
    NotCanonicalHsl,
}

/// A value that matched its grammar but is outside the range of its component.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OutOfRange {
    #[error(
        "This looks like an RGB color but the {channel} value {value} is not in the 0-255 range"
    )]
    RgbChannel { channel: ColorComponent, value: u32 },

    #[error("This looks like an HSL color but the Hue value {value} is not in the 0-360 range")]
    Hue { value: u32 },

    #[error(
        "This looks like an HSL color but the {component} value {value} is not a percentage \
         or in the 0.0-1.0 range"
    )]
    Fraction { component: ColorComponent, value: f32 },
}

/// The numeric slots of the RGB and HSL notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum ColorComponent {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
}

/// Payload free tag of the four notations the detector knows. The payload carrying
/// version is [`crate::DetectedFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum ColorFormat {
    #[strum(to_string = "a color name")]
    Literal,
    #[strum(to_string = "a hex color")]
    Hex,
    #[strum(to_string = "an RGB color")]
    Rgb,
    #[strum(to_string = "an HSL color")]
    Hsl,
}

impl ColorError {
    #[must_use]
    pub fn new_invalid_color(input: &str, kind: InvalidColorKind) -> Self {
        ColorError::InvalidColor {
            input: input.to_string(),
            kind,
        }
    }

    #[must_use]
    pub fn new_out_of_range(input: &str, out_of_range: OutOfRange) -> Self {
        Self::new_invalid_color(input, InvalidColorKind::OutOfRange(out_of_range))
    }

    #[must_use]
    pub fn new_numeric_parse(token: &str, component: ColorComponent) -> Self {
        ColorError::NumericParse {
            token: token.into(),
            component,
        }
    }

    /// `true` for range violations, as opposed to input that matched nothing.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidColor {
                kind: InvalidColorKind::OutOfRange(_),
                ..
            }
        )
    }

    #[must_use]
    pub fn is_unrecognized_format(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidColor {
                kind: InvalidColorKind::UnrecognizedFormat,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_display_numeric_parse() {
        let error = ColorError::new_numeric_parse("3abc", ColorComponent::Blue);
        assert_eq2!(
            error.to_string(),
            "Could not read '3abc' as a number for the Blue component"
        );
    }

    #[test_case(
        OutOfRange::RgbChannel { channel: ColorComponent::Red, value: 300 },
        "This looks like an RGB color but the Red value 300 is not in the 0-255 range"
    )]
    #[test_case(
        OutOfRange::Hue { value: 400 },
        "This looks like an HSL color but the Hue value 400 is not in the 0-360 range"
    )]
    fn test_display_out_of_range(out_of_range: OutOfRange, expected: &str) {
        let error = ColorError::new_out_of_range("irrelevant", out_of_range);
        assert_eq2!(error.to_string(), expected);
        assert!(error.is_out_of_range());
        assert!(!error.is_unrecognized_format());
    }

    #[test]
    fn test_display_component_count() {
        let kind = InvalidColorKind::ComponentCount {
            format: ColorFormat::Rgb,
            found: 4,
        };
        assert_eq2!(
            kind.to_string(),
            "This looks like an RGB color but it has 4 components instead of 3"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;
        let error =
            ColorError::new_invalid_color("nope", InvalidColorKind::UnrecognizedFormat);
        let code = error.code().map(|it| it.to_string());
        assert_eq2!(code.as_deref(), Some("colorconv_core::invalid_color"));
        assert!(error.is_unrecognized_format());
    }
}
