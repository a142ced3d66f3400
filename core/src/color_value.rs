// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numeric color representations.
//!
//! - [`RgbTriple`] and [`HslTriple`] are what the detector pulls out of the text. They
//!   keep the numbers exactly as the user typed them, so they can be echoed back.
//! - [`ColorValue`] is the canonical in-memory color that the converter derives the other
//!   notations from. The RGB ↔ HSL math is delegated to [`palette`].
//!
//! Derived values shown as text are truncated. See [`truncate_channel`] and
//! [`truncate_percent`]. The hex string and the name lookup of a color that came from
//! HSL use rounded channels instead, see [`round_channel`].

use std::fmt::{Display, Formatter, Result as FmtResult};

use palette::{FromColor, Hsl, RgbHue, Srgb};

use crate::{InlineString, KnownColorName, inline_string, join, lookup_rgb};

/// Single precision math produces values like `0.2 * 255 = 50.999_996`. A value this
/// close below an integer boundary truncates to that integer.
pub const FLOAT_NOISE: f32 = 1e-3;

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbTriple {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbTriple {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbTriple {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    #[must_use]
    pub fn as_array(&self) -> [u8; 3] { [self.red, self.green, self.blue] }

    /// `#` followed by 6 uppercase hex digits, eg: `#6495ED`.
    #[must_use]
    pub fn to_hex(&self) -> InlineString {
        inline_string!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Three base 10 integers joined by `", "`, eg: `100, 149, 237`.
    #[must_use]
    pub fn to_rgb_string(&self) -> InlineString {
        join!(from: self.as_array(), each: it, delim: ", ", format: "{it}")
    }
}

/// Saturation or lightness, as it was written by the user.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum HslComponent {
    /// `30%`. Holds `30`.
    Percent(u16),
    /// `0.3`. Holds `0.3`.
    Fraction(f32),
}

impl HslComponent {
    /// The value in `[0.0, 1.0]` (when in range).
    #[must_use]
    pub fn fraction(&self) -> f32 {
        match self {
            HslComponent::Percent(percent) => f32::from(*percent) / 100.0,
            HslComponent::Fraction(fraction) => *fraction,
        }
    }

    /// The integer percentage. A [`HslComponent::Fraction`] is truncated.
    #[must_use]
    pub fn percent(&self) -> u16 {
        match self {
            HslComponent::Percent(percent) => *percent,
            HslComponent::Fraction(fraction) => truncate_percent(*fraction),
        }
    }
}

impl Display for HslComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}%", self.percent()) }
}

/// Hue in degrees `[0, 360]`, w/ saturation and lightness.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HslTriple {
    pub hue: u16,
    pub saturation: HslComponent,
    pub lightness: HslComponent,
}

impl HslTriple {
    #[must_use]
    pub fn new(hue: u16, saturation: HslComponent, lightness: HslComponent) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Canonical `H, S%, L%` form, eg: `218, 79%, 66%`.
    #[must_use]
    pub fn to_hsl_string(&self) -> InlineString {
        inline_string!("{}, {}, {}", self.hue, self.saturation, self.lightness)
    }
}

/// Canonical in-memory color. The HSL fields hold unrounded fractions.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ColorValue {
    /// Truncated channels, shown as the RGB string.
    pub rgb: RgbTriple,
    /// Rounded channels, used for the hex string and the name lookup. Same as `rgb`
    /// unless the color came from HSL.
    pub hex_rgb: RgbTriple,
    /// Degrees in `[0, 360)`.
    pub hue: f32,
    /// `[0.0, 1.0]`.
    pub saturation: f32,
    /// `[0.0, 1.0]`.
    pub lightness: f32,
}

impl ColorValue {
    #[must_use]
    pub fn from_rgb(rgb: RgbTriple) -> Self {
        let srgb: Srgb = Srgb::new(rgb.red, rgb.green, rgb.blue).into_format::<f32>();
        let hsl: Hsl = Hsl::from_color(srgb);
        Self {
            rgb,
            hex_rgb: rgb,
            hue: hsl.hue.into_positive_degrees(),
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    /// Hue in degrees, saturation and lightness as fractions. `rgb` is truncated from
    /// the converted values and `hex_rgb` is rounded.
    #[must_use]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hsl: Hsl = Hsl::new(RgbHue::from_degrees(hue), saturation, lightness);
        let srgb: Srgb = Srgb::from_color(hsl);
        Self {
            rgb: RgbTriple::from_u8(
                truncate_channel(srgb.red),
                truncate_channel(srgb.green),
                truncate_channel(srgb.blue),
            ),
            hex_rgb: RgbTriple::from_u8(
                round_channel(srgb.red),
                round_channel(srgb.green),
                round_channel(srgb.blue),
            ),
            hue: hue.rem_euclid(360.0),
            saturation,
            lightness,
        }
    }

    #[must_use]
    pub fn from_hsl_triple(triple: &HslTriple) -> Self {
        Self::from_hsl(
            f32::from(triple.hue),
            triple.saturation.fraction(),
            triple.lightness.fraction(),
        )
    }

    /// The derived (truncated) HSL triple.
    #[must_use]
    pub fn to_hsl_triple(&self) -> HslTriple {
        HslTriple::new(
            truncate_hue(self.hue),
            HslComponent::Percent(truncate_percent(self.saturation)),
            HslComponent::Percent(truncate_percent(self.lightness)),
        )
    }

    #[must_use]
    pub fn known_name(&self) -> Option<&'static KnownColorName> {
        lookup_rgb(self.hex_rgb)
    }
}

/// `[0.0, 1.0]` → `[0, 255]`, truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn truncate_channel(fraction: f32) -> u8 {
    (fraction * 255.0 + FLOAT_NOISE).floor().clamp(0.0, 255.0) as u8
}

/// `[0.0, 1.0]` → `[0, 255]`, rounded half up.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_channel(fraction: f32) -> u8 {
    (fraction * 255.0 + 0.5 + FLOAT_NOISE)
        .floor()
        .clamp(0.0, 255.0) as u8
}

/// `[0.0, 1.0]` → `[0, 100]`, truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn truncate_percent(fraction: f32) -> u16 {
    (fraction * 100.0 + FLOAT_NOISE).floor().clamp(0.0, 100.0) as u16
}

/// Degrees → `[0, 360)`, truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn truncate_hue(degrees: f32) -> u16 {
    let it = (degrees.rem_euclid(360.0) + FLOAT_NOISE).floor();
    if it >= 360.0 { 0 } else { it.max(0.0) as u16 }
}
