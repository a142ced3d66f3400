// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The detection rules. Each one returns:
//! - [`None`] when its grammar doesn't match (the next rule gets a go).
//! - `Some(Ok(..))` when the input is a valid color in its notation.
//! - `Some(Err(..))` when the grammar matched but the values are bad. This is final.

use super::{DetectedFormat, HexDigits,
            grammar::{PERCENT, match_hsl_prefix, match_rgb_prefix, parse_hex_with_marker,
                      parse_hex_without_marker, split_components}};
use crate::{ColorComponent, ColorError, ColorFormat, HslComponent, HslTriple,
            InvalidColorKind, OutOfRange, RgbTriple, lookup_name};

pub type RuleResult = Option<Result<DetectedFormat, ColorError>>;

const RGB_COMPONENTS: [ColorComponent; 3] =
    [ColorComponent::Red, ColorComponent::Green, ColorComponent::Blue];

const HSL_COMPONENTS: [ColorComponent; 3] = [
    ColorComponent::Hue,
    ColorComponent::Saturation,
    ColorComponent::Lightness,
];

const COMPONENT_COUNT: usize = 3;

const MAX_HUE: u32 = 360;

pub fn literal_name(input: &str) -> RuleResult {
    lookup_name(input).map(|it| Ok(DetectedFormat::Literal(it)))
}

pub fn hex_without_marker(input: &str) -> RuleResult {
    let (_, rgb) = parse_hex_without_marker(input).ok()?;
    Some(Ok(DetectedFormat::Hex(HexDigits::new(input, rgb))))
}

pub fn hex_with_marker(input: &str) -> RuleResult {
    let (_, rgb) = parse_hex_with_marker(input).ok()?;
    Some(Ok(DetectedFormat::Hex(HexDigits::new(input, rgb))))
}

pub fn rgb_triple(input: &str) -> RuleResult {
    match_rgb_prefix(input).ok()?;
    Some(parse_rgb_components(input))
}

pub fn hsl_triple(input: &str) -> RuleResult {
    match_hsl_prefix(input).ok()?;
    Some(parse_hsl_components(input))
}

/// Every token is parsed before the component count is checked, so `255,,10,3` is a
/// numeric error (the empty token) and `1, 2, 3, 4` is a component count error.
fn parse_rgb_components(input: &str) -> Result<DetectedFormat, ColorError> {
    let tokens = split_components(input);

    let mut channels = [0_u32; 3];
    for ((token, component), channel) in
        tokens.iter().zip(RGB_COMPONENTS).zip(channels.iter_mut())
    {
        *channel = parse_integer(token, component)?;
    }
    check_component_count(input, ColorFormat::Rgb, tokens.len())?;

    let mut bytes = [0_u8; 3];
    for ((value, component), byte) in channels.into_iter().zip(RGB_COMPONENTS).zip(&mut bytes)
    {
        *byte = u8::try_from(value).map_err(|_| {
            ColorError::new_out_of_range(
                input,
                OutOfRange::RgbChannel {
                    channel: component,
                    value,
                },
            )
        })?;
    }

    let [red, green, blue] = bytes;
    Ok(DetectedFormat::Rgb(RgbTriple::from_u8(red, green, blue)))
}

/// Hue is range checked as soon as it is parsed, ahead of saturation and lightness, so
/// `400, 150%, 50%` reports the hue.
fn parse_hsl_components(input: &str) -> Result<DetectedFormat, ColorError> {
    let tokens = split_components(input);

    let [hue_component, saturation_component, lightness_component] = HSL_COMPONENTS;
    let (Some(hue), Some(saturation), Some(lightness)) =
        (tokens.first(), tokens.get(1), tokens.get(2))
    else {
        return Err(component_count_error(input, ColorFormat::Hsl, tokens.len()));
    };

    let hue = parse_integer(hue, hue_component)?;
    let hue = u16::try_from(hue)
        .ok()
        .filter(|it| u32::from(*it) <= MAX_HUE)
        .ok_or_else(|| ColorError::new_out_of_range(input, OutOfRange::Hue { value: hue }))?;

    let saturation = parse_hsl_component(input, saturation, saturation_component)?;
    let lightness = parse_hsl_component(input, lightness, lightness_component)?;
    check_component_count(input, ColorFormat::Hsl, tokens.len())?;

    Ok(DetectedFormat::Hsl(HslTriple::new(hue, saturation, lightness)))
}

fn check_component_count(
    input: &str,
    format: ColorFormat,
    found: usize,
) -> Result<(), ColorError> {
    if found == COMPONENT_COUNT {
        Ok(())
    } else {
        Err(component_count_error(input, format, found))
    }
}

fn component_count_error(input: &str, format: ColorFormat, found: usize) -> ColorError {
    ColorError::new_invalid_color(input, InvalidColorKind::ComponentCount { format, found })
}

fn parse_integer(token: &str, component: ColorComponent) -> Result<u32, ColorError> {
    token
        .parse::<u32>()
        .map_err(|_| ColorError::new_numeric_parse(token, component))
}

/// `30%` → [`HslComponent::Percent`], `0.3` → [`HslComponent::Fraction`]. Either one
/// must land in `[0.0, 1.0]`.
///
/// A token that contains a `%` anywhere has its last character dropped before parsing,
/// so `50%` is fifty percent and `50%5` is not a number.
fn parse_hsl_component(
    input: &str,
    token: &str,
    component: ColorComponent,
) -> Result<HslComponent, ColorError> {
    let numeric_error = || ColorError::new_numeric_parse(token, component);

    let it = if token.contains(PERCENT) {
        let mut chars = token.chars();
        chars.next_back();
        let number = chars.as_str();
        let value = number.parse::<f32>().map_err(|_| numeric_error())?;
        match number.parse::<u16>() {
            Ok(percent) => HslComponent::Percent(percent),
            Err(_) => HslComponent::Fraction(value / 100.0),
        }
    } else {
        HslComponent::Fraction(token.parse::<f32>().map_err(|_| numeric_error())?)
    };

    let value = it.fraction();
    if (0.0..=1.0).contains(&value) {
        Ok(it)
    } else {
        Err(ColorError::new_out_of_range(
            input,
            OutOfRange::Fraction { component, value },
        ))
    }
}
