// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Random color strings in any of the four notations, w/ varied surface syntax. Every
//! string produced here is accepted by [`crate::detect()`].

use rand::Rng;
use strum::IntoEnumIterator;

use crate::{ColorFormat, InlineString, detect::grammar::SEPARATORS, inline_string,
            known_names::KNOWN_COLOR_NAMES};

/// How often each notation is picked by [`sample_with`]. Relative, not percentages.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SampleWeights {
    pub literal: u32,
    pub hex: u32,
    pub rgb: u32,
    pub hsl: u32,
}

/// Names are picked most often, then hex, then RGB and HSL equally.
impl Default for SampleWeights {
    fn default() -> Self {
        Self {
            literal: 4,
            hex: 3,
            rgb: 2,
            hsl: 2,
        }
    }
}

impl SampleWeights {
    #[must_use]
    pub fn weight(&self, format: ColorFormat) -> u32 {
        match format {
            ColorFormat::Literal => self.literal,
            ColorFormat::Hex => self.hex,
            ColorFormat::Rgb => self.rgb,
            ColorFormat::Hsl => self.hsl,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 { ColorFormat::iter().map(|it| u64::from(self.weight(it))).sum() }

    /// All zero weights fall back to [`SampleWeights::default`].
    pub fn pick_format<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorFormat {
        let weights = if self.total() == 0 { Self::default() } else { *self };

        let mut roll = rng.random_range(0..weights.total());
        for format in ColorFormat::iter() {
            let weight = u64::from(weights.weight(format));
            if roll < weight {
                return format;
            }
            roll -= weight;
        }

        ColorFormat::Literal
    }
}

/// A random color string, using the thread local generator and the default weights.
#[must_use]
pub fn sample() -> InlineString { sample_with(&mut rand::rng(), &SampleWeights::default()) }

pub fn sample_with<R: Rng + ?Sized>(rng: &mut R, weights: &SampleWeights) -> InlineString {
    let format = weights.pick_format(rng);
    let it = sample_format(rng, format);
    // % is Display, ? is Debug.
    tracing::debug!(message = "Sampled color", format = %format, sample = ?it);
    it
}

pub fn sample_format<R: Rng + ?Sized>(rng: &mut R, format: ColorFormat) -> InlineString {
    match format {
        ColorFormat::Literal => gen_literal(rng),
        ColorFormat::Hex => gen_hex(rng),
        ColorFormat::Rgb => gen_rgb(rng),
        ColorFormat::Hsl => gen_hsl(rng),
    }
}

/// `cornflowerblue`, `Cornflower Blue`, or `CORNFLOWERBLUE`.
fn gen_literal<R: Rng + ?Sized>(rng: &mut R) -> InlineString {
    let known = &KNOWN_COLOR_NAMES[rng.random_range(0..KNOWN_COLOR_NAMES.len())];
    match rng.random_range(0..3) {
        0 => known.canonical.to_ascii_lowercase().as_str().into(),
        1 => known.display_name(),
        _ => known.canonical.to_ascii_uppercase().as_str().into(),
    }
}

/// `#6495ED`, `#6495ed`, `6495ED`, or `6495ed`.
fn gen_hex<R: Rng + ?Sized>(rng: &mut R) -> InlineString {
    let [red, green, blue] = [rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()];
    let marker = if rng.random_bool(0.5) { "#" } else { "" };
    if rng.random_bool(0.5) {
        inline_string!("{marker}{red:02X}{green:02X}{blue:02X}")
    } else {
        inline_string!("{marker}{red:02x}{green:02x}{blue:02x}")
    }
}

/// Eg: `100, 149,237`.
fn gen_rgb<R: Rng + ?Sized>(rng: &mut R) -> InlineString {
    let [red, green, blue] = [rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()];
    let [first, second] = [gen_separator(rng), gen_separator(rng)];
    inline_string!("{red}{first}{green}{second}{blue}")
}

/// Eg: `218 79%, 0.66`.
fn gen_hsl<R: Rng + ?Sized>(rng: &mut R) -> InlineString {
    let hue = rng.random_range(0..=360_u16);
    let saturation = gen_hsl_component(rng);
    let lightness = gen_hsl_component(rng);
    let [first, second] = [gen_separator(rng), gen_separator(rng)];
    inline_string!("{hue}{first}{saturation}{second}{lightness}")
}

/// `NN%`, `0.NN`, `0.N`, or `1.0`.
fn gen_hsl_component<R: Rng + ?Sized>(rng: &mut R) -> InlineString {
    match rng.random_range(0..4) {
        0 => inline_string!("{}%", rng.random_range(0..=100_u8)),
        1 => inline_string!("0.{:02}", rng.random_range(0..=99_u8)),
        2 => inline_string!("0.{}", rng.random_range(0..=9_u8)),
        _ => "1.0".into(),
    }
}

fn gen_separator<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SEPARATORS[rng.random_range(0..SEPARATORS.len())]
}
