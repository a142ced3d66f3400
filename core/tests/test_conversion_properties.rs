// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties of the public API, checked over seeded random inputs and the whole Known
//! Name Table.

use colorconv_core::{ColorFormat, KnownColorName, assert_eq2, complement, convert,
                     detect, format_display_name, known_names::KNOWN_COLOR_NAMES,
                     sample_format};
use rand::{Rng, SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;

const ITERATIONS: usize = 2_000;

fn seeded_rng() -> StdRng { StdRng::seed_from_u64(0xC010_2C0D) }

#[test]
fn test_hex_is_uppercased_echo() {
    let mut rng = seeded_rng();
    for _ in 0..ITERATIONS {
        let digits = (0..6)
            .map(|_| {
                let it = rng.random_range(0..16_u32);
                char::from_digit(it, 16).unwrap_or('0')
            })
            .collect::<String>();
        let input = if rng.random_bool(0.5) {
            format!("#{digits}")
        } else {
            digits.clone()
        };

        let it = convert(&input).unwrap();
        assert_eq2!(it.hex.as_str(), format!("#{}", digits.to_uppercase()), "{input}");
    }
}

#[test]
fn test_rgb_is_exact_echo() {
    let mut rng = seeded_rng();
    let corners: [(u8, u8, u8); 4] = [(0, 0, 0), (255, 255, 255), (0, 255, 0), (1, 2, 3)];
    let random = (0..ITERATIONS).map(|_| rng.random::<(u8, u8, u8)>());
    for (red, green, blue) in corners.into_iter().chain(random) {
        let input = format!("{red}, {green}, {blue}");
        let it = convert(&input).unwrap();
        assert_eq2!(it.rgb.as_str(), input);
    }
}

#[test]
fn test_hsl_is_exact_echo() {
    let mut rng = seeded_rng();
    let corners: [(u16, u16, u16); 3] = [(0, 0, 0), (360, 100, 100), (180, 50, 50)];
    let random = (0..ITERATIONS).map(|_| {
        (
            rng.random_range(0..=360_u16),
            rng.random_range(0..=100_u16),
            rng.random_range(0..=100_u16),
        )
    });
    for (hue, saturation, lightness) in corners.into_iter().chain(random) {
        let input = format!("{hue}, {saturation}%, {lightness}%");
        let it = convert(&input).unwrap();
        assert_eq2!(it.hsl.as_str(), input);
    }
}

#[test]
fn test_every_known_name_converts_to_itself() {
    for KnownColorName { canonical, rgb } in &KNOWN_COLOR_NAMES {
        let display_name = format_display_name(canonical);
        let expected_hex = rgb.to_hex();

        let spellings = [
            canonical.to_string(),
            display_name.to_string(),
            canonical.to_uppercase(),
        ];
        for input in spellings {
            let it = convert(&input).unwrap();
            assert_eq2!(it.name.as_ref(), Some(&display_name), "{input}");
            assert_eq2!(it.hex, expected_hex, "{input}");
        }

        // The reverse lookup finds the same entry.
        let it = convert(&rgb.to_rgb_string()).unwrap();
        assert_eq2!(it.name.as_ref(), Some(&display_name), "{canonical}");
    }
}

#[test]
fn test_double_complement_returns_same_hue() {
    let mut rng = seeded_rng();
    for _ in 0..ITERATIONS {
        let hue = rng.random_range(0..=360_u16);
        let saturation = rng.random_range(0..=100_u8);
        let lightness = rng.random_range(0..=100_u8);
        let input = format!("{hue}, {saturation}%, {lightness}%");

        let twice = complement(&complement(&input).unwrap()).unwrap();
        assert_eq2!(twice.as_str(), format!("{}, {saturation}%, {lightness}%", hue % 360));
    }
}

#[test]
fn test_complement_accepts_converted_hsl() {
    let it = convert("cornflowerblue").unwrap();
    let complemented = complement(&it.hsl).unwrap();
    assert_eq2!(complemented, "38, 79%, 66%");
    assert!(convert(&complemented).is_ok());
}

#[test]
fn test_error_kinds() {
    assert!(convert("300, 10, 10").unwrap_err().is_out_of_range());
    assert!(convert("10, 10").unwrap_err().is_unrecognized_format());
}

#[test]
fn test_samples_are_always_detected() {
    let mut rng = seeded_rng();
    for format in ColorFormat::iter() {
        for _ in 0..1_000 {
            let it = sample_format(&mut rng, format);
            assert!(detect(&it).is_ok(), "{it:?}");
        }
    }
}

#[test]
fn test_name_spellings_resolve_to_same_result() {
    let a = convert("Cornflower Blue").unwrap();
    let b = convert("cornflowerblue").unwrap();
    let c = convert("CORNFLOWERBLUE").unwrap();
    assert_eq2!(a, b);
    assert_eq2!(b, c);
}
