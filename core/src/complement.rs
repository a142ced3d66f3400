// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Complementary color: rotate the hue of a canonical HSL string by 180 degrees.
//!
//! Only the hue changes. Saturation and lightness are carried over as text, so applying
//! [`complement()`] twice returns the original string, except for a hue of `360` which
//! comes back as `0` (the same angle).

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          character::complete::char,
          combinator::{all_consuming, map_res},
          sequence::terminated};

use crate::{ColorError, InlineString, InvalidColorKind, inline_string};

const HALF_TURN: u16 = 180;
const FULL_TURN: u16 = 360;
const MAX_PERCENT: u8 = 100;

/// Complement `hsl_text`, which must be exactly `H, S%, L%` (the [`crate::convert()`]
/// output format): hue in `[0, 360]`, saturation and lightness integer percentages in
/// `[0, 100]`, separated by `", "`.
///
/// ```
/// use colorconv_core::complement;
/// assert_eq!(complement("218, 79%, 66%").unwrap(), "38, 79%, 66%");
/// assert_eq!(complement("38, 79%, 66%").unwrap(), "218, 79%, 66%");
/// ```
///
/// # Errors
///
/// [`ColorError::InvalidColor`] w/ [`InvalidColorKind::NotCanonicalHsl`] for any other
/// input, including surrounding whitespace.
pub fn complement(hsl_text: &str) -> Result<InlineString, ColorError> {
    let (_, (hue, saturation, lightness)) = parse_canonical_hsl(hsl_text).map_err(|_| {
        ColorError::new_invalid_color(hsl_text, InvalidColorKind::NotCanonicalHsl)
    })?;

    let hue = (hue + HALF_TURN) % FULL_TURN;

    tracing::debug!(
        message = "Complemented HSL color",
        input = %hsl_text,
        hue = %hue
    );

    Ok(inline_string!("{hue}, {saturation}%, {lightness}%"))
}

/// `H, S%, L%` and nothing else.
fn parse_canonical_hsl(input: &str) -> IResult<&str, (u16, u8, u8)> {
    all_consuming((
        terminated(helper_fns::parse_hue, tag(helper_fns::SEPARATOR)),
        terminated(helper_fns::parse_percent, tag(helper_fns::SEPARATOR)),
        helper_fns::parse_percent,
    ))
    .parse(input)
}

mod helper_fns {
    use super::*;

    pub const SEPARATOR: &str = ", ";

    fn digits_1_to_3(input: &str) -> IResult<&str, &str> {
        take_while_m_n(1, 3, |c: char| c.is_ascii_digit()).parse(input)
    }

    pub fn parse_hue(input: &str) -> IResult<&str, u16> {
        map_res(digits_1_to_3, |it: &str| {
            it.parse::<u16>()
                .ok()
                .filter(|hue| *hue <= FULL_TURN)
                .ok_or(InvalidColorKind::NotCanonicalHsl)
        })
        .parse(input)
    }

    pub fn parse_percent(input: &str) -> IResult<&str, u8> {
        map_res(terminated(digits_1_to_3, char('%')), |it: &str| {
            it.parse::<u8>()
                .ok()
                .filter(|percent| *percent <= MAX_PERCENT)
                .ok_or(InvalidColorKind::NotCanonicalHsl)
        })
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("0, 100%, 50%", "180, 100%, 50%")]
    #[test_case("180, 100%, 50%", "0, 100%, 50%")]
    #[test_case("218, 79%, 66%", "38, 79%, 66%")]
    #[test_case("359, 0%, 0%", "179, 0%, 0%")]
    #[test_case("360, 10%, 90%", "180, 10%, 90%")]
    fn test_complement(input: &str, expected: &str) {
        assert_eq2!(complement(input).unwrap(), expected);
    }

    #[test]
    fn test_double_complement_hue_360_comes_back_as_0() {
        let once = complement("360, 50%, 50%").unwrap();
        let twice = complement(&once).unwrap();
        assert_eq2!(twice, "0, 50%, 50%");
    }

    #[test_case("")]
    #[test_case("218 79% 66%")]
    #[test_case("218,79%,66%")]
    #[test_case("218, 0.79, 0.66")]
    #[test_case("361, 50%, 50%")]
    #[test_case("200, 101%, 50%")]
    #[test_case(" 218, 79%, 66%")]
    #[test_case("218, 79%, 66%, 1%")]
    #[test_case("Cornflower Blue")]
    fn test_complement_rejects(input: &str) {
        assert_eq2!(
            complement(input),
            Err(ColorError::new_invalid_color(
                input,
                InvalidColorKind::NotCanonicalHsl
            ))
        );
    }
}
