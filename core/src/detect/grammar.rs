// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [nom] recognizers for the hex, RGB, and HSL notations, and the component splitter.
//!
//! The RGB and HSL recognizers only look at a prefix of the input, the same way an
//! unanchored-at-the-end regular expression would. The rules in [`super::rules`] then
//! split the WHOLE input w/ [`split_components`] and parse every token, which is where
//! trailing junk like `255, 10, 3abc` gets reported.
//!
//! | Notation | Grammar (regex equivalent)                                              |
//! | :------- | :---------------------------------------------------------------------- |
//! | Hex      | `[0-9A-Fa-f]{6}`, or `#` then the same (whole input)                    |
//! | RGB      | `(?:[0-9]{1,3}[, ]{1,2}){2}[0-9]{1,3}` (prefix)                         |
//! | HSL      | `[0-9]{1,3}(?:[, ]{1,2}(?:[01]\.[0-9]{1,2}\|[0-9]{1,3}%)){2}` (prefix)  |

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::take_while_m_n,
          character::complete::{char, one_of},
          combinator::{all_consuming, map_res, recognize},
          multi::count,
          sequence::preceded};

use crate::{InlineVecStr, RgbTriple};

pub const HEX_MARKER: char = '#';
pub const PERCENT: char = '%';

/// Boundaries between components, longest first.
pub const SEPARATORS: [&str; 3] = [", ", ",", " "];

/// Exactly 6 hex digits and nothing else, eg: `6495ed`.
pub fn parse_hex_without_marker(input: &str) -> IResult<&str, RgbTriple> {
    all_consuming(helper_fns::parse_hex_digits).parse(input)
}

/// `#` followed by exactly 6 hex digits and nothing else, eg: `#6495ED`.
pub fn parse_hex_with_marker(input: &str) -> IResult<&str, RgbTriple> {
    all_consuming(preceded(char(HEX_MARKER), helper_fns::parse_hex_digits)).parse(input)
}

/// Matches the RGB prefix, eg: `255, 10, 3` in `255, 10, 3abc`.
pub fn match_rgb_prefix(input: &str) -> IResult<&str, &str> {
    recognize((
        count((helper_fns::digits_1_to_3, helper_fns::separator), 2),
        helper_fns::digits_1_to_3,
    ))
    .parse(input)
}

/// Matches the HSL prefix, eg: `120, 50%, 0.25`.
pub fn match_hsl_prefix(input: &str) -> IResult<&str, &str> {
    recognize((
        helper_fns::digits_1_to_3,
        count(
            (
                helper_fns::separator,
                alt((helper_fns::fraction, helper_fns::percentage)),
            ),
            2,
        ),
    ))
    .parse(input)
}

/// Split the whole input into component tokens. Each occurrence of `", "`, then `","`,
/// then `" "` is one boundary. Two separators in a row produce an empty token, eg:
/// `255,,10` → `["255", "", "10"]`.
#[must_use]
pub fn split_components(input: &str) -> InlineVecStr<'_> {
    input
        .split(SEPARATORS[0])
        .flat_map(|it| it.split([',', ' ']))
        .collect()
}

/// Helper functions that match fragments of the notations.
mod helper_fns {
    use super::*;

    pub fn match_is_digit(c: char) -> bool { c.is_ascii_digit() }

    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn match_is_separator(c: char) -> bool { c == ',' || c == ' ' }

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }

    pub fn parse_hex_digits(input: &str) -> IResult<&str, RgbTriple> {
        let (input, (red, green, blue)) =
            (parse_hex_seg, parse_hex_seg, parse_hex_seg).parse(input)?;
        Ok((input, RgbTriple::from_u8(red, green, blue)))
    }

    pub fn digits_1_to_3(input: &str) -> IResult<&str, &str> {
        take_while_m_n(1, 3, match_is_digit).parse(input)
    }

    pub fn separator(input: &str) -> IResult<&str, &str> {
        take_while_m_n(1, 2, match_is_separator).parse(input)
    }

    /// `[01]\.[0-9]{1,2}`, eg: `0.25`.
    pub fn fraction(input: &str) -> IResult<&str, &str> {
        recognize((one_of("01"), char('.'), take_while_m_n(1, 2, match_is_digit)))
            .parse(input)
    }

    /// `[0-9]{1,3}%`, eg: `50%`.
    pub fn percentage(input: &str) -> IResult<&str, &str> {
        recognize((digits_1_to_3, char(PERCENT))).parse(input)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("6495ed", Some((100, 149, 237)))]
    #[test_case("FFFFFF", Some((255, 255, 255)))]
    #[test_case("#6495ed", None)]
    #[test_case("6495ed0", None)]
    #[test_case("6495e", None)]
    #[test_case("6495eg", None)]
    fn test_parse_hex_without_marker(input: &str, expected: Option<(u8, u8, u8)>) {
        let it = parse_hex_without_marker(input).ok().map(|(_, it)| it);
        assert_eq2!(it, expected.map(RgbTriple::from));
    }

    #[test_case("#6495ED", Some((100, 149, 237)))]
    #[test_case("#000000", Some((0, 0, 0)))]
    #[test_case("6495ED", None)]
    #[test_case("#6495ED ", None)]
    #[test_case("##6495E", None)]
    fn test_parse_hex_with_marker(input: &str, expected: Option<(u8, u8, u8)>) {
        let it = parse_hex_with_marker(input).ok().map(|(_, it)| it);
        assert_eq2!(it, expected.map(RgbTriple::from));
    }

    #[test_case("255, 10, 3", Some("255, 10, 3"))]
    #[test_case("255 10 3", Some("255 10 3"))]
    #[test_case("255,10,3", Some("255,10,3"))]
    #[test_case("255,,10,3", Some("255,,10,3"))]
    #[test_case("255, 10, 3abc", Some("255, 10, 3"))]
    #[test_case("1, 2, 3, 4", Some("1, 2, 3"))]
    #[test_case("10, 10", None)]
    #[test_case("1000, 1, 1", None)]
    #[test_case("255,  , 10, 3", None)]
    #[test_case("120, 50%, 50%", None)]
    fn test_match_rgb_prefix(input: &str, expected: Option<&str>) {
        let it = match_rgb_prefix(input).ok().map(|(_, it)| it);
        assert_eq2!(it, expected);
    }

    #[test_case("120, 50%, 50%", Some("120, 50%, 50%"))]
    #[test_case("120 0.5 0.25", Some("120 0.5 0.25"))]
    #[test_case("120,1.0,100%", Some("120,1.0,100%"))]
    #[test_case("120, 50%, 0.555", Some("120, 50%, 0.55"))]
    #[test_case("120, 2.0, 50%", None)]
    #[test_case("120, 50, 50", None)]
    #[test_case("120, 50%", None)]
    fn test_match_hsl_prefix(input: &str, expected: Option<&str>) {
        let it = match_hsl_prefix(input).ok().map(|(_, it)| it);
        assert_eq2!(it, expected);
    }

    #[test_case("255, 10, 3", &["255", "10", "3"])]
    #[test_case("255 10 3", &["255", "10", "3"])]
    #[test_case("255,10,3", &["255", "10", "3"])]
    #[test_case("255,,10,3", &["255", "", "10", "3"])]
    #[test_case("255 ,10, 3", &["255", "", "10", "3"])]
    #[test_case("255, 10, 3abc", &["255", "10", "3abc"])]
    fn test_split_components(input: &str, expected: &[&str]) {
        let it = split_components(input);
        assert_eq2!(it.as_slice(), expected);
    }
}
