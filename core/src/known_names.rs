// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The Known Name Table: the 140 color names the detector recognizes, w/ their RGB
//! values.
//!
//! The table is ordered by RGB value, and every entry has its own RGB triple. Reverse
//! lookup w/ [`lookup_rgb`] returns the first match.

use crate::{InlineString, RgbTriple};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct KnownColorName {
    /// Camel cased spelling, eg: `CornflowerBlue`.
    pub canonical: &'static str,
    pub rgb: RgbTriple,
}

impl KnownColorName {
    const fn new(canonical: &'static str, red: u8, green: u8, blue: u8) -> Self {
        Self {
            canonical,
            rgb: RgbTriple::from_u8(red, green, blue),
        }
    }

    /// Eg: `CornflowerBlue` → `Cornflower Blue`.
    #[must_use]
    pub fn display_name(&self) -> InlineString { format_display_name(self.canonical) }
}

pub const KNOWN_COLOR_NAMES: [KnownColorName; 140] = [
    KnownColorName::new("Black", 0, 0, 0),
    KnownColorName::new("Navy", 0, 0, 128),
    KnownColorName::new("DarkBlue", 0, 0, 139),
    KnownColorName::new("MediumBlue", 0, 0, 205),
    KnownColorName::new("Blue", 0, 0, 255),
    KnownColorName::new("DarkGreen", 0, 100, 0),
    KnownColorName::new("Green", 0, 128, 0),
    KnownColorName::new("DarkCyan", 0, 139, 139),
    KnownColorName::new("DeepSkyBlue", 0, 191, 255),
    KnownColorName::new("DarkTurquoise", 0, 206, 209),
    KnownColorName::new("MediumSpringGreen", 0, 250, 154),
    KnownColorName::new("Lime", 0, 255, 0),
    KnownColorName::new("SpringGreen", 0, 255, 127),
    KnownColorName::new("Cyan", 0, 255, 255),
    KnownColorName::new("MidnightBlue", 25, 25, 112),
    KnownColorName::new("DodgerBlue", 30, 144, 255),
    KnownColorName::new("LightSeaGreen", 32, 178, 170),
    KnownColorName::new("ForestGreen", 34, 139, 34),
    KnownColorName::new("SeaGreen", 46, 139, 87),
    KnownColorName::new("DarkSlateGray", 47, 79, 79),
    KnownColorName::new("LimeGreen", 50, 205, 50),
    KnownColorName::new("MediumSeaGreen", 60, 179, 113),
    KnownColorName::new("Turquoise", 64, 224, 208),
    KnownColorName::new("RoyalBlue", 65, 105, 225),
    KnownColorName::new("SteelBlue", 70, 130, 180),
    KnownColorName::new("DarkSlateBlue", 72, 61, 139),
    KnownColorName::new("MediumTurquoise", 72, 209, 204),
    KnownColorName::new("Indigo", 75, 0, 130),
    KnownColorName::new("DarkOliveGreen", 85, 107, 47),
    KnownColorName::new("CadetBlue", 95, 158, 160),
    KnownColorName::new("CornflowerBlue", 100, 149, 237),
    KnownColorName::new("MediumAquamarine", 102, 205, 170),
    KnownColorName::new("DimGray", 105, 105, 105),
    KnownColorName::new("SlateBlue", 106, 90, 205),
    KnownColorName::new("OliveDrab", 107, 142, 35),
    KnownColorName::new("SlateGray", 112, 128, 144),
    KnownColorName::new("LightSlateGray", 119, 136, 153),
    KnownColorName::new("MediumSlateBlue", 123, 104, 238),
    KnownColorName::new("LawnGreen", 124, 252, 0),
    KnownColorName::new("Chartreuse", 127, 255, 0),
    KnownColorName::new("Aquamarine", 127, 255, 212),
    KnownColorName::new("Maroon", 128, 0, 0),
    KnownColorName::new("Purple", 128, 0, 128),
    KnownColorName::new("Olive", 128, 128, 0),
    KnownColorName::new("Gray", 128, 128, 128),
    KnownColorName::new("LightSlateBlue", 132, 112, 255),
    KnownColorName::new("SkyBlue", 135, 206, 235),
    KnownColorName::new("LightSkyBlue", 135, 206, 250),
    KnownColorName::new("BlueViolet", 138, 43, 226),
    KnownColorName::new("DarkRed", 139, 0, 0),
    KnownColorName::new("DarkMagenta", 139, 0, 139),
    KnownColorName::new("SaddleBrown", 139, 69, 19),
    KnownColorName::new("DarkSeaGreen", 143, 188, 143),
    KnownColorName::new("LightGreen", 144, 238, 144),
    KnownColorName::new("MediumPurple", 147, 112, 219),
    KnownColorName::new("DarkViolet", 148, 0, 211),
    KnownColorName::new("PaleGreen", 152, 251, 152),
    KnownColorName::new("DarkOrchid", 153, 50, 204),
    KnownColorName::new("YellowGreen", 154, 205, 50),
    KnownColorName::new("Sienna", 160, 82, 45),
    KnownColorName::new("Brown", 165, 42, 42),
    KnownColorName::new("DarkGray", 169, 169, 169),
    KnownColorName::new("LightBlue", 173, 216, 230),
    KnownColorName::new("GreenYellow", 173, 255, 47),
    KnownColorName::new("PaleTurquoise", 175, 238, 238),
    KnownColorName::new("LightSteelBlue", 176, 196, 222),
    KnownColorName::new("PowderBlue", 176, 224, 230),
    KnownColorName::new("FireBrick", 178, 34, 34),
    KnownColorName::new("DarkGoldenrod", 184, 134, 11),
    KnownColorName::new("MediumOrchid", 186, 85, 211),
    KnownColorName::new("RosyBrown", 188, 143, 143),
    KnownColorName::new("DarkKhaki", 189, 183, 107),
    KnownColorName::new("Silver", 192, 192, 192),
    KnownColorName::new("MediumVioletRed", 199, 21, 133),
    KnownColorName::new("IndianRed", 205, 92, 92),
    KnownColorName::new("Peru", 205, 133, 63),
    KnownColorName::new("VioletRed", 208, 32, 144),
    KnownColorName::new("Chocolate", 210, 105, 30),
    KnownColorName::new("Tan", 210, 180, 140),
    KnownColorName::new("LightGray", 211, 211, 211),
    KnownColorName::new("Thistle", 216, 191, 216),
    KnownColorName::new("Orchid", 218, 112, 214),
    KnownColorName::new("Goldenrod", 218, 165, 32),
    KnownColorName::new("PaleVioletRed", 219, 112, 147),
    KnownColorName::new("Crimson", 220, 20, 60),
    KnownColorName::new("Gainsboro", 220, 220, 220),
    KnownColorName::new("Plum", 221, 160, 221),
    KnownColorName::new("Burlywood", 222, 184, 135),
    KnownColorName::new("LightCyan", 224, 255, 255),
    KnownColorName::new("Lavender", 230, 230, 250),
    KnownColorName::new("DarkSalmon", 233, 150, 122),
    KnownColorName::new("Violet", 238, 130, 238),
    KnownColorName::new("LightGoldenrod", 238, 221, 130),
    KnownColorName::new("PaleGoldenrod", 238, 232, 170),
    KnownColorName::new("LightCoral", 240, 128, 128),
    KnownColorName::new("Khaki", 240, 230, 140),
    KnownColorName::new("AliceBlue", 240, 248, 255),
    KnownColorName::new("Honeydew", 240, 255, 240),
    KnownColorName::new("Azure", 240, 255, 255),
    KnownColorName::new("SandyBrown", 244, 164, 96),
    KnownColorName::new("Wheat", 245, 222, 179),
    KnownColorName::new("Beige", 245, 245, 220),
    KnownColorName::new("WhiteSmoke", 245, 245, 245),
    KnownColorName::new("MintCream", 245, 255, 250),
    KnownColorName::new("GhostWhite", 248, 248, 255),
    KnownColorName::new("Salmon", 250, 128, 114),
    KnownColorName::new("AntiqueWhite", 250, 235, 215),
    KnownColorName::new("Linen", 250, 240, 230),
    KnownColorName::new("LightGoldenrodYellow", 250, 250, 210),
    KnownColorName::new("OldLace", 253, 245, 230),
    KnownColorName::new("Red", 255, 0, 0),
    KnownColorName::new("Magenta", 255, 0, 255),
    KnownColorName::new("DeepPink", 255, 20, 147),
    KnownColorName::new("OrangeRed", 255, 69, 0),
    KnownColorName::new("Tomato", 255, 99, 71),
    KnownColorName::new("HotPink", 255, 105, 180),
    KnownColorName::new("Coral", 255, 127, 80),
    KnownColorName::new("DarkOrange", 255, 140, 0),
    KnownColorName::new("LightSalmon", 255, 160, 122),
    KnownColorName::new("Orange", 255, 165, 0),
    KnownColorName::new("LightPink", 255, 182, 193),
    KnownColorName::new("Pink", 255, 192, 203),
    KnownColorName::new("Gold", 255, 215, 0),
    KnownColorName::new("PeachPuff", 255, 218, 185),
    KnownColorName::new("NavajoWhite", 255, 222, 173),
    KnownColorName::new("Moccasin", 255, 228, 181),
    KnownColorName::new("Bisque", 255, 228, 196),
    KnownColorName::new("MistyRose", 255, 228, 225),
    KnownColorName::new("BlanchedAlmond", 255, 235, 205),
    KnownColorName::new("PapayaWhip", 255, 239, 213),
    KnownColorName::new("LavenderBlush", 255, 240, 245),
    KnownColorName::new("Seashell", 255, 245, 238),
    KnownColorName::new("Cornsilk", 255, 248, 220),
    KnownColorName::new("LemonChiffon", 255, 250, 205),
    KnownColorName::new("FloralWhite", 255, 250, 240),
    KnownColorName::new("Snow", 255, 250, 250),
    KnownColorName::new("Yellow", 255, 255, 0),
    KnownColorName::new("LightYellow", 255, 255, 224),
    KnownColorName::new("Ivory", 255, 255, 240),
    KnownColorName::new("White", 255, 255, 255),
];

/// Case and punctuation insensitive lookup. Every character that is not an ASCII letter
/// is dropped before comparing, so `Cornflower Blue`, `cornflower-blue` and
/// `CORNFLOWERBLUE` all resolve to the same entry.
#[must_use]
pub fn lookup_name(input: &str) -> Option<&'static KnownColorName> {
    let key = input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<InlineString>();
    if key.is_empty() {
        return None;
    }
    KNOWN_COLOR_NAMES
        .iter()
        .find(|it| it.canonical.eq_ignore_ascii_case(&key))
}

/// First entry w/ the given RGB value.
#[must_use]
pub fn lookup_rgb(rgb: RgbTriple) -> Option<&'static KnownColorName> {
    KNOWN_COLOR_NAMES.iter().find(|it| it.rgb == rgb)
}

/// Insert a space before every uppercase letter that follows a word character, then
/// title case each word.
///
/// ```
/// use colorconv_core::format_display_name;
/// assert_eq!(format_display_name("LightGoldenrodYellow"), "Light Goldenrod Yellow");
/// assert_eq!(format_display_name("tan"), "Tan");
/// ```
#[must_use]
pub fn format_display_name(canonical: &str) -> InlineString {
    let mut acc = InlineString::new();
    let mut prev: Option<char> = None;

    for ch in canonical.chars() {
        let follows_word_char =
            prev.is_some_and(|prev| prev.is_alphanumeric() || prev == '_');
        if ch.is_uppercase() && follows_word_char {
            acc.push(' ');
        }

        let starts_word = !acc.chars().next_back().is_some_and(char::is_alphabetic);
        if starts_word {
            acc.extend(ch.to_uppercase());
        } else {
            acc.extend(ch.to_lowercase());
        }

        prev = Some(ch);
    }

    acc
}
