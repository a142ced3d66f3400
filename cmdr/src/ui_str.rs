// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every user facing string of the front end, in each [`Language`]. The core library
//! only hands back a [`ColorError`] taxonomy; it is rendered here.

use colorconv_core::{ColorComponent, ColorError, ColorFormat, InlineString,
                     InvalidColorKind, OutOfRange};

use crate::{Language, inline_string};

/// Shown in place of a conversion when the input is empty.
pub const EMPTY_CONVERSION: &str = "...";

/// Renders labels and messages in a single [`Language`], which is passed in explicitly
/// (there is no global language state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiStrings {
    pub language: Language,
}

/// The rows printed for a converted color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Name,
    Hex,
    Rgb,
    Hsl,
    Complement,
}

impl From<Language> for UiStrings {
    fn from(language: Language) -> Self { Self { language } }
}

impl UiStrings {
    #[must_use]
    pub fn label(&self, label: Label) -> &'static str {
        match (label, self.language) {
            (Label::Name, Language::En) => "Name",
            (Label::Name, Language::Ro) => "Nume",
            (Label::Name, Language::Fr) => "Nom",
            (Label::Hex, _) => "Hex",
            (Label::Rgb, _) => "RGB",
            (Label::Hsl, _) => "HSL",
            (Label::Complement, Language::En) => "Complement",
            (Label::Complement, Language::Ro) => "Complementară",
            (Label::Complement, Language::Fr) => "Complémentaire",
        }
    }

    /// Printed in the name row when the color has no name in the table.
    #[must_use]
    pub fn no_name(&self) -> &'static str {
        match self.language {
            Language::En => "(no name)",
            Language::Ro => "(fără nume)",
            Language::Fr => "(sans nom)",
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self.language {
            Language::En => "Type a color, or :random, :complement, :quit",
            Language::Ro => "Scrie o culoare, sau :random, :complement, :quit",
            Language::Fr => "Tapez une couleur, ou :random, :complement, :quit",
        }
    }

    #[must_use]
    pub fn nothing_to_complement(&self) -> &'static str {
        match self.language {
            Language::En => "Convert a color first, then complement it",
            Language::Ro => "Convertește mai întâi o culoare, apoi complementeaz-o",
            Language::Fr => "Convertissez d'abord une couleur, puis complémentez-la",
        }
    }

    /// Printed right before the [`miette::Report`] of a failure that ends the app.
    #[must_use]
    pub fn unrecoverable_error_message(&self) -> &'static str {
        match self.language {
            Language::En => "Could not run colorconv due to the following problem",
            Language::Ro => "colorconv nu a putut rula din cauza următoarei probleme",
            Language::Fr => "colorconv n'a pas pu s'exécuter à cause du problème suivant",
        }
    }

    #[must_use]
    pub fn component(&self, component: ColorComponent) -> &'static str {
        use ColorComponent::{Blue, Green, Hue, Lightness, Red, Saturation};
        match (component, self.language) {
            (Red, Language::En) => "Red",
            (Red, Language::Ro) => "Roșu",
            (Red, Language::Fr) => "Rouge",
            (Green, Language::En) => "Green",
            (Green, Language::Ro) => "Verde",
            (Green, Language::Fr) => "Vert",
            (Blue, Language::En) => "Blue",
            (Blue, Language::Ro) => "Albastru",
            (Blue, Language::Fr) => "Bleu",
            (Hue, Language::En) => "Hue",
            (Hue, Language::Ro) => "Nuanță",
            (Hue, Language::Fr) => "Teinte",
            (Saturation, Language::En | Language::Fr) => "Saturation",
            (Saturation, Language::Ro) => "Saturație",
            (Lightness, Language::En) => "Lightness",
            (Lightness, Language::Ro) => "Luminozitate",
            (Lightness, Language::Fr) => "Luminosité",
        }
    }

    #[must_use]
    pub fn format(&self, format: ColorFormat) -> &'static str {
        match (format, self.language) {
            (ColorFormat::Literal, Language::En) => "a color name",
            (ColorFormat::Literal, Language::Ro) => "un nume de culoare",
            (ColorFormat::Literal, Language::Fr) => "un nom de couleur",
            (ColorFormat::Hex, Language::En) => "a hex color",
            (ColorFormat::Hex, Language::Ro) => "o culoare hex",
            (ColorFormat::Hex, Language::Fr) => "une couleur hex",
            (ColorFormat::Rgb, Language::En) => "an RGB color",
            (ColorFormat::Rgb, Language::Ro) => "o culoare RGB",
            (ColorFormat::Rgb, Language::Fr) => "une couleur RGB",
            (ColorFormat::Hsl, Language::En) => "an HSL color",
            (ColorFormat::Hsl, Language::Ro) => "o culoare HSL",
            (ColorFormat::Hsl, Language::Fr) => "une couleur HSL",
        }
    }

    /// One message per [`ColorError`] kind.
    #[must_use]
    pub fn error_message(&self, error: &ColorError) -> InlineString {
        match error {
            ColorError::NumericParse { token, component } => {
                let component = self.component(*component);
                match self.language {
                    Language::En => inline_string!(
                        "Could not read '{token}' as a number for the {component} component"
                    ),
                    Language::Ro => inline_string!(
                        "Nu pot citi '{token}' ca număr pentru componenta {component}"
                    ),
                    Language::Fr => inline_string!(
                        "Impossible de lire '{token}' comme un nombre pour la composante {component}"
                    ),
                }
            }
            ColorError::InvalidColor { kind, .. } => self.invalid_color_message(kind),
        }
    }

    fn invalid_color_message(&self, kind: &InvalidColorKind) -> InlineString {
        match kind {
            InvalidColorKind::UnrecognizedFormat => match self.language {
                Language::En => "The input doesn't fit any of the known color patterns".into(),
                Language::Ro => "Textul nu corespunde niciunui format de culoare cunoscut".into(),
                Language::Fr => "Le texte ne correspond à aucun format de couleur connu".into(),
            },
            InvalidColorKind::OutOfRange(out_of_range) => {
                self.out_of_range_message(out_of_range)
            }
            InvalidColorKind::ComponentCount { format, found } => {
                let format = self.format(*format);
                match self.language {
                    Language::En => inline_string!(
                        "This looks like {format} but it has {found} components instead of 3"
                    ),
                    Language::Ro => inline_string!(
                        "Pare {format}, dar are {found} componente în loc de 3"
                    ),
                    Language::Fr => inline_string!(
                        "Cela ressemble à {format}, mais il y a {found} composantes au lieu de 3"
                    ),
                }
            }
            InvalidColorKind::NotCanonicalHsl => match self.language {
                Language::En => "This is not a canonical HSL color, eg: `218, 79%, 66%`".into(),
                Language::Ro => {
                    "Aceasta nu este o culoare HSL canonică, ex: `218, 79%, 66%`".into()
                }
                Language::Fr => {
                    "Ce n'est pas une couleur HSL canonique, ex : `218, 79%, 66%`".into()
                }
            },
        }
    }

    fn out_of_range_message(&self, out_of_range: &OutOfRange) -> InlineString {
        let (component, value, range): (_, InlineString, _) = match out_of_range {
            OutOfRange::RgbChannel { channel, value } => {
                (self.component(*channel), inline_string!("{value}"), "0-255")
            }
            OutOfRange::Hue { value } => {
                (self.component(ColorComponent::Hue), inline_string!("{value}"), "0-360")
            }
            OutOfRange::Fraction { component, value } => {
                let component = self.component(*component);
                return match self.language {
                    Language::En => inline_string!(
                        "The {component} value {value} is not a percentage or in the 0.0-1.0 range"
                    ),
                    Language::Ro => inline_string!(
                        "Valoarea {value} pentru {component} nu este un procent sau în intervalul 0.0-1.0"
                    ),
                    Language::Fr => inline_string!(
                        "La valeur {value} pour {component} n'est pas un pourcentage ou dans l'intervalle 0.0-1.0"
                    ),
                };
            }
        };

        match self.language {
            Language::En => {
                inline_string!("The {component} value {value} is not in the {range} range")
            }
            Language::Ro => inline_string!(
                "Valoarea {value} pentru {component} nu este în intervalul {range}"
            ),
            Language::Fr => inline_string!(
                "La valeur {value} pour {component} n'est pas dans l'intervalle {range}"
            ),
        }
    }
}
