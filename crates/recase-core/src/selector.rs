// Recase Selector
// Names the conversion the TransformEngine applies to a piece of text

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One of the supported text conversions.
///
/// The string form is the kebab-case name (`upper`, `morse-decode`, ...). Only
/// exact names parse; anything else is rejected by [`std::str::FromStr`] and
/// treated as an identity conversion by [`crate::transform_named`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Selector {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Snake,
    Kebab,
    Alternating,
    Inverse,
    Leetspeak,
    Vaporwave,
    Morse,
    MorseDecode,
}

impl Selector {
    /// Every selector, in presentation order.
    pub const ALL: [Selector; 13] = [
        Selector::Upper,
        Selector::Lower,
        Selector::Title,
        Selector::Sentence,
        Selector::Camel,
        Selector::Snake,
        Selector::Kebab,
        Selector::Alternating,
        Selector::Inverse,
        Selector::Leetspeak,
        Selector::Vaporwave,
        Selector::Morse,
        Selector::MorseDecode,
    ];

    /// Look up a selector by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// The wire name (`"morse-decode"`).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Human readable label, written in the style it produces.
    pub fn label(self) -> &'static str {
        match self {
            Selector::Upper => "UPPERCASE",
            Selector::Lower => "lowercase",
            Selector::Title => "Title Case",
            Selector::Sentence => "Sentence case",
            Selector::Camel => "camelCase",
            Selector::Snake => "snake_case",
            Selector::Kebab => "kebab-case",
            Selector::Alternating => "aLtErNaTiNg",
            Selector::Inverse => "InVeRsE",
            Selector::Leetspeak => "L33T 5P34K",
            Selector::Vaporwave => "V A P O R W A V E",
            Selector::Morse => "Text → Morse",
            Selector::MorseDecode => "Morse → Text",
        }
    }

    /// Position of this selector in [`Selector::ALL`].
    pub fn index(self) -> usize {
        Self::iter().position(|s| s == self).unwrap_or(0)
    }

    /// True for the two Morse conversions, which change the alphabet of the text
    /// rather than its casing.
    pub fn is_morse(self) -> bool {
        matches!(self, Selector::Morse | Selector::MorseDecode)
    }
}
