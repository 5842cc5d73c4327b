//! Normalization options
//!
//! Eight independent flags. Anything a caller leaves unset falls back to
//! the default, never to `false`: use struct-update syntax, the
//! [`OptionsBuilder`], or a partial JSON object.

use crate::error::{NormalizeError, Result};
use std::fmt;
use std::str::FromStr;

/// Flags controlling which pipeline stages run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct NormalizeOptions {
    /// Remove harakat/tashkeel and fold alif, yeh and kaf variants (default: true)
    pub diacritics: bool,
    /// Remove Quranic markers such as end of ayah, rub el hizb, sajdah (default: true).
    ///
    /// Shares one stage with `small_letters`: either flag runs it.
    pub markers: bool,
    /// Remove ornate verse brackets and Arabic-Indic digits (default: true)
    pub verse_numbers: bool,
    /// Remove tatweel/kashida (default: true)
    pub tatweel: bool,
    /// Remove small/superscript Quranic letters (default: true).
    ///
    /// Shares one stage with `markers`: either flag runs it.
    pub small_letters: bool,
    /// Remove ASCII and Arabic sentence punctuation (default: true)
    pub punctuation: bool,
    /// Collapse whitespace runs to one space and trim (default: true)
    pub collapse_whitespace: bool,
    /// Strip hamza carriers and fold Uthmani spellings (default: false).
    ///
    /// Lossy; meant for fuzzy Uthmani-vs-modern matching only.
    pub strip_hamza: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            diacritics: true,
            markers: true,
            verse_numbers: true,
            tatweel: true,
            small_letters: true,
            punctuation: true,
            collapse_whitespace: true,
            strip_hamza: false,
        }
    }
}

impl NormalizeOptions {
    /// Every flag off; normalization becomes the identity
    pub fn none() -> Self {
        Self {
            diacritics: false,
            markers: false,
            verse_numbers: false,
            tatweel: false,
            small_letters: false,
            punctuation: false,
            collapse_whitespace: false,
            strip_hamza: false,
        }
    }

    /// Defaults plus hamza stripping, for Uthmani-vs-modern matching
    pub fn matching() -> Self {
        Self {
            strip_hamza: true,
            ..Default::default()
        }
    }

    /// Create a builder starting from the defaults
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Read a flag
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Diacritics => self.diacritics,
            Flag::Markers => self.markers,
            Flag::VerseNumbers => self.verse_numbers,
            Flag::Tatweel => self.tatweel,
            Flag::SmallLetters => self.small_letters,
            Flag::Punctuation => self.punctuation,
            Flag::CollapseWhitespace => self.collapse_whitespace,
            Flag::StripHamza => self.strip_hamza,
        }
    }

    /// Set a flag in place
    pub fn set(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::Diacritics => &mut self.diacritics,
            Flag::Markers => &mut self.markers,
            Flag::VerseNumbers => &mut self.verse_numbers,
            Flag::Tatweel => &mut self.tatweel,
            Flag::SmallLetters => &mut self.small_letters,
            Flag::Punctuation => &mut self.punctuation,
            Flag::CollapseWhitespace => &mut self.collapse_whitespace,
            Flag::StripHamza => &mut self.strip_hamza,
        };
        *slot = value;
    }

    /// Return a copy with one flag changed
    pub fn with(mut self, flag: Flag, value: bool) -> Self {
        self.set(flag, value);
        self
    }

    /// Parse a partial options object, e.g. `{"stripHamza": true}`.
    ///
    /// Missing fields keep their defaults and unknown fields are ignored.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(NormalizeError::from)
    }
}

/// Builder for [`NormalizeOptions`]
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    options: NormalizeOptions,
}

impl OptionsBuilder {
    /// Start from an explicit set of options instead of the defaults
    pub fn from_options(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Toggle diacritic removal
    pub fn diacritics(mut self, value: bool) -> Self {
        self.options.diacritics = value;
        self
    }

    /// Toggle Quranic marker removal
    pub fn markers(mut self, value: bool) -> Self {
        self.options.markers = value;
        self
    }

    /// Toggle verse number removal
    pub fn verse_numbers(mut self, value: bool) -> Self {
        self.options.verse_numbers = value;
        self
    }

    /// Toggle tatweel removal
    pub fn tatweel(mut self, value: bool) -> Self {
        self.options.tatweel = value;
        self
    }

    /// Toggle small letter removal
    pub fn small_letters(mut self, value: bool) -> Self {
        self.options.small_letters = value;
        self
    }

    /// Toggle punctuation removal
    pub fn punctuation(mut self, value: bool) -> Self {
        self.options.punctuation = value;
        self
    }

    /// Toggle whitespace collapsing
    pub fn collapse_whitespace(mut self, value: bool) -> Self {
        self.options.collapse_whitespace = value;
        self
    }

    /// Toggle hamza stripping
    pub fn strip_hamza(mut self, value: bool) -> Self {
        self.options.strip_hamza = value;
        self
    }

    /// Turn a flag on
    pub fn enable(mut self, flag: Flag) -> Self {
        self.options.set(flag, true);
        self
    }

    /// Turn a flag off
    pub fn disable(mut self, flag: Flag) -> Self {
        self.options.set(flag, false);
        self
    }

    /// Finish building
    pub fn build(self) -> NormalizeOptions {
        self.options
    }
}

/// Names of the eight option flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// See [`NormalizeOptions::diacritics`]
    Diacritics,
    /// See [`NormalizeOptions::markers`]
    Markers,
    /// See [`NormalizeOptions::verse_numbers`]
    VerseNumbers,
    /// See [`NormalizeOptions::tatweel`]
    Tatweel,
    /// See [`NormalizeOptions::small_letters`]
    SmallLetters,
    /// See [`NormalizeOptions::punctuation`]
    Punctuation,
    /// See [`NormalizeOptions::collapse_whitespace`]
    CollapseWhitespace,
    /// See [`NormalizeOptions::strip_hamza`]
    StripHamza,
}

impl Flag {
    /// All flags in declaration order
    pub const ALL: [Flag; 8] = [
        Flag::Diacritics,
        Flag::Markers,
        Flag::VerseNumbers,
        Flag::Tatweel,
        Flag::SmallLetters,
        Flag::Punctuation,
        Flag::CollapseWhitespace,
        Flag::StripHamza,
    ];

    /// The camelCase name used in options objects
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Diacritics => "diacritics",
            Flag::Markers => "markers",
            Flag::VerseNumbers => "verseNumbers",
            Flag::Tatweel => "tatweel",
            Flag::SmallLetters => "smallLetters",
            Flag::Punctuation => "punctuation",
            Flag::CollapseWhitespace => "collapseWhitespace",
            Flag::StripHamza => "stripHamza",
        }
    }

    /// Value the flag takes when the caller does not set it
    pub fn default_value(&self) -> bool {
        NormalizeOptions::default().get(*self)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = NormalizeError;

    /// Accepts camelCase, kebab-case and snake_case, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Flag::ALL
            .into_iter()
            .find(|flag| flag.as_str().eq_ignore_ascii_case(&key))
            .ok_or_else(|| NormalizeError::UnknownFlag {
                name: s.to_string(),
            })
    }
}
