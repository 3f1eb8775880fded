// Colorization configuration: mode and options, validated once when parsed

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error type for configuration parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The mode name is not one of the known modes.
    #[error("unknown colorization mode: {0:?}")]
    UnknownMode(String),
}

/// How text is split and colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ColorMode {
    /// Leave the text as it is.
    #[default]
    None,
    /// Color words by part of speech.
    Grammar,
    /// Color each phoneme by a hash of its spelling (same phoneme, same color).
    Phonemes,
    /// Cycle colors over successive phonemes.
    AlternPhonemes,
    /// Alternate colors over the syllables of each word.
    Syllables,
    /// Gray out silent final letters.
    Silent,
    /// Cycle colors over letters.
    AlternLettres,
    /// Alternate colors over words.
    AlternMots,
    /// Color vowels.
    Vowels,
    /// Color consonants.
    Consonants,
    /// Color a user-chosen set of letters.
    Letters,
    /// Alternate the background of whole paragraphs.
    AlternLines,
}

impl ColorMode {
    pub const ALL: [ColorMode; 12] = [
        ColorMode::None,
        ColorMode::Grammar,
        ColorMode::Phonemes,
        ColorMode::AlternPhonemes,
        ColorMode::Syllables,
        ColorMode::Silent,
        ColorMode::AlternLettres,
        ColorMode::AlternMots,
        ColorMode::Vowels,
        ColorMode::Consonants,
        ColorMode::Letters,
        ColorMode::AlternLines,
    ];

    /// Mode name as used by the plugin.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::None => "none",
            ColorMode::Grammar => "grammar",
            ColorMode::Phonemes => "phonemes",
            ColorMode::AlternPhonemes => "alternphonemes",
            ColorMode::Syllables => "syllables",
            ColorMode::Silent => "silent",
            ColorMode::AlternLettres => "alternlettres",
            ColorMode::AlternMots => "alternmots",
            ColorMode::Vowels => "vowels",
            ColorMode::Consonants => "consonants",
            ColorMode::Letters => "letters",
            ColorMode::AlternLines => "alternlines",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

impl TryFrom<String> for ColorMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options shared by all modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorizeOptions {
    /// Mark syllable runs so the host draws arcs under them.
    pub show_arcs: bool,
    /// In phoneme and syllable modes, also gray out silent final letters.
    pub highlight_silent: bool,
    /// Color backgrounds with pastel tones and keep the text black.
    pub use_highlighting: bool,
    /// Letters highlighted by the `letters` mode (e.g. "bdpq").
    pub target_letters: Option<String>,
}

/// A complete colorization request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorizeConfig {
    pub mode: ColorMode,
    #[serde(default)]
    pub options: ColorizeOptions,
    /// Paragraph index used by `alternlines` when a single paragraph is
    /// processed on its own.
    #[serde(default)]
    pub line_index: usize,
}

impl ColorizeConfig {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: ColorizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Target letters of the `letters` mode, lowercased. Empty when unset.
    pub(crate) fn targets(&self) -> Vec<char> {
        self.options
            .target_letters
            .as_deref()
            .map(|letters| letters.to_lowercase().chars().collect())
            .unwrap_or_default()
    }
}
