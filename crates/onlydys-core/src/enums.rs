// Shared enums: TokenType, GrammarTag, PhonemeKind, ConfusionType

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token types for string tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text.
    None,
    /// Word token.
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Anything else (digits, symbols, emoji).
    Unknown,
}

// ---------------------------------------------------------------------------
// GrammarTag
// ---------------------------------------------------------------------------

/// Part-of-speech category stored in the dictionary.
///
/// Dictionary files carry Lexique-style tags (`NOM`, `VER`, `ART:def`,
/// `PRO:per`, ...). Only the part before `:` matters, and a few source tags
/// fold into the nine categories the colorizer knows about. Any other
/// category (`LIA`, ...) becomes [`GrammarTag::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum GrammarTag {
    /// Noun.
    Nom,
    /// Verb (auxiliaries included).
    Ver,
    /// Adjective.
    Adj,
    /// Adverb.
    Adv,
    /// Pronoun.
    Pro,
    /// Determiner / article.
    Det,
    /// Preposition.
    Pre,
    /// Conjunction.
    Con,
    /// Interjection / onomatopoeia.
    Int,
    /// Any other category. Never colored, never expected by context.
    Other,
}

impl GrammarTag {
    /// The nine colored tags, in display order.
    pub const ALL: [GrammarTag; 9] = [
        GrammarTag::Nom,
        GrammarTag::Ver,
        GrammarTag::Adj,
        GrammarTag::Adv,
        GrammarTag::Pro,
        GrammarTag::Det,
        GrammarTag::Pre,
        GrammarTag::Con,
        GrammarTag::Int,
    ];

    /// Canonical three-letter code.
    pub fn as_str(self) -> &'static str {
        match self {
            GrammarTag::Nom => "NOM",
            GrammarTag::Ver => "VER",
            GrammarTag::Adj => "ADJ",
            GrammarTag::Adv => "ADV",
            GrammarTag::Pro => "PRO",
            GrammarTag::Det => "DET",
            GrammarTag::Pre => "PRE",
            GrammarTag::Con => "CON",
            GrammarTag::Int => "INT",
            GrammarTag::Other => "OTHER",
        }
    }

    /// French label shown in the grammar legend.
    pub fn label(self) -> &'static str {
        match self {
            GrammarTag::Nom => "Nom",
            GrammarTag::Ver => "Verbe",
            GrammarTag::Adj => "Adjectif",
            GrammarTag::Adv => "Adverbe",
            GrammarTag::Pro => "Pronom",
            GrammarTag::Det => "D\u{00E9}terminant",
            GrammarTag::Pre => "Pr\u{00E9}position",
            GrammarTag::Con => "Conjonction",
            GrammarTag::Int => "Interjection",
            GrammarTag::Other => "Autre",
        }
    }
}

impl fmt::Display for GrammarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a grammar tag string is blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing grammar tag: {0:?}")]
pub struct ParseGrammarTagError(pub String);

impl FromStr for GrammarTag {
    type Err = ParseGrammarTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let head = s.split(':').next().unwrap_or("").trim();
        if head.is_empty() {
            return Err(ParseGrammarTagError(s.to_string()));
        }
        let tag = match head.to_ascii_uppercase().as_str() {
            "NOM" => GrammarTag::Nom,
            "VER" | "AUX" => GrammarTag::Ver,
            "ADJ" => GrammarTag::Adj,
            "ADV" => GrammarTag::Adv,
            "PRO" => GrammarTag::Pro,
            "DET" | "ART" => GrammarTag::Det,
            "PRE" | "PRP" => GrammarTag::Pre,
            "CON" => GrammarTag::Con,
            "INT" | "ONO" => GrammarTag::Int,
            _ => GrammarTag::Other,
        };
        Ok(tag)
    }
}

impl TryFrom<String> for GrammarTag {
    type Error = ParseGrammarTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// PhonemeKind
// ---------------------------------------------------------------------------

/// Classification of a phoneme token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhonemeKind {
    Vowel,
    Consonant,
    SemiConsonant,
    Other,
}

// ---------------------------------------------------------------------------
// ConfusionType
// ---------------------------------------------------------------------------

/// Why a misspelling resembles a candidate correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfusionType {
    /// Same phonetic code, different spelling.
    Homophone,
    /// Mirror-letter swap (b/d, p/q, n/u).
    Visual,
    /// Voicing swap (f/v, s/z).
    Phonetic,
    /// Plural or conjugation ending mismatch.
    Morphological,
    Unknown,
}

impl ConfusionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfusionType::Homophone => "Homophone",
            ConfusionType::Visual => "Visual",
            ConfusionType::Phonetic => "Phonetic",
            ConfusionType::Morphological => "Morphological",
            ConfusionType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConfusionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
