// Dictionary entry record as stored in the dictionary file

use serde::{Deserialize, Serialize};

use crate::enums::{GrammarTag, ParseGrammarTagError};

/// One word of the French dictionary.
///
/// Field names on the wire follow the dictionary file (`w`, `p`, `g`,
/// `frequence_norm`, `i`). The phonetic code may be missing in the file;
/// the dictionary fills it in when it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// The word, as written.
    #[serde(rename = "w")]
    pub word: String,

    /// Four-character phonetic code. Empty until computed.
    #[serde(rename = "p", default)]
    pub phonetic_code: String,

    /// Part-of-speech category.
    #[serde(rename = "g")]
    pub grammar_tag: GrammarTag,

    /// Corpus frequency scaled to `[0, 1]`.
    #[serde(rename = "frequence_norm", default)]
    pub normalized_frequency: f64,

    /// Pictogram reference, if the word has one.
    #[serde(rename = "i", default, skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
}

impl DictionaryEntry {
    /// Create an entry without a phonetic code or illustration.
    pub fn new(word: impl Into<String>, grammar_tag: GrammarTag, normalized_frequency: f64) -> Self {
        Self {
            word: word.into(),
            phonetic_code: String::new(),
            grammar_tag,
            normalized_frequency,
            illustration: None,
        }
    }

    /// Create an entry from a raw tag string such as `"ART:def"`.
    pub fn parse(
        word: impl Into<String>,
        tag: &str,
        normalized_frequency: f64,
    ) -> Result<Self, ParseGrammarTagError> {
        Ok(Self::new(word, tag.parse()?, normalized_frequency))
    }

    /// Set the phonetic code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.phonetic_code = code.into();
        self
    }

    /// Set the illustration reference.
    pub fn with_illustration(mut self, illustration: impl Into<String>) -> Self {
        self.illustration = Some(illustration.into());
        self
    }
}
