// Immutable French dictionary with word and phonetic-code indexes
//
// Built once from the records of the dictionary file, then only read.
// Sharing across threads is a matter of wrapping it in an `Arc`.

use hashbrown::HashMap;
use onlydys_core::entry::DictionaryEntry;
use onlydys_core::enums::{GrammarTag, ParseGrammarTagError};
use tracing::debug;

use crate::french::constants::PHONETIC_CODE_LEN;
use crate::morphology::Lexicon;
use crate::phonetic::encode;

/// Error type for dictionary construction failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// An entry has an empty (or blank) word.
    #[error("entry {index} has an empty word")]
    EmptyWord { index: usize },

    /// A frequency lies outside `[0, 1]` or is not a number.
    #[error("frequency of {word:?} is out of range: {value}")]
    FrequencyOutOfRange { word: String, value: f64 },

    /// A phonetic code is present but does not have four characters.
    #[error("phonetic code of {word:?} is invalid: {code:?}")]
    InvalidPhoneticCode { word: String, code: String },

    /// A grammar tag is blank.
    #[error(transparent)]
    MissingTag(#[from] ParseGrammarTagError),

    /// A line of a tab-separated dictionary could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Read-only French dictionary.
///
/// Entries keep their file order, which the ranker relies on for stable
/// tie-breaking. Word lookups are case-insensitive and return the first
/// entry of a word.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    /// Lowercased word -> index of its first entry.
    by_word: HashMap<String, usize>,
    /// Phonetic code -> indexes of its entries, ascending.
    by_code: HashMap<String, Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary, validating every entry and computing missing
    /// phonetic codes.
    pub fn new(entries: Vec<DictionaryEntry>) -> Result<Self, DictionaryError> {
        let mut entries = entries;
        let mut by_word = HashMap::with_capacity(entries.len());
        let mut by_code: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, entry) in entries.iter_mut().enumerate() {
            if entry.word.trim().is_empty() {
                return Err(DictionaryError::EmptyWord { index });
            }
            let freq = entry.normalized_frequency;
            if !(0.0..=1.0).contains(&freq) {
                return Err(DictionaryError::FrequencyOutOfRange {
                    word: entry.word.clone(),
                    value: freq,
                });
            }
            if entry.phonetic_code.is_empty() {
                entry.phonetic_code = encode(&entry.word);
            } else if entry.phonetic_code.chars().count() != PHONETIC_CODE_LEN {
                return Err(DictionaryError::InvalidPhoneticCode {
                    word: entry.word.clone(),
                    code: entry.phonetic_code.clone(),
                });
            }

            by_word.entry(entry.word.to_lowercase()).or_insert(index);
            by_code
                .entry(entry.phonetic_code.clone())
                .or_default()
                .push(index);
        }

        debug!(
            entries = entries.len(),
            words = by_word.len(),
            codes = by_code.len(),
            "dictionary built"
        );

        Ok(Self {
            entries,
            by_word,
            by_code,
        })
    }

    /// Parse a tab-separated dictionary: `word<TAB>tag<TAB>frequency[<TAB>code]`.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_tsv(text: &str) -> Result<Self, DictionaryError> {
        let mut entries = Vec::new();
        for (line_index, line) in text.lines().enumerate() {
            let line_no = line_index + 1;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 {
                return Err(DictionaryError::Malformed {
                    line: line_no,
                    reason: format!("expected at least 3 fields, found {}", fields.len()),
                });
            }
            let frequency: f64 = fields[2].trim().parse().map_err(|_| DictionaryError::Malformed {
                line: line_no,
                reason: format!("invalid frequency {:?}", fields[2]),
            })?;
            let mut entry = DictionaryEntry::parse(fields[0].trim(), fields[1].trim(), frequency)?;
            if let Some(code) = fields.get(3) {
                entry.phonetic_code = code.trim().to_string();
            }
            entries.push(entry);
        }
        Self::new(entries)
    }

    /// An empty dictionary.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct phonetic codes.
    pub fn code_count(&self) -> usize {
        self.by_code.len()
    }

    /// First entry of a word, case-insensitive.
    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        self.by_word
            .get(word.to_lowercase().as_str())
            .map(|&index| &self.entries[index])
    }

    /// Entries whose code is within `max_distance` edits of `code`, in
    /// dictionary order.
    ///
    /// Codes are compared once per distinct code, not once per entry.
    pub fn near_code(&self, code: &str, max_distance: usize) -> Vec<&DictionaryEntry> {
        let mut indexes: Vec<usize> = self
            .by_code
            .iter()
            .filter(|(candidate, _)| crate::distance::distance(code, candidate) <= max_distance)
            .flat_map(|(_, indexes)| indexes.iter().copied())
            .collect();
        indexes.sort_unstable();
        indexes.into_iter().map(|index| &self.entries[index]).collect()
    }

    /// Entries sharing exactly `code`, in dictionary order.
    pub fn with_code(&self, code: &str) -> impl Iterator<Item = &DictionaryEntry> {
        self.by_code
            .get(code)
            .into_iter()
            .flatten()
            .map(|&index| &self.entries[index])
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    fn grammar_tag(&self, word: &str) -> Option<GrammarTag> {
        self.by_word
            .get(word)
            .map(|&index| self.entries[index].grammar_tag)
    }
}
