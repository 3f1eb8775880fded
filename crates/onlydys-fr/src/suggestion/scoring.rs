// Sub-scores of the weighted suggestion ranking

use onlydys_core::entry::DictionaryEntry;
use onlydys_core::enums::GrammarTag;

use crate::distance::{distance, similarity};
use crate::french::constants::PHONETIC_CODE_LEN;

/// Weight of the phonetic sub-score in the final score.
pub const PHONETIC_WEIGHT: f64 = 0.40;
/// Weight of the orthographic sub-score in the final score.
pub const ORTHOGRAPHIC_WEIGHT: f64 = 0.30;
/// Weight of the semantic sub-score in the final score.
pub const SEMANTIC_WEIGHT: f64 = 0.30;

/// Share of corpus frequency inside the semantic sub-score.
const FREQUENCY_WEIGHT: f64 = 0.7;
/// Share of the grammatical context bonus inside the semantic sub-score.
const CONTEXT_WEIGHT: f64 = 0.3;

/// `1 - distance / 4` between two phonetic codes.
pub fn phonetic_score(typed_code: &str, candidate_code: &str) -> f64 {
    1.0 - distance(typed_code, candidate_code) as f64 / PHONETIC_CODE_LEN as f64
}

/// Case-insensitive orthographic similarity.
pub fn orthographic_score(typed: &str, candidate: &str) -> f64 {
    similarity(&typed.to_lowercase(), &candidate.to_lowercase())
}

/// Category expected after a word of the given category.
///
/// A determiner or an adjective announces a noun; a preposition announces
/// a verb (infinitive: "pour manger").
pub fn expected_next_tag(preceding: GrammarTag) -> Option<GrammarTag> {
    match preceding {
        GrammarTag::Det | GrammarTag::Adj => Some(GrammarTag::Nom),
        GrammarTag::Pre => Some(GrammarTag::Ver),
        _ => None,
    }
}

/// `0.7 * frequency + 0.3 * context`, where context is 1 when the
/// candidate has the expected category.
pub fn semantic_score(candidate: &DictionaryEntry, expected: Option<GrammarTag>) -> f64 {
    let context = match expected {
        Some(tag) if candidate.grammar_tag == tag => 1.0,
        _ => 0.0,
    };
    FREQUENCY_WEIGHT * candidate.normalized_frequency + CONTEXT_WEIGHT * context
}

/// Weighted sum of the three sub-scores.
pub fn final_score(phonetic: f64, orthographic: f64, semantic: f64) -> f64 {
    PHONETIC_WEIGHT * phonetic + ORTHOGRAPHIC_WEIGHT * orthographic + SEMANTIC_WEIGHT * semantic
}
