// Word segmentation for reading aids
//
//   - `phoneme`: grapheme-level phoneme tokens (longest grapheme table match)
//   - `syllable`: groups phonemes around vowel nuclei
//   - `silent`: trailing silent letters
//
// All three work on a single word; splitting text into words is the
// tokenizer's job.

pub mod phoneme;
pub mod silent;
pub mod syllable;

use serde::Serialize;

pub use phoneme::{PhonemeSpan, PhonemeToken, phoneme_kind, segment, segment_phonemes};
pub use silent::detect_silent_letters;
pub use syllable::segment_syllables;

/// Full analysis of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    pub original: String,
    pub phonemes: Vec<String>,
    pub syllables: Vec<String>,
    pub silent_letters: Vec<usize>,
}

/// Run every segmenter on a word.
pub fn analyze_word(word: &str) -> WordAnalysis {
    WordAnalysis {
        original: word.to_string(),
        phonemes: segment_phonemes(word),
        syllables: segment_syllables(word),
        silent_letters: detect_silent_letters(word),
    }
}
