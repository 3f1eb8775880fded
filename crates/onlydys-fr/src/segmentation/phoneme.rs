// Phoneme segmentation: splits a normalized word into grapheme-level phoneme tokens

use onlydys_core::character::{is_consonant, is_vowel};
use onlydys_core::enums::PhonemeKind;
use onlydys_core::normalize::normalize_word;

use crate::french::constants::{
    CONSONANT_GRAPHEMES, MULTI_PHONEMES, SEMI_CONSONANT_GRAPHEMES, VOWEL_GRAPHEMES,
};

/// A phoneme token: a substring of the normalized word and its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeToken {
    pub text: String,
    pub kind: PhonemeKind,
}

/// A phoneme located by character offset inside the segmented word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhonemeSpan {
    pub start: usize,
    pub len: usize,
    pub kind: PhonemeKind,
}

impl PhonemeSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Classify a phoneme string.
///
/// Multi-letter graphemes are looked up in the grapheme tables; single
/// letters fall back to vowel / consonant membership. Anything else is
/// [`PhonemeKind::Other`].
pub fn phoneme_kind(phoneme: &str) -> PhonemeKind {
    if phoneme.is_empty() {
        return PhonemeKind::Other;
    }
    let lower = phoneme.to_lowercase();
    let lower = lower.as_str();
    if VOWEL_GRAPHEMES.contains(&lower) {
        return PhonemeKind::Vowel;
    }
    if CONSONANT_GRAPHEMES.contains(&lower) {
        return PhonemeKind::Consonant;
    }
    if SEMI_CONSONANT_GRAPHEMES.contains(&lower) {
        return PhonemeKind::SemiConsonant;
    }

    let mut chars = lower.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_vowel(c) => PhonemeKind::Vowel,
        (Some(c), None) if is_consonant(c) => PhonemeKind::Consonant,
        _ => PhonemeKind::Other,
    }
}

/// Nasal graphemes end in `n`/`m` and are at most four letters; "gn" is a
/// consonant digraph, not a nasal.
fn is_nasal_candidate(grapheme: &str) -> bool {
    (grapheme.ends_with('n') || grapheme.ends_with('m'))
        && grapheme.chars().count() <= 4
        && grapheme != "gn"
}

/// Return the grapheme from [`MULTI_PHONEMES`] accepted at `pos`, if any.
fn match_grapheme(word: &[char], pos: usize) -> Option<&'static str> {
    for &grapheme in MULTI_PHONEMES {
        let len = grapheme.chars().count();
        if pos + len > word.len() || !grapheme.chars().eq(word[pos..pos + len].iter().copied()) {
            continue;
        }
        if is_nasal_candidate(grapheme) {
            if let Some(&next) = word.get(pos + len) {
                // A following vowel denasalizes ("ami"); a doubled n/m is
                // not nasal either ("pomme", "bonne").
                if is_vowel(next) || next == 'n' || next == 'm' {
                    continue;
                }
            }
        }
        return Some(grapheme);
    }
    None
}

/// Segment an already-normalized word (lowercase) into phoneme spans.
///
/// Spans are contiguous and cover the whole word. The scan never fails:
/// a position matching no grapheme becomes a one-character span.
pub fn segment_spans(word: &[char]) -> Vec<PhonemeSpan> {
    let mut spans = Vec::with_capacity(word.len());
    let mut pos = 0;
    while pos < word.len() {
        let (len, kind) = match match_grapheme(word, pos) {
            Some(grapheme) => (grapheme.chars().count(), phoneme_kind(grapheme)),
            None => {
                let mut buf = [0u8; 4];
                (1, phoneme_kind(word[pos].encode_utf8(&mut buf)))
            }
        };
        spans.push(PhonemeSpan {
            start: pos,
            len,
            kind,
        });
        pos += len;
    }
    spans
}

/// Segment a word into phoneme tokens.
///
/// The word is normalized first (lowercase, NFC); the token texts
/// concatenate back to that normalized form.
pub fn segment(word: &str) -> Vec<PhonemeToken> {
    let normalized: Vec<char> = normalize_word(word).chars().collect();
    segment_spans(&normalized)
        .into_iter()
        .map(|span| PhonemeToken {
            text: normalized[span.start..span.end()].iter().collect(),
            kind: span.kind,
        })
        .collect()
}

/// Segment a word into phoneme strings.
pub fn segment_phonemes(word: &str) -> Vec<String> {
    segment(word).into_iter().map(|token| token.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maison_uses_vowel_digraph_and_final_nasal() {
        assert_eq!(segment_phonemes("maison"), vec!["m", "ai", "s", "on"]);
    }

    #[test]
    fn ami_is_not_nasal() {
        assert_eq!(segment_phonemes("ami"), vec!["a", "m", "i"]);
    }

    #[test]
    fn doubled_nasal_consonant_is_not_nasal() {
        assert_eq!(segment_phonemes("pomme"), vec!["p", "o", "m", "m", "e"]);
    }

    #[test]
    fn trigraphs_and_digraphs() {
        assert_eq!(segment_phonemes("oiseau"), vec!["oi", "s", "eau"]);
        assert_eq!(segment_phonemes("chateau"), vec!["ch", "a", "t", "eau"]);
        assert_eq!(segment_phonemes("bain"), vec!["b", "ain"]);
        assert_eq!(segment_phonemes("famille"), vec!["f", "a", "m", "ill", "e"]);
    }

    #[test]
    fn nasal_before_consonant() {
        assert_eq!(segment_phonemes("enfant"), vec!["en", "f", "an", "t"]);
    }

    #[test]
    fn segmentation_normalizes_input() {
        assert_eq!(segment_phonemes("MAISON"), vec!["m", "ai", "s", "on"]);
        assert_eq!(segment_phonemes("cha\u{0302}teau"), vec!["ch", "\u{00E2}", "t", "eau"]);
    }

    #[test]
    fn empty_word() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn tokens_concatenate_to_normalized_word() {
        for word in ["grenouille", "Parlaient", "\u{0153}uvre", "soleil", "x-y", "gnome"] {
            let joined: String = segment_phonemes(word).concat();
            assert_eq!(joined, normalize_word(word), "round trip failed for {word:?}");
        }
    }

    #[test]
    fn kinds_are_assigned() {
        let tokens = segment("famille");
        let kinds: Vec<PhonemeKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PhonemeKind::Consonant,
                PhonemeKind::Vowel,
                PhonemeKind::Consonant,
                PhonemeKind::SemiConsonant,
                PhonemeKind::Vowel,
            ]
        );
    }

    #[test]
    fn vowel_digraph_wins_over_later_cluster() {
        // "ei" is listed before "eil", so "soleil" ends in "ei" + "l".
        assert_eq!(segment_phonemes("soleil"), vec!["s", "o", "l", "ei", "l"]);
    }

    #[test]
    fn phoneme_kind_lookup() {
        assert_eq!(phoneme_kind("eau"), PhonemeKind::Vowel);
        assert_eq!(phoneme_kind("CH"), PhonemeKind::Consonant);
        assert_eq!(phoneme_kind("ouil"), PhonemeKind::SemiConsonant);
        assert_eq!(phoneme_kind("\u{00E9}"), PhonemeKind::Vowel);
        assert_eq!(phoneme_kind("\u{00E7}"), PhonemeKind::Consonant);
        assert_eq!(phoneme_kind("-"), PhonemeKind::Other);
        assert_eq!(phoneme_kind(""), PhonemeKind::Other);
        assert_eq!(phoneme_kind("xy"), PhonemeKind::Other);
    }

    #[test]
    fn spans_are_contiguous() {
        let word: Vec<char> = "grenouille".chars().collect();
        let spans = segment_spans(&word);
        let mut expected = 0;
        for span in &spans {
            assert_eq!(span.start, expected);
            assert!(span.len > 0);
            expected = span.end();
        }
        assert_eq!(expected, word.len());
    }
}
