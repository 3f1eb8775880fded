// Syllable segmentation: groups phoneme tokens around vowel nuclei

use std::ops::Range;

use onlydys_core::enums::PhonemeKind;
use onlydys_core::normalize::normalize_word;

use super::phoneme::{PhonemeSpan, segment_spans};

/// Group phonemes into syllables, returning phoneme index ranges.
///
/// Each vowel closes a syllable. What follows decides where the boundary
/// falls:
/// - `V|V` or `V|#`: close right after the vowel.
/// - `V|CV` or `V|C#`: close after the vowel, the consonant opens the next one.
/// - `VC|C`: pull the first consonant into the current syllable.
///
/// A trailing group without a vowel joins the previous syllable.
pub fn group_syllables(kinds: &[PhonemeKind]) -> Vec<Range<usize>> {
    let is_vowel = |i: usize| kinds.get(i) == Some(&PhonemeKind::Vowel);
    let mut groups: Vec<Range<usize>> = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < kinds.len() {
        if kinds[i] == PhonemeKind::Vowel {
            let has_next = i + 1 < kinds.len();
            let has_next_next = i + 2 < kinds.len();
            if has_next && !is_vowel(i + 1) && has_next_next && !is_vowel(i + 2) {
                i += 1;
            }
            groups.push(start..i + 1);
            start = i + 1;
        }
        i += 1;
    }

    if start < kinds.len() {
        let has_vowel = kinds[start..].contains(&PhonemeKind::Vowel);
        match groups.last_mut() {
            Some(last) if !has_vowel => last.end = kinds.len(),
            _ => groups.push(start..kinds.len()),
        }
    }
    groups
}

/// Group phoneme spans into syllable character ranges.
pub fn syllable_ranges(spans: &[PhonemeSpan]) -> Vec<Range<usize>> {
    let kinds: Vec<PhonemeKind> = spans.iter().map(|span| span.kind).collect();
    group_syllables(&kinds)
        .into_iter()
        .map(|group| spans[group.start].start..spans[group.end - 1].end())
        .collect()
}

/// Segment a word into syllables.
///
/// The word is normalized first; the syllables concatenate back to the
/// concatenation of its phonemes.
pub fn segment_syllables(word: &str) -> Vec<String> {
    let normalized: Vec<char> = normalize_word(word).chars().collect();
    let spans = segment_spans(&normalized);
    syllable_ranges(&spans)
        .into_iter()
        .map(|range| normalized[range].iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::phoneme::segment_phonemes;

    #[test]
    fn open_syllables() {
        assert_eq!(segment_syllables("banane"), vec!["ba", "na", "ne"]);
        assert_eq!(segment_syllables("chateau"), vec!["cha", "teau"]);
    }

    #[test]
    fn consonant_cluster_split() {
        assert_eq!(segment_syllables("arbre"), vec!["ar", "bre"]);
    }

    #[test]
    fn trailing_consonants_join_previous_syllable() {
        assert_eq!(segment_syllables("lac"), vec!["lac"]);
        assert_eq!(segment_syllables("maison"), vec!["mai", "son"]);
    }

    #[test]
    fn vowel_hiatus() {
        assert_eq!(segment_syllables("oiseau"), vec!["oi", "seau"]);
    }

    #[test]
    fn word_without_vowel_is_one_syllable() {
        assert_eq!(segment_syllables("pff"), vec!["pff"]);
    }

    #[test]
    fn empty_word() {
        assert!(segment_syllables("").is_empty());
    }

    #[test]
    fn syllables_concatenate_to_phonemes() {
        for word in ["grenouille", "chocolat", "Parlaient", "\u{00E9}l\u{00E9}phant", "strict"] {
            assert_eq!(
                segment_syllables(word).concat(),
                segment_phonemes(word).concat(),
                "round trip failed for {word:?}"
            );
        }
    }

    #[test]
    fn group_syllables_on_kinds() {
        use PhonemeKind::{Consonant as C, Vowel as V};
        assert_eq!(group_syllables(&[C, V, C, C, V]), vec![0..3, 3..5]);
        assert_eq!(group_syllables(&[V, V]), vec![0..1, 1..2]);
        assert_eq!(group_syllables(&[]), Vec::<Range<usize>>::new());
    }
}
