// Silent letter detection for French word endings
//
// Heuristic only: endings are matched on spelling, not on grammar, so the
// "ent" of "moment" is flagged the same way as the one of "parlent".

use onlydys_core::character::simple_lower;

use crate::french::constants::SILENT_ENDINGS;

/// Character indices of the trailing silent letters of a word, ascending.
///
/// The first ending of [`SILENT_ENDINGS`] that matches while leaving a
/// non-empty stem marks every index from its start to the end of the word.
/// Indices refer to the characters of `word` as given.
pub fn detect_silent_letters(word: &str) -> Vec<usize> {
    let lower: Vec<char> = word.chars().map(simple_lower).collect();
    detect_silent_chars(&lower)
}

/// [`detect_silent_letters`] over an already-lowercased char slice.
pub fn detect_silent_chars(lower: &[char]) -> Vec<usize> {
    for ending in SILENT_ENDINGS {
        let ending: Vec<char> = ending.chars().collect();
        if lower.len() > ending.len() && lower.ends_with(&ending) {
            return (lower.len() - ending.len()..lower.len()).collect();
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_e() {
        assert_eq!(detect_silent_letters("pomme"), vec![4]);
    }

    #[test]
    fn plural_es() {
        assert_eq!(detect_silent_letters("pommes"), vec![4, 5]);
    }

    #[test]
    fn verb_ent() {
        assert_eq!(detect_silent_letters("parlent"), vec![4, 5, 6]);
        // Approximate by nature: "moment" is flagged too.
        assert_eq!(detect_silent_letters("moment"), vec![3, 4, 5]);
    }

    #[test]
    fn single_consonant_endings() {
        assert_eq!(detect_silent_letters("chat"), vec![3]);
        assert_eq!(detect_silent_letters("nez"), vec![2]);
        assert_eq!(detect_silent_letters("prix"), vec![3]);
        assert_eq!(detect_silent_letters("LOUP"), vec![3]);
    }

    #[test]
    fn stem_must_not_be_empty() {
        assert!(detect_silent_letters("s").is_empty());
        assert!(detect_silent_letters("e").is_empty());
        // "es" would leave no stem, but "s" still leaves "e".
        assert_eq!(detect_silent_letters("es"), vec![1]);
    }

    #[test]
    fn no_silent_letter() {
        assert!(detect_silent_letters("ami").is_empty());
        assert!(detect_silent_letters("").is_empty());
    }
}
