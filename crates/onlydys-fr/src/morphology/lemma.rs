// Best-effort French lemmatizer: strips inflectional endings and checks the
// result against a lexicon
//
// This is a suffix heuristic, not a morphological analyzer. It exists so
// that grammar colorization can find "mangez" under "manger".

use super::Lexicon;

/// Verb endings, tried in order: present, imperfect, future, conditional,
/// past participle, infinitive.
const VERB_ENDINGS: &[&str] = &[
    "ons", "ez", "ent", "es", "e", //
    "aient", "ions", "iez", "ais", "ait", //
    "eront", "erez", "erons", "eras", "era", "erai", //
    "ront", "rez", "rons", "ras", "ra", "rai", //
    "eraient", "erions", "eriez", "erais", "erait", //
    "raient", "rions", "riez", "rais", "rait", //
    "\u{00E9}s", "\u{00E9}es", "\u{00E9}e", "\u{00E9}", //
    "is", "it", "ies", "ie", //
    "us", "ue", "ues", "u", //
    "ir", "er", "re",
];

/// Endings whose stem is rebuilt as a first-group infinitive (`-er`).
const ER_VERB_ENDINGS: &[&str] = &["e", "es", "ent", "ons", "ez", "ais", "ait", "ions", "iez", "aient"];

/// Endings whose stem is rebuilt as a second-group infinitive (`-ir`).
const IR_VERB_ENDINGS: &[&str] = &["is", "it"];

/// Endings whose stem is rebuilt as a third-group infinitive (`-re`).
const RE_VERB_ENDINGS: &[&str] = &["ons", "ez", "ent"];

/// Noun and adjective agreement endings.
const AGREEMENT_ENDINGS: &[&str] = &["aux", "eaux", "eux", "es", "s", "x"];

/// Shortest stem kept after stripping an ending, in characters.
const MIN_STEM_CHARS: usize = 3;

fn accepts(candidate: &str, lexicon: Option<&dyn Lexicon>) -> bool {
    lexicon.is_none_or(|lexicon| lexicon.contains(candidate))
}

/// Strip `ending` from `word` when the remaining stem is long enough.
fn strip_ending<'a>(word: &'a str, ending: &str) -> Option<&'a str> {
    let stem = word.strip_suffix(ending)?;
    (stem.chars().count() >= MIN_STEM_CHARS).then_some(stem)
}

/// Reduce an inflected word to a lemma.
///
/// The word is lowercased. With a lexicon, the first candidate the lexicon
/// contains wins; without one, the first candidate built wins. Candidates
/// are tried in this order:
///
/// 1. the word itself (lexicon only),
/// 2. for each verb ending: the rebuilt `-er`, `-ir` or `-re` infinitive,
///    then the bare stem,
/// 3. for each agreement ending: the bare stem.
///
/// When nothing is accepted the lowercased word is returned.
pub fn lemmatize(word: &str, lexicon: Option<&dyn Lexicon>) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() {
        return lower;
    }
    if let Some(lexicon) = lexicon {
        if lexicon.contains(&lower) {
            return lower;
        }
    }

    for &ending in VERB_ENDINGS {
        let Some(stem) = strip_ending(&lower, ending) else {
            continue;
        };

        if ER_VERB_ENDINGS.contains(&ending) {
            let candidate = format!("{stem}er");
            if accepts(&candidate, lexicon) {
                return candidate;
            }
        }
        if IR_VERB_ENDINGS.contains(&ending) {
            let candidate = format!("{stem}ir");
            if accepts(&candidate, lexicon) {
                return candidate;
            }
        }
        if RE_VERB_ENDINGS.contains(&ending) && !stem.ends_with('e') {
            let candidate = format!("{stem}re");
            if accepts(&candidate, lexicon) {
                return candidate;
            }
        }
        if accepts(stem, lexicon) {
            return stem.to_string();
        }
    }

    for &ending in AGREEMENT_ENDINGS {
        if let Some(stem) = strip_ending(&lower, ending) {
            if accepts(stem, lexicon) {
                return stem.to_string();
            }
        }
    }

    lower
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;
    use onlydys_core::enums::GrammarTag;

    fn lexicon(words: &[(&str, GrammarTag)]) -> HashMap<String, GrammarTag> {
        words.iter().map(|&(w, g)| (w.to_string(), g)).collect()
    }

    #[test]
    fn exact_match_is_kept() {
        let lex = lexicon(&[("chats", GrammarTag::Nom)]);
        assert_eq!(lemmatize("Chats", Some(&lex)), "chats");
    }

    #[test]
    fn first_group_verbs() {
        let lex = lexicon(&[("parler", GrammarTag::Ver)]);
        assert_eq!(lemmatize("parlons", Some(&lex)), "parler");
        assert_eq!(lemmatize("parlez", Some(&lex)), "parler");
        assert_eq!(lemmatize("parlent", Some(&lex)), "parler");
        assert_eq!(lemmatize("parlaient", Some(&lex)), "parler");
    }

    #[test]
    fn second_group_verbs() {
        let lex = lexicon(&[("finir", GrammarTag::Ver)]);
        assert_eq!(lemmatize("finis", Some(&lex)), "finir");
        assert_eq!(lemmatize("finit", Some(&lex)), "finir");
    }

    #[test]
    fn third_group_verbs() {
        let lex = lexicon(&[("vendre", GrammarTag::Ver)]);
        assert_eq!(lemmatize("vendons", Some(&lex)), "vendre");
    }

    #[test]
    fn agreement_endings() {
        let lex = lexicon(&[("grand", GrammarTag::Adj), ("cheval", GrammarTag::Nom)]);
        assert_eq!(lemmatize("grands", Some(&lex)), "grand");
        assert_eq!(lemmatize("grandes", Some(&lex)), "grand");
        // "chevaux" -> "chev" is not a word, and no rule rebuilds "cheval".
        assert_eq!(lemmatize("chevaux", Some(&lex)), "chevaux");
    }

    #[test]
    fn short_stems_are_not_stripped() {
        let lex = lexicon(&[("es", GrammarTag::Ver)]);
        assert_eq!(lemmatize("ses", Some(&lex)), "ses");
    }

    #[test]
    fn without_lexicon_first_candidate_wins() {
        assert_eq!(lemmatize("mangeons", None), "mangeer");
        assert_eq!(lemmatize("chantez", None), "chanter");
        assert_eq!(lemmatize("ami", None), "ami");
    }

    #[test]
    fn unknown_word_falls_back_to_lowercase() {
        let lex = lexicon(&[("maison", GrammarTag::Nom)]);
        assert_eq!(lemmatize("ZZZZZ", Some(&lex)), "zzzzz");
        assert_eq!(lemmatize("", Some(&lex)), "");
    }
}
