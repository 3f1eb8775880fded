// Dictionary-backed morphology: word lookup and best-effort lemmatization

mod lemma;

pub use lemma::lemmatize;

use onlydys_core::enums::GrammarTag;

/// Read-only word list used to validate lemma candidates and look up tags.
///
/// Implemented by [`crate::dictionary::Dictionary`]; tests use small maps.
pub trait Lexicon {
    /// Whether the lexicon knows the word. `word` is lowercase.
    fn contains(&self, word: &str) -> bool;

    /// Grammar tag of the word, if known. `word` is lowercase.
    fn grammar_tag(&self, word: &str) -> Option<GrammarTag>;
}

impl Lexicon for hashbrown::HashMap<String, GrammarTag> {
    fn contains(&self, word: &str) -> bool {
        self.contains_key(word)
    }

    fn grammar_tag(&self, word: &str) -> Option<GrammarTag> {
        self.get(word).copied()
    }
}

/// Grammar tag of a word, trying its lemma when the exact form is unknown.
pub fn lookup_tag(word: &str, lexicon: &dyn Lexicon) -> Option<GrammarTag> {
    let lower = word.to_lowercase();
    lexicon
        .grammar_tag(&lower)
        .or_else(|| lexicon.grammar_tag(&lemmatize(&lower, Some(lexicon))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    fn lexicon() -> HashMap<String, GrammarTag> {
        [
            ("manger", GrammarTag::Ver),
            ("chat", GrammarTag::Nom),
            ("petit", GrammarTag::Adj),
        ]
        .into_iter()
        .map(|(w, g)| (w.to_string(), g))
        .collect()
    }

    #[test]
    fn lookup_exact_form() {
        assert_eq!(lookup_tag("Chat", &lexicon()), Some(GrammarTag::Nom));
    }

    #[test]
    fn lookup_through_lemma() {
        let lexicon = lexicon();
        assert_eq!(lookup_tag("mangez", &lexicon), Some(GrammarTag::Ver));
        assert_eq!(lookup_tag("petites", &lexicon), Some(GrammarTag::Adj));
    }

    #[test]
    fn lookup_unknown_word() {
        assert_eq!(lookup_tag("zzzz", &lexicon()), None);
    }
}
