// Suggestion module
//
// Ranks dictionary words as corrections for a misspelled word and explains
// each pairing:
//   - `scoring`: phonetic, orthographic and semantic sub-scores
//   - `strategy`: the weighted and distance-only ranking models
//   - `confusion`: homophone / visual / phonetic / morphological labels

pub mod confusion;
pub mod scoring;
pub mod strategy;

pub use confusion::{ConfusionLabel, classify, classify_type};
pub use strategy::{RankerOptions, RankingModel, rank};

use onlydys_core::entry::DictionaryEntry;
use onlydys_core::enums::GrammarTag;
use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::french::constants::MIN_CHECKED_WORD_LEN;

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub word: String,
    pub grammar_tag: GrammarTag,
    /// Final score (weighted model) or similarity (distance-only model).
    pub score: f64,
    /// Orthographic edit distance, set by the distance-only model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
}

impl SuggestionResult {
    pub(crate) fn from_entry(entry: &DictionaryEntry, score: f64, distance: Option<usize>) -> Self {
        Self {
            word: entry.word.clone(),
            grammar_tag: entry.grammar_tag,
            score,
            distance,
            illustration: entry.illustration.clone(),
        }
    }
}

/// Suggestions for one word of a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordSuggestions {
    pub word: String,
    pub suggestions: Vec<SuggestionResult>,
}

/// Rank suggestions for every word of a text.
///
/// The text is split on whitespace and only words of three characters or
/// more are checked. Each checked word uses the previous checked word as
/// context. Words without any suggestion are left out.
pub fn suggest_text(
    text: &str,
    dictionary: &Dictionary,
    options: &RankerOptions,
) -> Vec<WordSuggestions> {
    let mut preceding: Option<&str> = None;
    let mut result = Vec::new();

    for word in text.split_whitespace() {
        if word.chars().count() < MIN_CHECKED_WORD_LEN {
            continue;
        }
        let suggestions = rank(word, preceding, dictionary, options);
        if !suggestions.is_empty() {
            result.push(WordSuggestions {
                word: word.to_string(),
                suggestions,
            });
        }
        preceding = Some(word);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(vec![
            DictionaryEntry::new("les", GrammarTag::Det, 0.9),
            DictionaryEntry::new("maison", GrammarTag::Nom, 0.8).with_illustration("maison.png"),
            DictionaryEntry::new("maisons", GrammarTag::Nom, 0.4),
        ])
        .unwrap()
    }

    #[test]
    fn suggest_text_skips_short_words() {
        let results = suggest_text("la maiso", &dictionary(), &RankerOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "maiso");
        assert_eq!(results[0].suggestions[0].word, "maison");
    }

    #[test]
    fn suggest_text_omits_words_without_suggestions() {
        let results = suggest_text("xylophone maiso", &dictionary(), &RankerOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "maiso");
    }

    #[test]
    fn suggest_text_uses_previous_checked_word_as_context() {
        let options = RankerOptions::default();
        let dict = dictionary();
        let with_context = suggest_text("les maisonz", &dict, &options);
        let without_context = rank("maisonz", None, &dict, &options);
        let last = with_context.last().unwrap();
        assert_eq!(last.word, "maisonz");
        assert!(last.suggestions[0].score > without_context[0].score);
    }

    #[test]
    fn suggest_text_checks_dictionary_words_too() {
        let results = suggest_text("les maison", &dictionary(), &RankerOptions::default());
        let maison = results.iter().find(|entry| entry.word == "maison");
        assert_eq!(
            maison.map(|entry| entry.suggestions[0].word.as_str()),
            Some("maison")
        );
    }

    #[test]
    fn suggest_text_empty_input() {
        assert!(suggest_text("   ", &dictionary(), &RankerOptions::default()).is_empty());
    }

    #[test]
    fn result_carries_illustration() {
        let results = rank("maison", None, &dictionary(), &RankerOptions::default());
        assert_eq!(results[0].illustration.as_deref(), Some("maison.png"));
        let value = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(value["grammarTag"], "NOM");
        assert!(value.get("distance").is_none());
    }
}
