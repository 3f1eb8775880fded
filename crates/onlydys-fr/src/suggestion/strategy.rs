// Ranking strategies: weighted multi-criteria ranking and the distance-only model

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::distance::{distance, similarity};
use crate::french::constants::DEFAULT_SUGGESTION_LIMIT;
use crate::phonetic::encode;

use super::SuggestionResult;
use super::scoring::{
    expected_next_tag, final_score, orthographic_score, phonetic_score, semantic_score,
};

/// Which ranking model to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingModel {
    /// Phonetic, orthographic and semantic sub-scores (canonical).
    #[default]
    Weighted,
    /// Exact phonetic code match, ordered by edit distance only.
    DistanceOnly,
}

impl FromStr for RankingModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weighted" => Ok(RankingModel::Weighted),
            "distance" | "distance-only" | "distanceOnly" => Ok(RankingModel::DistanceOnly),
            _ => Err(format!("unknown ranking model: {s:?}")),
        }
    }
}

/// Options for suggestion ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankerOptions {
    /// Maximum number of suggestions returned. Default: 5.
    pub limit: usize,
    /// Ranking model. Default: weighted.
    pub model: RankingModel,
    /// Largest edit distance between phonetic codes for a dictionary entry
    /// to be considered at all (weighted model only). Default: 1.
    pub max_phonetic_distance: usize,
}

impl Default for RankerOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
            model: RankingModel::Weighted,
            max_phonetic_distance: 1,
        }
    }
}

/// Rank dictionary entries as corrections for `typed`.
///
/// `preceding` is the word typed just before, used for the grammatical
/// context bonus. Returns an empty list for a word with no encodable
/// letter or an empty dictionary.
pub fn rank(
    typed: &str,
    preceding: Option<&str>,
    dictionary: &Dictionary,
    options: &RankerOptions,
) -> Vec<SuggestionResult> {
    let typed_code = encode(typed);
    if typed_code.is_empty() || dictionary.is_empty() || options.limit == 0 {
        return Vec::new();
    }
    match options.model {
        RankingModel::Weighted => rank_weighted(typed, &typed_code, preceding, dictionary, options),
        RankingModel::DistanceOnly => rank_by_distance(typed, &typed_code, dictionary, options),
    }
}

fn rank_weighted(
    typed: &str,
    typed_code: &str,
    preceding: Option<&str>,
    dictionary: &Dictionary,
    options: &RankerOptions,
) -> Vec<SuggestionResult> {
    let expected = preceding
        .and_then(|word| dictionary.lookup(word))
        .and_then(|entry| expected_next_tag(entry.grammar_tag));

    let candidates = dictionary.near_code(typed_code, options.max_phonetic_distance);
    let candidate_count = candidates.len();

    let mut results: Vec<SuggestionResult> = candidates
        .into_iter()
        .map(|entry| {
            let score = final_score(
                phonetic_score(typed_code, &entry.phonetic_code),
                orthographic_score(typed, &entry.word),
                semantic_score(entry, expected),
            );
            SuggestionResult::from_entry(entry, score, None)
        })
        .collect();

    // Stable: equal scores keep dictionary order.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(options.limit);

    debug!(
        typed,
        code = typed_code,
        candidates = candidate_count,
        results = results.len(),
        "ranked suggestions"
    );
    results
}

fn rank_by_distance(
    typed: &str,
    typed_code: &str,
    dictionary: &Dictionary,
    options: &RankerOptions,
) -> Vec<SuggestionResult> {
    let lower = typed.to_lowercase();
    let mut results: Vec<SuggestionResult> = dictionary
        .with_code(typed_code)
        .map(|entry| {
            let word = entry.word.to_lowercase();
            SuggestionResult::from_entry(
                entry,
                similarity(&lower, &word),
                Some(distance(&lower, &word)),
            )
        })
        .collect();
    let candidate_count = results.len();

    results.sort_by_key(|result| result.distance);
    results.truncate(options.limit);

    debug!(
        typed,
        code = typed_code,
        candidates = candidate_count,
        results = results.len(),
        "ranked suggestions by distance"
    );
    results
}
