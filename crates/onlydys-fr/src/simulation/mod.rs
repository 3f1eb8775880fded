// Dyslexia simulation: scrambles the inside of words so readers can feel
// what a dyslexic reader sees
//
// Only word tokens are touched; spaces, punctuation and digits are copied
// through. A word keeps its first and last letter and its length. Letters
// and the combining marks attached to them move together.

use std::ops::Range;

use onlydys_core::character::is_combining_mark;
use onlydys_core::enums::TokenType;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::tokenizer::next_token;

/// Options for [`simulate_dyslexia`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationOptions {
    /// Shorter words are left alone. Default: 5.
    pub min_word_length: usize,
    /// Percentage of eligible words that get scrambled, clamped to 100.
    /// Default: 100.
    pub scramble_chance: u8,
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            min_word_length: 5,
            scramble_chance: 100,
            seed: None,
        }
    }
}

/// Scramble the words of `text`.
pub fn simulate_dyslexia(text: &str, options: &SimulationOptions) -> String {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    let mut pos = 0;
    loop {
        let (token_type, len) = next_token(&chars, chars.len(), pos);
        if token_type == TokenType::None || len == 0 {
            break;
        }
        let token = &chars[pos..pos + len];
        if token_type == TokenType::Word {
            result.extend(scramble_word(token, options, &mut rng));
        } else {
            result.extend(token);
        }
        pos += len;
    }
    result
}

/// Letters of a word, each with its attached marks.
fn letters(word: &[char]) -> Vec<Range<usize>> {
    let mut result = Vec::with_capacity(word.len());
    let mut start = 0;
    while start < word.len() {
        let mut end = start + 1;
        while end < word.len() && is_combining_mark(word[end]) {
            end += 1;
        }
        result.push(start..end);
        start = end;
    }
    result
}

/// Reverse a random inner span of the word. When that leaves the word as
/// it was, shuffle everything between the first and last letter instead.
fn scramble_word<R: Rng>(word: &[char], options: &SimulationOptions, rng: &mut R) -> Vec<char> {
    let letters = letters(word);
    let len = letters.len();
    // A word needs an inner letter to scramble.
    if len < options.min_word_length || len < 3 {
        return word.to_vec();
    }
    let chance = u32::from(options.scramble_chance.min(100));
    if rng.random_range(1..=100) > chance {
        return word.to_vec();
    }

    let mut order: Vec<usize> = (0..len).collect();
    let a = rng.random_range(1..=len - 2);
    let b = rng.random_range(a..=len - 2);
    order[a..=b].reverse();

    let unchanged = (a..=b).all(|i| word[letters[i].clone()] == word[letters[order[i]].clone()]);
    if unchanged && len > 3 {
        order = (0..len).collect();
        order[1..len - 1].shuffle(rng);
    }

    order
        .into_iter()
        .flat_map(|i| word[letters[i].clone()].iter().copied())
        .collect()
}
