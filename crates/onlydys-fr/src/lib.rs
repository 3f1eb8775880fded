//! French linguistic engine for the OnlyDys reading aids.
//!
//! Suggests corrections for words misspelled by dyslexic writers and
//! colors French text so it is easier to decode.
//!
//! # Architecture
//!
//! - [`phonetic`] -- four-character French phonetic code
//! - [`distance`] -- Levenshtein distance and similarity
//! - [`tokenizer`] -- word, whitespace and punctuation tokens
//! - [`segmentation`] -- phonemes, syllables and silent letters of a word
//! - [`morphology`] -- lexicon lookups and the suffix lemmatizer
//! - [`dictionary`] -- validated dictionary with word and code indexes
//! - `suggestion` -- ranking and confusion labels (feature `suggest`)
//! - `colorize` -- the colorization engine (feature `colorize`)
//! - `simulation` -- dyslexia simulation (feature `simulate`)
//! - `handle` -- `OnlyDysHandle` facade (feature `handle`)

pub mod dictionary;
pub mod distance;
pub mod french {
    pub mod constants;
}
pub mod morphology;
pub mod phonetic;
pub mod segmentation;
pub mod tokenizer;

#[cfg(feature = "suggest")]
pub mod suggestion;

#[cfg(feature = "colorize")]
pub mod colorize;

#[cfg(feature = "simulate")]
pub mod simulation;

#[cfg(feature = "handle")]
pub mod handle;

pub use dictionary::{Dictionary, DictionaryError};

#[cfg(feature = "handle")]
pub use handle::{OnlyDysError, OnlyDysHandle};
