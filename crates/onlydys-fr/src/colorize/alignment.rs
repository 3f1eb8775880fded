// Alignment between a word as written and the folded form the segmenters read
//
// Segmenters expect lowercase composed letters. A word from the document
// may be uppercase or decomposed ("e" + U+0301), so each base letter and
// the marks attached to it are folded into one lowercase character, and
// segment boundaries found on the folded form are mapped back onto the
// original characters. Coloring therefore never rewrites the text.

use std::ops::Range;

use onlydys_core::character::{is_combining_mark, simple_lower};
use unicode_normalization::UnicodeNormalization;

/// A word folded for segmentation, with the map back to the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedWord {
    /// One lowercase character per letter cluster of the original.
    pub folded: Vec<char>,
    /// Original char offset where each cluster starts, plus the word length.
    bounds: Vec<usize>,
}

impl AlignedWord {
    pub fn new(word: &[char]) -> Self {
        let mut folded = Vec::with_capacity(word.len());
        let mut bounds = Vec::with_capacity(word.len() + 1);

        let mut start = 0;
        while start < word.len() {
            let mut end = start + 1;
            while end < word.len() && is_combining_mark(word[end]) {
                end += 1;
            }
            folded.push(simple_lower(fold_cluster(&word[start..end])));
            bounds.push(start);
            start = end;
        }
        bounds.push(word.len());

        Self { folded, bounds }
    }

    /// Original char range covered by a range of folded characters.
    pub fn original_range(&self, folded: Range<usize>) -> Range<usize> {
        self.bounds[folded.start]..self.bounds[folded.end]
    }
}

/// Compose a base letter with its marks. When the cluster has no single
/// precomposed form, only the base letter is kept.
fn fold_cluster(cluster: &[char]) -> char {
    if cluster.len() == 1 {
        return cluster[0];
    }
    let mut composed = cluster.iter().copied().nfc();
    match (composed.next(), composed.next()) {
        (Some(c), None) => c,
        _ => cluster[0],
    }
}
