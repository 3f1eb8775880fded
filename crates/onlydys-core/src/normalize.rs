// Word normalization: case folding, NFC composition, diacritic removal

use unicode_normalization::UnicodeNormalization;

use crate::character::is_combining_mark;

/// Normalize a word for segmentation: lowercase, then compose to NFC.
///
/// Every segmenter works on this form, so "CHÂTEAU" and "cha\u{0302}teau"
/// produce the same phonemes.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase().nfc().collect()
}

/// Remove all diacritics: canonical decomposition, then drop combining marks.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}
