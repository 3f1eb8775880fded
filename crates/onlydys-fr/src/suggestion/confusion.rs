// Confusion classification: why a typed word resembles a suggested correction

use onlydys_core::enums::ConfusionType;
use serde::Serialize;

use crate::french::constants::{PHONETIC_CONFUSIONS, VISUAL_CONFUSIONS};
use crate::phonetic::encode;

/// A confusion category with its display color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfusionLabel {
    #[serde(rename = "type")]
    pub confusion_type: ConfusionType,
    pub color: &'static str,
    pub icon: &'static str,
}

impl ConfusionLabel {
    /// The fixed label of a confusion type. Colors come from a
    /// colorblind-safe palette.
    pub fn of(confusion_type: ConfusionType) -> Self {
        let (color, icon) = match confusion_type {
            ConfusionType::Homophone => ("#CC79A7", "\u{1F500}"),    // 🔀
            ConfusionType::Visual => ("#D55E00", "\u{26A0}\u{FE0F}"), // ⚠️
            ConfusionType::Phonetic => ("#E69F00", "\u{1F50A}"),     // 🔊
            ConfusionType::Morphological => ("#0072B2", "\u{1F4DD}"), // 📝
            ConfusionType::Unknown => ("#999999", "\u{2753}"),       // ❓
        };
        Self {
            confusion_type,
            color,
            icon,
        }
    }
}

fn substitute(pairs: &[(char, char)], c: char) -> Option<char> {
    pairs.iter().find(|&&(from, _)| from == c).map(|&(_, to)| to)
}

/// Whether some letter of `typed`, swapped through `pairs`, explains
/// `suggestion`.
///
/// For each letter with a partner that appears in the suggestion: swapping
/// the first occurrence of that letter must give the suggestion, or the
/// partner must appear exactly once in the suggestion.
fn has_substitution(typed: &str, suggestion: &str, pairs: &[(char, char)]) -> bool {
    typed.chars().any(|c| {
        let Some(partner) = substitute(pairs, c) else {
            return false;
        };
        let occurrences = suggestion.chars().filter(|&s| s == partner).count();
        if occurrences == 0 {
            return false;
        }
        let mut buf = [0u8; 4];
        let swapped = typed.replacen(c, partner.encode_utf8(&mut buf), 1);
        swapped == suggestion || occurrences == 1
    })
}

/// Classify the confusion between a typed word and a suggestion.
///
/// Tests run in priority order and the first match wins: homophone,
/// visual swap, phonetic swap, morphological ending, unknown. Letter
/// swaps compare the words as given (case-sensitive).
///
/// The morphological test only looks at spelling (`-s`, `-ent`) and is
/// approximate: it fires regardless of the words' actual part of speech.
pub fn classify(typed: &str, suggestion: &str) -> ConfusionLabel {
    ConfusionLabel::of(classify_type(typed, suggestion))
}

/// [`classify`] without the presentation fields.
pub fn classify_type(typed: &str, suggestion: &str) -> ConfusionType {
    let typed_code = encode(typed);
    if !typed_code.is_empty()
        && typed_code == encode(suggestion)
        && typed.to_lowercase() != suggestion.to_lowercase()
    {
        return ConfusionType::Homophone;
    }

    if has_substitution(typed, suggestion, VISUAL_CONFUSIONS) {
        return ConfusionType::Visual;
    }

    if has_substitution(typed, suggestion, PHONETIC_CONFUSIONS) {
        return ConfusionType::Phonetic;
    }

    let plural_mismatch = typed.ends_with('s') != suggestion.ends_with('s');
    let verb_mismatch = typed.ends_with("ent") != suggestion.ends_with("ent");
    if plural_mismatch || verb_mismatch {
        return ConfusionType::Morphological;
    }

    ConfusionType::Unknown
}
