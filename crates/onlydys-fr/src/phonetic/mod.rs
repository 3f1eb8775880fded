// Phonetic encoder: four-character consonant-class code for coarse sound-alike matching
//
// A Soundex-family digest tuned for French spelling. The code is an opaque
// dictionary key: two words sharing a code are "coarsely homophonic", not
// guaranteed to sound the same.

use onlydys_core::character::simple_upper;
use onlydys_core::normalize::strip_diacritics;

use crate::french::constants::PHONETIC_CODE_LEN;

/// Digit class of an uppercase ASCII letter. `'0'` is a separator and is
/// never appended to a code.
fn consonant_class(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0',
    }
}

/// Encode a word into its phonetic code.
///
/// The word is uppercased, stripped of diacritics and filtered to `A-Z`.
/// The first remaining letter is kept, then each following letter adds its
/// digit class unless the class is `0` or equals the class of the letter
/// just before it. Codes are right-padded with `0` to four characters.
///
/// Returns an empty string when no `A-Z` letter remains.
pub fn encode(word: &str) -> String {
    let letters: Vec<char> = strip_diacritics(word)
        .chars()
        .map(simple_upper)
        .filter(|c| c.is_ascii_uppercase())
        .collect();

    let Some((&first, rest)) = letters.split_first() else {
        return String::new();
    };

    let mut code = String::with_capacity(PHONETIC_CODE_LEN);
    code.push(first);
    let mut last_class = consonant_class(first);

    for &c in rest {
        if code.len() >= PHONETIC_CODE_LEN {
            break;
        }
        let class = consonant_class(c);
        if class != '0' && class != last_class {
            code.push(class);
        }
        // Vowels reset adjacency: "pap" keeps both P classes.
        last_class = class;
    }

    while code.len() < PHONETIC_CODE_LEN {
        code.push('0');
    }
    code
}

/// Check whether a string has the shape of a phonetic code: exactly four
/// characters, a letter followed by class digits.
pub fn is_valid_code(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    chars.len() == PHONETIC_CODE_LEN
        && chars[0].is_ascii_uppercase()
        && chars[1..].iter().all(|c| matches!(c, '0'..='6'))
}
