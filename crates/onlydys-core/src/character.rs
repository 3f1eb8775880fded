// Character classification and simple case mapping for French text

// ---------------------------------------------------------------------------
// French phonological constants
// ---------------------------------------------------------------------------

/// French vowel letters (lowercase), accented forms and ligatures included.
const FRENCH_VOWELS: &[char] = &[
    'a', '\u{00E0}', '\u{00E2}', '\u{00E4}', // a à â ä
    'e', '\u{00E9}', '\u{00E8}', '\u{00EA}', '\u{00EB}', // e é è ê ë
    'i', '\u{00EE}', '\u{00EF}', // i î ï
    'o', '\u{00F4}', '\u{00F6}', // o ô ö
    'u', '\u{00F9}', '\u{00FB}', '\u{00FC}', // u ù û ü
    'y', '\u{00FF}', // y ÿ
    '\u{0153}', '\u{00E6}', // œ æ
];

/// French consonant letters (lowercase).
const FRENCH_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z', '\u{00E7}', // ç
];

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
    /// Combining diacritical mark (only produced by decomposed input).
    Mark,
}

/// Returns the character type for a given character.
///
/// Letters are any Unicode alphabetic character, so the classification
/// works for loan words and names as well as for French.
pub fn get_char_type(c: char) -> CharType {
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_combining_mark(c) {
        return CharType::Mark;
    }
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if is_punctuation(c) {
        return CharType::Punctuation;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    CharType::Unknown
}

/// Check whether a character is a punctuation character.
///
/// Covers the ASCII punctuation marks, the Latin-1 marks used in French
/// typography (guillemets, inverted marks) and the General Punctuation
/// block (dashes, curly quotes, ellipsis).
pub fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '!' | '"'
            | '#'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '_'
            | '{'
            | '}'
            | '\u{00A1}' // ¡
            | '\u{00A7}' // §
            | '\u{00AB}' // «
            | '\u{00B6}' // ¶
            | '\u{00B7}' // ·
            | '\u{00BB}' // »
            | '\u{00BF}' // ¿
            | '\u{2010}'..='\u{2027}' // hyphens, dashes, quotes, bullets, ellipsis
            | '\u{2030}'..='\u{2043}' // per mille, primes, single guillemets
    )
}

/// Check whether a character is a combining diacritical mark.
pub fn is_combining_mark(c: char) -> bool {
    unicode_normalization::char::is_combining_mark(c)
}

/// Check whether a character can sit inside a word between two letters
/// (apostrophes and hyphens: "l'oiseau", "peut-être").
pub fn is_word_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

// ---------------------------------------------------------------------------
// French phonological classification
// ---------------------------------------------------------------------------

/// Check whether a character is a French vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    let lower = simple_lower(c);
    FRENCH_VOWELS.contains(&lower)
}

/// Check whether a character is a French consonant (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    let lower = simple_lower(c);
    FRENCH_CONSONANTS.contains(&lower)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// Every mapping here is one character to one character, so character
// offsets computed on a lowercased copy stay valid for the original text.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- CharType tests --

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00E9}'), CharType::Letter); // é
        assert_eq!(get_char_type('\u{0153}'), CharType::Letter); // œ
    }

    #[test]
    fn char_type_digits() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('\u{202F}'), CharType::Whitespace); // narrow nbsp before "?"
    }

    #[test]
    fn char_type_punctuation() {
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{00AB}'), CharType::Punctuation); // «
        assert_eq!(get_char_type('\u{2019}'), CharType::Punctuation); // ’
        assert_eq!(get_char_type('\u{2026}'), CharType::Punctuation); // …
    }

    #[test]
    fn char_type_marks_and_unknown() {
        assert_eq!(get_char_type('\u{0301}'), CharType::Mark);
        assert_eq!(get_char_type('+'), CharType::Unknown);
        assert_eq!(get_char_type('$'), CharType::Unknown);
    }

    // -- Vowel / Consonant tests --

    #[test]
    fn french_vowels() {
        assert!(is_vowel('a'));
        assert!(is_vowel('\u{00E9}')); // é
        assert!(is_vowel('\u{00C9}')); // É
        assert!(is_vowel('u'));
        assert!(is_vowel('y'));
        assert!(is_vowel('\u{0153}')); // œ
        assert!(!is_vowel('b'));
        assert!(!is_vowel('z'));
    }

    #[test]
    fn french_consonants() {
        assert!(is_consonant('b'));
        assert!(is_consonant('Z'));
        assert!(is_consonant('\u{00E7}')); // ç
        assert!(!is_consonant('a'));
        assert!(!is_consonant('\u{00E8}')); // è
        assert!(!is_consonant('1'));
        assert!(!is_consonant('\''));
    }

    #[test]
    fn word_joiners() {
        assert!(is_word_joiner('\''));
        assert!(is_word_joiner('\u{2019}'));
        assert!(is_word_joiner('-'));
        assert!(!is_word_joiner('.'));
    }

    // -- Case functions --

    #[test]
    fn simple_lower_extended() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('\u{00C9}'), '\u{00E9}'); // É -> é
        assert_eq!(simple_lower('\u{0152}'), '\u{0153}'); // Œ -> œ
    }

    #[test]
    fn simple_upper_keeps_one_char() {
        // ß uppercases to "SS"; only the first character is kept.
        assert_eq!(simple_upper('\u{00DF}'), 'S');
        assert_eq!(simple_upper('\u{00E7}'), '\u{00C7}'); // ç -> Ç
    }
}
