// Tokenizer: splits text into word, whitespace, punctuation and unknown tokens
//
// A word token is a maximal run of letters together with any combining
// marks attached to them, so decomposed input ("e\u{0301}te\u{0301}") stays
// one token. Apostrophes and hyphens end a word token; `words()` is the
// extractor that keeps "l'oiseau" and "peut-être" together.

use onlydys_core::character::{CharType, get_char_type, is_word_joiner};
use onlydys_core::enums::TokenType;
use onlydys_core::token::Token;

/// Length of the letter run starting at the beginning of `text`.
///
/// Combining marks extend the run; they never start one.
fn letter_run_length(text: &[char]) -> usize {
    let mut len = 0;
    while len < text.len() {
        match get_char_type(text[len]) {
            CharType::Letter => len += 1,
            CharType::Mark if len > 0 => len += 1,
            _ => break,
        }
    }
    len
}

/// Find the next token starting at position `pos`.
///
/// Returns the token type and its length in characters. At end of text the
/// result is `(TokenType::None, 0)`.
pub fn next_token(text: &[char], text_len: usize, pos: usize) -> (TokenType, usize) {
    let end = text_len.min(text.len());
    if pos >= end {
        return (TokenType::None, 0);
    }
    let slice = &text[pos..end];

    match get_char_type(slice[0]) {
        CharType::Letter => (TokenType::Word, letter_run_length(slice)),
        CharType::Whitespace => {
            let mut i = 1;
            while i < slice.len() && get_char_type(slice[i]) == CharType::Whitespace {
                i += 1;
            }
            (TokenType::Whitespace, i)
        }
        CharType::Punctuation => (TokenType::Punctuation, 1),
        CharType::Digit | CharType::Mark | CharType::Unknown => {
            let mut i = 1;
            while i < slice.len()
                && matches!(
                    get_char_type(slice[i]),
                    CharType::Digit | CharType::Mark | CharType::Unknown
                )
            {
                i += 1;
            }
            (TokenType::Unknown, i)
        }
    }
}

/// Split a text into tokens.
pub fn tokenize(text: &[char]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
        let (token_type, len) = next_token(text, text.len(), pos);
        if token_type == TokenType::None || len == 0 {
            break;
        }
        let token_text: String = text[pos..pos + len].iter().collect();
        tokens.push(Token::new(token_type, token_text, pos));
        pos += len;
    }
    tokens
}

/// Extract French words from a text.
///
/// A word is a letter run, optionally followed by one apostrophe or hyphen
/// and a second letter run: "l'oiseau", "peut-être", "aujourd'hui". A
/// trailing joiner with no letters after it stays attached ("l'" in "l' ami").
pub fn words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut result = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let run = letter_run_length(&chars[pos..]);
        if run == 0 {
            pos += 1;
            continue;
        }
        let mut end = pos + run;
        if end < chars.len() && is_word_joiner(chars[end]) {
            end += 1;
            end += letter_run_length(&chars[end..]);
        }
        result.push(chars[pos..end].iter().collect());
        pos = end;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn token_types(text: &str) -> Vec<(TokenType, String)> {
        tokenize(&chars(text))
            .into_iter()
            .map(|t| (t.token_type, t.text))
            .collect()
    }

    #[test]
    fn next_token_at_end() {
        let text = chars("abc");
        assert_eq!(next_token(&text, text.len(), 3), (TokenType::None, 0));
        assert_eq!(next_token(&[], 0, 0), (TokenType::None, 0));
    }

    #[test]
    fn next_token_word_and_whitespace() {
        let text = chars("Bonjour  le");
        assert_eq!(next_token(&text, text.len(), 0), (TokenType::Word, 7));
        assert_eq!(next_token(&text, text.len(), 7), (TokenType::Whitespace, 2));
        assert_eq!(next_token(&text, text.len(), 9), (TokenType::Word, 2));
    }

    #[test]
    fn next_token_respects_text_len() {
        let text = chars("maison");
        assert_eq!(next_token(&text, 3, 0), (TokenType::Word, 3));
    }

    #[test]
    fn tokenize_sentence() {
        assert_eq!(
            token_types("L'\u{00E9}t\u{00E9}, 2024 !"),
            vec![
                (TokenType::Word, "L".to_string()),
                (TokenType::Punctuation, "'".to_string()),
                (TokenType::Word, "\u{00E9}t\u{00E9}".to_string()),
                (TokenType::Punctuation, ",".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Unknown, "2024".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Punctuation, "!".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_keeps_combining_marks_in_words() {
        let tokens = token_types("e\u{0301}te\u{0301} ok");
        assert_eq!(tokens[0], (TokenType::Word, "e\u{0301}te\u{0301}".to_string()));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn tokenize_positions_cover_text() {
        let text = chars("Le chat dort.");
        let tokens = tokenize(&text);
        let mut expected_pos = 0;
        for token in &tokens {
            assert_eq!(token.pos, expected_pos);
            expected_pos += token.token_len;
        }
        assert_eq!(expected_pos, text.len());
    }

    #[test]
    fn words_with_joiners() {
        assert_eq!(
            words("L'oiseau chante, peut-\u{00EA}tre."),
            vec!["L'oiseau", "chante", "peut-\u{00EA}tre"]
        );
        assert_eq!(words("aujourd\u{2019}hui"), vec!["aujourd\u{2019}hui"]);
    }

    #[test]
    fn words_allow_only_one_joiner() {
        assert_eq!(words("c'est-\u{00E0}-dire"), vec!["c'est", "\u{00E0}-dire"]);
    }

    #[test]
    fn words_ignores_non_letters() {
        assert_eq!(words("123 ... !"), Vec::<String>::new());
        assert_eq!(words(""), Vec::<String>::new());
    }
}
