// Edit distance and normalized orthographic similarity

/// Levenshtein edit distance between two strings, counted in characters.
///
/// Insertions, deletions and substitutions each cost 1. Comparison is
/// case-sensitive; callers lowercase beforehand when needed.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

/// [`distance`] over char slices.
///
/// Uses a single rolling row, so memory is linear in `b.len()`.
pub fn distance_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = if ca == cb { 0 } else { 1 };
            row[j + 1] = (diagonal + cost).min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max_len`.
///
/// Two empty strings have similarity 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - distance_chars(&a, &b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_reference_pairs() {
        assert_eq!(distance("maison", "maison"), 0);
        assert_eq!(distance("pain", "bain"), 1);
        assert_eq!(distance("chat", "chats"), 1);
        assert_eq!(distance("bonjour", "bonsoir"), 2);
    }

    #[test]
    fn distance_empty_inputs() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn distance_counts_chars_not_bytes() {
        assert_eq!(distance("\u{00E9}t\u{00E9}", "ete"), 2);
        assert_eq!(distance("\u{00E9}", "e"), 1);
    }

    #[test]
    fn distance_is_case_sensitive() {
        assert_eq!(distance("Maison", "maison"), 1);
    }

    #[test]
    fn distance_is_symmetric() {
        for (a, b) in [("kitten", "sitting"), ("oiseau", "oiso"), ("a", "")] {
            assert_eq!(distance(a, b), distance(b, a));
        }
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn similarity_reference_values() {
        assert_eq!(similarity("maison", "maison"), 1.0);
        assert_eq!(similarity("", "maison"), 0.0);
        assert_eq!(similarity("", ""), 0.0);
        assert!((similarity("chat", "chats") - 0.8).abs() < 1e-9);
    }
}
