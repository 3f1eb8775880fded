// Shared French language constants used across multiple modules.
//
// Individual constants may be unused when their consumer feature is disabled.

/// Length of a phonetic code (first letter plus three digit classes).
pub const PHONETIC_CODE_LEN: usize = 4;

/// Words shorter than this are not checked by text-level suggestion.
#[allow(dead_code)]
pub(crate) const MIN_CHECKED_WORD_LEN: usize = 3;

/// Default number of suggestions returned by the ranker.
#[allow(dead_code)]
pub(crate) const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Multi-letter graphemes tried at each position of the phoneme scan.
///
/// Order matters: the first acceptable match wins, so longer graphemes that
/// share a prefix with shorter ones are listed first.
pub(crate) const MULTI_PHONEMES: &[&str] = &[
    "eaux", "eau", "aient", "oient", // vowel trigraphs
    "ain", "aim", "ein", "eim", "ien", "ian", "oin", // nasal trigraphs
    "on", "om", "an", "am", "en", "em", "in", "im", "yn", "ym", // nasal digraphs
    "ou", "oi", "ai", "ei", "au", "eu", "\u{0153}u", // vowel digraphs
    "ch", "ph", "th", "gn", "qu", "gu", // consonant digraphs
    "ill", "ail", "eil", "ouil", "euil", // semi-consonant clusters
];

/// Graphemes that sound as a single vowel (nasals and vowel digraphs).
pub(crate) const VOWEL_GRAPHEMES: &[&str] = &[
    "eau", "eaux", "aient", "oient", "ain", "aim", "ein", "eim", "ien", "ian", "oin", "on", "om",
    "an", "am", "en", "em", "in", "im", "yn", "ym", "ou", "oi", "ai", "ei", "au", "eu",
    "\u{0153}u",
];

/// Graphemes that sound as a single consonant.
pub(crate) const CONSONANT_GRAPHEMES: &[&str] = &["ch", "ph", "th", "gn", "qu", "gu"];

/// Graphemes pronounced as a semi-consonant (the "y" of "famille").
pub(crate) const SEMI_CONSONANT_GRAPHEMES: &[&str] = &["ill", "ail", "eil", "ouil", "euil"];

/// Word endings that are usually not pronounced, longest first.
pub(crate) const SILENT_ENDINGS: &[&str] = &["ent", "es", "e", "s", "t", "d", "p", "x", "g", "z"];

/// Mirror-image letter pairs that dyslexic readers confuse.
#[allow(dead_code)]
pub(crate) const VISUAL_CONFUSIONS: &[(char, char)] = &[
    ('b', 'd'),
    ('d', 'b'),
    ('p', 'q'),
    ('q', 'p'),
    ('n', 'u'),
    ('u', 'n'),
];

/// Voiced / unvoiced letter pairs that sound alike.
#[allow(dead_code)]
pub(crate) const PHONETIC_CONFUSIONS: &[(char, char)] = &[
    ('f', 'v'),
    ('v', 'f'),
    ('s', 'z'),
    ('z', 's'),
];
