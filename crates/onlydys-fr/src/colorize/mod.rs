// Colorization engine: turns segmentation output into styled text runs
//
//   - `config`: mode enum and options, parsed once at the boundary
//   - `palette`: text and highlight palettes, phoneme hash, grammar legend
//   - `alignment`: maps segment boundaries back onto the original letters
//   - `style`: dyslexia-friendly reading font
//
// The engine only re-splits runs and changes their formatting. The text of
// a paragraph is checked after processing; if it changed, the paragraph is
// returned untouched.

pub mod alignment;
pub mod config;
pub mod palette;
pub mod style;

pub use config::{ColorMode, ColorizeConfig, ColorizeOptions, ConfigError};
pub use palette::{LegendEntry, Palette, grammar_legend};
pub use style::{ReadingStyle, apply_reading_style};

use std::ops::Range;

use onlydys_core::character::{
    CharType, get_char_type, is_combining_mark, is_consonant, is_vowel, is_whitespace,
};
use onlydys_core::enums::TokenType;
use onlydys_core::text::{DocumentModel, Formatting, Paragraph, TextRun};
use tracing::{trace, warn};

use crate::morphology::{Lexicon, lookup_tag};
use crate::segmentation::phoneme::segment_spans;
use crate::segmentation::silent::detect_silent_chars;
use crate::segmentation::syllable::syllable_ranges;
use crate::tokenizer::next_token;

use alignment::AlignedWord;
use palette::{HIGHLIGHT_TEXT_COLOR, LINE_COLORS, cycle, hashed_color, palette};

// ---------------------------------------------------------------------------
// Run building
// ---------------------------------------------------------------------------

/// Collects the output runs of one input run. Every segment inherits the
/// input run's formatting.
struct RunBuilder<'a> {
    base: &'a Formatting,
    use_highlighting: bool,
    runs: Vec<TextRun>,
}

impl<'a> RunBuilder<'a> {
    fn new(base: &'a Formatting, use_highlighting: bool) -> Self {
        Self {
            base,
            use_highlighting,
            runs: Vec::new(),
        }
    }

    fn push(&mut self, text: &[char], color: Option<&str>) {
        self.push_with(text, color, |_| {});
    }

    /// Add a segment. A color goes to the background in highlighting mode
    /// (text forced to black), to the text otherwise. No color clears the
    /// text color.
    fn push_with(&mut self, text: &[char], color: Option<&str>, extra: impl FnOnce(&mut Formatting)) {
        if text.is_empty() {
            return;
        }
        let mut formatting = self.base.clone();
        extra(&mut formatting);
        match color {
            Some(color) if self.use_highlighting => {
                formatting.background_color = Some(color.to_string());
                formatting.color = Some(HIGHLIGHT_TEXT_COLOR.to_string());
            }
            Some(color) => formatting.color = Some(color.to_string()),
            None => formatting.color = None,
        }
        self.runs.push(TextRun::new(text.iter().collect::<String>(), formatting));
    }

    fn finish(self) -> Vec<TextRun> {
        self.runs
    }
}

// ---------------------------------------------------------------------------
// Text splitting
// ---------------------------------------------------------------------------

/// A slice of a run: a word (letters and their marks) or everything
/// between two words.
struct Piece {
    range: Range<usize>,
    is_word: bool,
}

/// Split text into alternating word and non-word pieces.
fn split_words(text: &[char]) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = Vec::new();
    let mut pos = 0;
    loop {
        let (token_type, len) = next_token(text, text.len(), pos);
        if token_type == TokenType::None || len == 0 {
            break;
        }
        let is_word = token_type == TokenType::Word;
        match pieces.last_mut() {
            Some(last) if !is_word && !last.is_word => last.range.end = pos + len,
            _ => pieces.push(Piece {
                range: pos..pos + len,
                is_word,
            }),
        }
        pos += len;
    }
    pieces
}

/// Split text into whitespace runs and the words between them.
fn split_on_whitespace(text: &[char]) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = Vec::new();
    for (i, &c) in text.iter().enumerate() {
        let is_word = !is_whitespace(c);
        match pieces.last_mut() {
            Some(last) if last.is_word == is_word => last.range.end = i + 1,
            _ => pieces.push(Piece {
                range: i..i + 1,
                is_word,
            }),
        }
    }
    pieces
}

/// Character clusters: one character plus any combining marks after it.
fn clusters(text: &[char]) -> Vec<Range<usize>> {
    let mut result = Vec::with_capacity(text.len());
    let mut start = 0;
    while start < text.len() {
        let mut end = start + 1;
        while end < text.len() && is_combining_mark(text[end]) {
            end += 1;
        }
        result.push(start..end);
        start = end;
    }
    result
}

// ---------------------------------------------------------------------------
// Colorizer
// ---------------------------------------------------------------------------

/// Applies a colorization mode to text runs.
///
/// The lexicon is only used by the grammar mode; without one, grammar mode
/// leaves words uncolored.
#[derive(Clone, Copy, Default)]
pub struct Colorizer<'a> {
    lexicon: Option<&'a dyn Lexicon>,
}

impl<'a> Colorizer<'a> {
    pub fn new(lexicon: Option<&'a dyn Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Process every paragraph of a document; the paragraph index drives
    /// the `alternlines` background. Empty runs are dropped.
    pub fn process_document(&self, document: &DocumentModel, config: &ColorizeConfig) -> DocumentModel {
        let paragraphs = document
            .paragraphs
            .iter()
            .enumerate()
            .map(|(index, paragraph)| self.process_paragraph_at(paragraph, config, index))
            .collect();
        DocumentModel::new(paragraphs)
    }

    /// Process one paragraph, using `config.line_index` for `alternlines`.
    pub fn process_paragraph(&self, paragraph: &Paragraph, config: &ColorizeConfig) -> Paragraph {
        self.process_paragraph_at(paragraph, config, config.line_index)
    }

    fn process_paragraph_at(
        &self,
        paragraph: &Paragraph,
        config: &ColorizeConfig,
        line_index: usize,
    ) -> Paragraph {
        let runs: Vec<TextRun> = paragraph
            .text_runs
            .iter()
            .filter(|run| !run.text.is_empty())
            .flat_map(|run| self.process_run_at(run, config, line_index))
            .collect();
        checked_paragraph(paragraph, Paragraph::new(runs), config.mode)
    }

    /// Process one run into one or more runs.
    pub fn process_run(&self, run: &TextRun, config: &ColorizeConfig) -> Vec<TextRun> {
        self.process_run_at(run, config, config.line_index)
    }

    fn process_run_at(&self, run: &TextRun, config: &ColorizeConfig, line_index: usize) -> Vec<TextRun> {
        let text: Vec<char> = run.text.chars().collect();
        let palette = palette(config.options.use_highlighting);
        let mut out = RunBuilder::new(&run.formatting, config.options.use_highlighting);

        match config.mode {
            ColorMode::None => out.push(&text, None),
            ColorMode::AlternLines => {
                let background = LINE_COLORS[line_index % LINE_COLORS.len()];
                out.push_with(&text, None, |f| {
                    f.background_color = Some(background.to_string());
                });
            }
            ColorMode::Grammar => self.color_grammar(&text, palette, &mut out),
            ColorMode::Phonemes | ColorMode::AlternPhonemes | ColorMode::Syllables => {
                color_segments(&text, config, palette, &mut out);
            }
            ColorMode::Silent => color_silent(&text, palette, &mut out),
            ColorMode::AlternLettres => {
                let mut count = 0;
                for cluster in clusters(&text) {
                    match get_char_type(text[cluster.start]) {
                        CharType::Punctuation | CharType::Whitespace => out.push(&text[cluster], None),
                        _ => {
                            out.push(&text[cluster], Some(cycle(palette.letters, count)));
                            count += 1;
                        }
                    }
                }
            }
            ColorMode::AlternMots => {
                let mut count = 0;
                for piece in split_on_whitespace(&text) {
                    if piece.is_word {
                        out.push(&text[piece.range], Some(cycle(palette.words, count)));
                        count += 1;
                    } else {
                        out.push(&text[piece.range], None);
                    }
                }
            }
            ColorMode::Vowels | ColorMode::Consonants => {
                for cluster in clusters(&text) {
                    let c = AlignedWord::new(&text[cluster.clone()]).folded[0];
                    let color = match config.mode {
                        ColorMode::Vowels if is_vowel(c) => Some(palette.vowels),
                        ColorMode::Consonants if is_consonant(c) => Some(palette.consonants),
                        _ => None,
                    };
                    out.push(&text[cluster], color);
                }
            }
            ColorMode::Letters => {
                let targets = config.targets();
                if targets.is_empty() {
                    out.push(&text, None);
                } else {
                    for cluster in clusters(&text) {
                        let c = AlignedWord::new(&text[cluster.clone()]).folded[0];
                        let color = targets
                            .iter()
                            .position(|&t| t == c)
                            .map(|index| cycle(palette.phonemes, index));
                        out.push(&text[cluster], color);
                    }
                }
            }
        }
        out.finish()
    }

    fn color_grammar(&self, text: &[char], palette: &Palette, out: &mut RunBuilder<'_>) {
        for piece in split_words(text) {
            let slice = &text[piece.range];
            if !piece.is_word {
                out.push(slice, None);
                continue;
            }
            let folded: String = AlignedWord::new(slice).folded.into_iter().collect();
            let color = self
                .lexicon
                .and_then(|lexicon| lookup_tag(&folded, lexicon))
                .and_then(|tag| palette.grammar_color(tag));
            out.push(slice, color);
        }
    }
}

/// The processed paragraph, or a copy of the original when processing
/// changed its text.
fn checked_paragraph(original: &Paragraph, processed: Paragraph, mode: ColorMode) -> Paragraph {
    let before = original.text();
    let after = processed.text();
    if before != after {
        warn!(
            mode = %mode,
            expected_chars = before.chars().count(),
            actual_chars = after.chars().count(),
            "colorization changed paragraph text, keeping original"
        );
        return original.clone();
    }

    trace!(
        mode = %mode,
        runs_in = original.text_runs.len(),
        runs_out = processed.text_runs.len(),
        "paragraph colorized"
    );
    processed
}

/// Phoneme and syllable modes.
///
/// `phonemes` hashes each phoneme to a color, `alternphonemes` cycles
/// colors across the whole run, `syllables` alternates colors within each
/// word. With `highlight_silent`, the silent tail of each word takes the
/// silent color, splitting the segment it starts in.
fn color_segments(text: &[char], config: &ColorizeConfig, palette: &Palette, out: &mut RunBuilder<'_>) {
    let show_arc = config.mode == ColorMode::Syllables && config.options.show_arcs;
    let mut phoneme_count = 0;

    for piece in split_words(text) {
        let word = &text[piece.range];
        if !piece.is_word {
            out.push(word, None);
            continue;
        }

        let aligned = AlignedWord::new(word);
        let spans = segment_spans(&aligned.folded);
        let silent_start = if config.options.highlight_silent {
            detect_silent_chars(&aligned.folded).first().copied()
        } else {
            None
        };

        let segments: Vec<(Range<usize>, &'static str)> = match config.mode {
            ColorMode::Syllables => syllable_ranges(&spans)
                .into_iter()
                .enumerate()
                .map(|(index, range)| (range, cycle(palette.syllables, index)))
                .collect(),
            ColorMode::AlternPhonemes => spans
                .iter()
                .map(|span| {
                    let color = cycle(palette.phonemes, phoneme_count);
                    phoneme_count += 1;
                    (span.start..span.end(), color)
                })
                .collect(),
            _ => spans
                .iter()
                .map(|span| {
                    let phoneme: String = aligned.folded[span.start..span.end()].iter().collect();
                    (span.start..span.end(), hashed_color(palette.phonemes, &phoneme))
                })
                .collect(),
        };

        for (range, color) in segments {
            let silent_from = silent_start.filter(|&s| s < range.end).map(|s| s.max(range.start));
            let (voiced, silent) = match silent_from {
                Some(s) => (range.start..s, Some(s..range.end)),
                None => (range.clone(), None),
            };
            let mark_arc = |f: &mut Formatting| {
                if show_arc {
                    f.show_arc = Some(true);
                }
            };
            if !voiced.is_empty() {
                out.push_with(&word[aligned.original_range(voiced)], Some(color), mark_arc);
            }
            if let Some(silent) = silent {
                out.push_with(&word[aligned.original_range(silent)], Some(palette.silent), mark_arc);
            }
        }
    }
}

/// Silent mode: the rest of each word is uncolored, every silent letter
/// is its own segment.
fn color_silent(text: &[char], palette: &Palette, out: &mut RunBuilder<'_>) {
    for piece in split_words(text) {
        let word = &text[piece.range];
        if !piece.is_word {
            out.push(word, None);
            continue;
        }
        let aligned = AlignedWord::new(word);
        let silent = detect_silent_chars(&aligned.folded);
        let mut last = 0;
        for index in silent {
            if index > last {
                out.push(&word[aligned.original_range(last..index)], None);
            }
            out.push(&word[aligned.original_range(index..index + 1)], Some(palette.silent));
            last = index + 1;
        }
        if last < aligned.folded.len() {
            out.push(&word[aligned.original_range(last..aligned.folded.len())], None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;
    use onlydys_core::enums::GrammarTag;

    fn colorize(text: &str, config: &ColorizeConfig) -> Vec<TextRun> {
        Colorizer::default().process_run(&TextRun::plain(text), config)
    }

    fn texts(runs: &[TextRun]) -> Vec<&str> {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    fn colors(runs: &[TextRun]) -> Vec<Option<&str>> {
        runs.iter().map(|r| r.formatting.color.as_deref()).collect()
    }

    fn mode(mode: ColorMode) -> ColorizeConfig {
        ColorizeConfig::new(mode)
    }

    fn with_options(mode: ColorMode, options: ColorizeOptions) -> ColorizeConfig {
        ColorizeConfig::new(mode).with_options(options)
    }

    #[test]
    fn none_mode_is_identity() {
        let runs = colorize("Le chat.", &mode(ColorMode::None));
        assert_eq!(texts(&runs), vec!["Le chat."]);
        assert_eq!(colors(&runs), vec![None]);
    }

    #[test]
    fn syllables_alternate_per_word() {
        let runs = colorize("banane arbre", &mode(ColorMode::Syllables));
        assert_eq!(texts(&runs), vec!["ba", "na", "ne", " ", "ar", "bre"]);
        assert_eq!(
            colors(&runs),
            vec![
                Some("#A60628"),
                Some("#0047AB"),
                Some("#A60628"),
                None,
                Some("#A60628"),
                Some("#0047AB"),
            ]
        );
        assert!(runs.iter().all(|r| r.formatting.show_arc.is_none()));
    }

    #[test]
    fn syllables_keep_original_case() {
        let runs = colorize("BANANE", &mode(ColorMode::Syllables));
        assert_eq!(texts(&runs), vec!["BA", "NA", "NE"]);
    }

    #[test]
    fn syllable_arcs() {
        let options = ColorizeOptions {
            show_arcs: true,
            ..ColorizeOptions::default()
        };
        let runs = colorize("ami !", &with_options(ColorMode::Syllables, options));
        assert_eq!(texts(&runs), vec!["a", "mi", " !"]);
        assert_eq!(runs[0].formatting.show_arc, Some(true));
        assert_eq!(runs[1].formatting.show_arc, Some(true));
        assert_eq!(runs[2].formatting.show_arc, None);
    }

    #[test]
    fn alternphonemes_counter_spans_words() {
        let runs = colorize("ami ou", &mode(ColorMode::AlternPhonemes));
        assert_eq!(texts(&runs), vec!["a", "m", "i", " ", "ou"]);
        // Fourth phoneme of the run, fourth color.
        assert_eq!(runs[4].formatting.color.as_deref(), Some("#AA3300"));
    }

    #[test]
    fn phonemes_hash_is_position_independent() {
        let runs = colorize("ou chou", &mode(ColorMode::Phonemes));
        assert_eq!(texts(&runs), vec!["ou", " ", "ch", "ou"]);
        assert_eq!(runs[0].formatting.color, runs[3].formatting.color);
    }

    #[test]
    fn silent_mode_splits_each_silent_letter() {
        let runs = colorize("Pommes", &mode(ColorMode::Silent));
        assert_eq!(texts(&runs), vec!["Pomm", "e", "s"]);
        assert_eq!(colors(&runs), vec![None, Some("#606060"), Some("#606060")]);
    }

    #[test]
    fn silent_overlay_splits_straddling_syllable() {
        let options = ColorizeOptions {
            highlight_silent: true,
            ..ColorizeOptions::default()
        };
        let runs = colorize("parlent", &with_options(ColorMode::Syllables, options));
        // Syllables "par" + "lent"; silent tail "ent".
        assert_eq!(texts(&runs), vec!["par", "l", "ent"]);
        assert_eq!(
            colors(&runs),
            vec![Some("#A60628"), Some("#0047AB"), Some("#606060")]
        );
    }

    #[test]
    fn grammar_mode_uses_lexicon_and_lemmas() {
        let lexicon: HashMap<String, GrammarTag> = [
            ("le".to_string(), GrammarTag::Det),
            ("chat".to_string(), GrammarTag::Nom),
            ("manger".to_string(), GrammarTag::Ver),
        ]
        .into_iter()
        .collect();
        let colorizer = Colorizer::new(Some(&lexicon));
        let runs = colorizer.process_run(&TextRun::plain("Le chat mangez !"), &mode(ColorMode::Grammar));
        assert_eq!(texts(&runs), vec!["Le", " ", "chat", " ", "mangez", " !"]);
        assert_eq!(
            colors(&runs),
            vec![Some("#6D214F"), None, Some("#A60628"), None, Some("#0047AB"), None]
        );
    }

    #[test]
    fn changed_text_keeps_original_paragraph() {
        let bold = Formatting {
            bold: Some(true),
            ..Formatting::default()
        };
        let original = Paragraph::new(vec![TextRun::new("Le chat", bold), TextRun::plain(" dort")]);
        let damaged = Paragraph::new(vec![TextRun::plain("Le chat dor")]);
        let result = checked_paragraph(&original, damaged, ColorMode::Syllables);
        assert_eq!(result, original);
    }

    #[test]
    fn unchanged_text_keeps_processed_paragraph() {
        let original = Paragraph::new(vec![TextRun::plain("Le chat")]);
        let processed = Paragraph::new(vec![TextRun::plain("Le"), TextRun::plain(" chat")]);
        let result = checked_paragraph(&original, processed.clone(), ColorMode::Syllables);
        assert_eq!(result, processed);
    }

    #[test]
    fn grammar_mode_leaves_unlisted_categories_plain() {
        let lexicon: HashMap<String, GrammarTag> = [
            ("au".to_string(), GrammarTag::Other),
            ("chat".to_string(), GrammarTag::Nom),
        ]
        .into_iter()
        .collect();
        let colorizer = Colorizer::new(Some(&lexicon));
        let runs = colorizer.process_run(&TextRun::plain("au chat"), &mode(ColorMode::Grammar));
        assert_eq!(colors(&runs), vec![None, None, Some("#A60628")]);
    }

    #[test]
    fn grammar_mode_without_lexicon_leaves_words_plain() {
        let runs = colorize("Le chat", &mode(ColorMode::Grammar));
        assert_eq!(colors(&runs), vec![None, None, None]);
    }

    #[test]
    fn alternlettres_skips_spaces_and_punctuation() {
        let runs = colorize("ab, c", &mode(ColorMode::AlternLettres));
        assert_eq!(texts(&runs), vec!["a", "b", ",", " ", "c"]);
        assert_eq!(
            colors(&runs),
            vec![Some("#A60628"), Some("#0047AB"), None, None, Some("#006B3C")]
        );
    }

    #[test]
    fn alternmots_alternates_words() {
        let runs = colorize("un  deux trois", &mode(ColorMode::AlternMots));
        assert_eq!(texts(&runs), vec!["un", "  ", "deux", " ", "trois"]);
        assert_eq!(
            colors(&runs),
            vec![Some("#000000"), None, Some("#0047AB"), None, Some("#000000")]
        );
    }

    #[test]
    fn vowels_and_consonants() {
        let vowels = colorize("\u{00C9}t\u{00E9}", &mode(ColorMode::Vowels));
        assert_eq!(colors(&vowels), vec![Some("#6D214F"), None, Some("#6D214F")]);
        let consonants = colorize("\u{00E9}t\u{00E9}", &mode(ColorMode::Consonants));
        assert_eq!(colors(&consonants), vec![None, Some("#0047AB"), None]);
    }

    #[test]
    fn letters_mode_highlights_targets() {
        let options = ColorizeOptions {
            target_letters: Some("bd".to_string()),
            ..ColorizeOptions::default()
        };
        let runs = colorize("Bad", &with_options(ColorMode::Letters, options));
        assert_eq!(colors(&runs), vec![Some("#A60628"), None, Some("#0047AB")]);
    }

    #[test]
    fn letters_mode_without_targets_is_identity() {
        let runs = colorize("bad", &mode(ColorMode::Letters));
        assert_eq!(texts(&runs), vec!["bad"]);
        assert_eq!(colors(&runs), vec![None]);
    }

    #[test]
    fn highlighting_moves_color_to_background() {
        let options = ColorizeOptions {
            use_highlighting: true,
            ..ColorizeOptions::default()
        };
        let runs = colorize("ami", &with_options(ColorMode::Syllables, options));
        assert_eq!(runs[0].formatting.background_color.as_deref(), Some("#FFE6E6"));
        assert_eq!(runs[0].formatting.color.as_deref(), Some("#000000"));
        assert_eq!(runs[1].formatting.background_color.as_deref(), Some("#E6F2FF"));
    }

    #[test]
    fn alternlines_uses_line_index() {
        let mut config = mode(ColorMode::AlternLines);
        config.line_index = 1;
        let runs = colorize("une ligne", &config);
        assert_eq!(texts(&runs), vec!["une ligne"]);
        assert_eq!(runs[0].formatting.background_color.as_deref(), Some("#E0F0FF"));
        assert_eq!(runs[0].formatting.color, None);
    }

    #[test]
    fn segments_inherit_run_formatting() {
        let run = TextRun::new(
            "ami",
            Formatting {
                bold: Some(true),
                color: Some("#123456".to_string()),
                ..Formatting::default()
            },
        );
        let runs = Colorizer::default().process_run(&run, &mode(ColorMode::Syllables));
        assert!(runs.iter().all(|r| r.formatting.bold == Some(true)));
        assert_eq!(runs[0].formatting.color.as_deref(), Some("#A60628"));
    }

    #[test]
    fn decomposed_input_is_preserved() {
        let text = "E\u{0301}te\u{0301} cha\u{0302}teau";
        for mode_value in ColorMode::ALL {
            let runs = colorize(text, &mode(mode_value));
            let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
            assert_eq!(joined, text, "mode {mode_value} changed the text");
        }
    }

    #[test]
    fn process_paragraph_drops_empty_runs() {
        let paragraph = Paragraph::new(vec![TextRun::plain(""), TextRun::plain("ami")]);
        let processed = Colorizer::default().process_paragraph(&paragraph, &mode(ColorMode::None));
        assert_eq!(processed.text_runs.len(), 1);
        assert_eq!(processed.text(), "ami");
    }

    #[test]
    fn process_document_alternates_lines() {
        let document = DocumentModel::from_plain_text("un\ndeux\ntrois");
        let processed = Colorizer::default().process_document(&document, &mode(ColorMode::AlternLines));
        let backgrounds: Vec<Option<&str>> = processed
            .paragraphs
            .iter()
            .map(|p| p.text_runs[0].formatting.background_color.as_deref())
            .collect();
        assert_eq!(backgrounds, vec![Some("#FFFACD"), Some("#E0F0FF"), Some("#FFFACD")]);
        // The input document is untouched.
        assert_eq!(document.paragraphs[0].text_runs[0].formatting, Formatting::default());
    }

    #[test]
    fn split_words_merges_non_word_tokens() {
        let text: Vec<char> = "a, 12 b".chars().collect();
        let pieces = split_words(&text);
        let ranges: Vec<(Range<usize>, bool)> = pieces.into_iter().map(|p| (p.range, p.is_word)).collect();
        assert_eq!(ranges, vec![(0..1, true), (1..6, false), (6..7, true)]);
    }
}
