// OnlyDysHandle: single entry point for the French reading aids
//
// Owns the dictionary and the user's settings and exposes suggestion,
// analysis, colorization and simulation through one API.
//
// Design notes:
// - The dictionary sits behind an `Arc` so several handles (one per
//   document, one per thread) can share one loaded dictionary.
// - Settings are plain option structs stored in the handle; per-call
//   methods read them, setters change them.
// - Nothing here fails after construction: analysis methods degrade to
//   empty or unchanged results.

use std::sync::Arc;

use onlydys_core::entry::DictionaryEntry;
use onlydys_core::enums::GrammarTag;
use onlydys_core::text::{DocumentModel, Paragraph};
use onlydys_core::token::Token;

use crate::colorize::{
    ColorMode, ColorizeConfig, ColorizeOptions, Colorizer, ConfigError, LegendEntry, ReadingStyle,
    apply_reading_style, grammar_legend,
};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::morphology::{lemmatize, lookup_tag};
use crate::segmentation::{WordAnalysis, analyze_word};
use crate::suggestion::{
    ConfusionLabel, RankerOptions, RankingModel, SuggestionResult, WordSuggestions, classify, rank,
    suggest_text,
};
use crate::{phonetic, tokenizer};

#[cfg(feature = "simulate")]
use crate::simulation::{SimulationOptions, simulate_dyslexia};

/// Error type for handle construction and configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum OnlyDysError {
    /// The dictionary data is invalid.
    #[error("invalid dictionary: {0}")]
    Dictionary(#[from] DictionaryError),

    /// A colorization setting could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Top-level handle owning the dictionary and the reading-aid settings.
pub struct OnlyDysHandle {
    dictionary: Arc<Dictionary>,

    // -- Options --
    /// Suggestion ranking options.
    ranker_options: RankerOptions,

    /// Options shared by all colorization modes.
    colorize_options: ColorizeOptions,

    /// Font applied by `apply_reading_style`.
    reading_style: ReadingStyle,

    #[cfg(feature = "simulate")]
    simulation_options: SimulationOptions,
}

impl OnlyDysHandle {
    /// Build a handle from dictionary records.
    pub fn new(entries: Vec<DictionaryEntry>) -> Result<Self, OnlyDysError> {
        Ok(Self::from_dictionary(Arc::new(Dictionary::new(entries)?)))
    }

    /// Build a handle from a tab-separated dictionary.
    pub fn from_tsv(text: &str) -> Result<Self, OnlyDysError> {
        Ok(Self::from_dictionary(Arc::new(Dictionary::from_tsv(text)?)))
    }

    /// Build a handle around an already loaded, possibly shared dictionary.
    pub fn from_dictionary(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            ranker_options: RankerOptions::default(),
            colorize_options: ColorizeOptions::default(),
            reading_style: ReadingStyle::default(),
            #[cfg(feature = "simulate")]
            simulation_options: SimulationOptions::default(),
        }
    }

    /// The dictionary, for sharing with another handle.
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Crate version.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Rank corrections for a word. `preceding` is the word typed before it.
    pub fn suggest(&self, word: &str, preceding: Option<&str>) -> Vec<SuggestionResult> {
        rank(word, preceding, &self.dictionary, &self.ranker_options)
    }

    /// Rank corrections for every checked word of a text.
    pub fn suggest_text(&self, text: &str) -> Vec<WordSuggestions> {
        suggest_text(text, &self.dictionary, &self.ranker_options)
    }

    /// Explain how a suggestion relates to the typed word.
    pub fn classify(&self, typed: &str, suggestion: &str) -> ConfusionLabel {
        classify(typed, suggestion)
    }

    /// Four-character phonetic code of a word (empty if it has no letter).
    pub fn phonetic_code(&self, word: &str) -> String {
        phonetic::encode(word)
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Phonemes, syllables and silent letters of a word.
    pub fn analyze_word(&self, word: &str) -> WordAnalysis {
        analyze_word(word)
    }

    /// Lemma of a word, validated against the dictionary.
    pub fn lemmatize(&self, word: &str) -> String {
        lemmatize(word, Some(&*self.dictionary))
    }

    /// Grammar tag of a word or of its lemma.
    pub fn grammar_tag(&self, word: &str) -> Option<GrammarTag> {
        lookup_tag(word, &*self.dictionary)
    }

    /// Split text into word, whitespace, punctuation and unknown tokens.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let text_chars: Vec<char> = text.chars().collect();
        tokenizer::tokenize(&text_chars)
    }

    /// Words of a text, keeping elisions and hyphenated compounds whole.
    pub fn words(&self, text: &str) -> Vec<String> {
        tokenizer::words(text)
    }

    // =========================================================================
    // Colorization
    // =========================================================================

    fn colorizer(&self) -> Colorizer<'_> {
        Colorizer::new(Some(&*self.dictionary))
    }

    fn config(&self, mode: ColorMode) -> ColorizeConfig {
        ColorizeConfig::new(mode).with_options(self.colorize_options.clone())
    }

    /// Colorize a document with the handle's options.
    pub fn colorize(&self, document: &DocumentModel, mode: ColorMode) -> DocumentModel {
        self.colorizer().process_document(document, &self.config(mode))
    }

    /// Colorize a document, naming the mode as the plugin does.
    pub fn colorize_by_name(&self, document: &DocumentModel, mode: &str) -> Result<DocumentModel, OnlyDysError> {
        let mode: ColorMode = mode.parse()?;
        Ok(self.colorize(document, mode))
    }

    /// Colorize one paragraph. `line_index` drives the `alternlines` mode.
    pub fn colorize_paragraph(&self, paragraph: &Paragraph, mode: ColorMode, line_index: usize) -> Paragraph {
        let mut config = self.config(mode);
        config.line_index = line_index;
        self.colorizer().process_paragraph(paragraph, &config)
    }

    /// Colorize a document with a complete configuration, ignoring the
    /// handle's options.
    pub fn process_document(&self, document: &DocumentModel, config: &ColorizeConfig) -> DocumentModel {
        self.colorizer().process_document(document, config)
    }

    /// Colorize plain text, one paragraph per line.
    pub fn colorize_text(&self, text: &str, mode: ColorMode) -> DocumentModel {
        self.colorize(&DocumentModel::from_plain_text(text), mode)
    }

    /// Set the reading font on every run of a document.
    pub fn apply_reading_style(&self, document: &DocumentModel) -> DocumentModel {
        apply_reading_style(document, &self.reading_style)
    }

    /// Grammar colors for the current rendering style.
    pub fn grammar_legend(&self) -> Vec<LegendEntry> {
        grammar_legend(self.colorize_options.use_highlighting)
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Scramble the words of a text the way a dyslexic reader may see them.
    #[cfg(feature = "simulate")]
    pub fn simulate(&self, text: &str) -> String {
        simulate_dyslexia(text, &self.simulation_options)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the maximum number of suggestions to return.
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.ranker_options.limit = value;
    }

    /// Set the suggestion ranking model.
    pub fn set_ranking_model(&mut self, value: RankingModel) {
        self.ranker_options.model = value;
    }

    /// Set how many edits two phonetic codes may differ by.
    pub fn set_max_phonetic_distance(&mut self, value: usize) {
        self.ranker_options.max_phonetic_distance = value;
    }

    pub fn set_show_arcs(&mut self, value: bool) {
        self.colorize_options.show_arcs = value;
    }

    pub fn set_highlight_silent(&mut self, value: bool) {
        self.colorize_options.highlight_silent = value;
    }

    /// Set whether colors go to the background instead of the text.
    pub fn set_use_highlighting(&mut self, value: bool) {
        self.colorize_options.use_highlighting = value;
    }

    /// Set the letters of the `letters` mode. Empty clears them.
    pub fn set_target_letters(&mut self, value: &str) {
        self.colorize_options.target_letters = (!value.is_empty()).then(|| value.to_string());
    }

    /// Replace all colorization options at once.
    pub fn set_colorize_options(&mut self, options: ColorizeOptions) {
        self.colorize_options = options;
    }

    pub fn set_reading_style(&mut self, style: ReadingStyle) {
        self.reading_style = style;
    }

    #[cfg(feature = "simulate")]
    pub fn set_simulation_options(&mut self, options: SimulationOptions) {
        self.simulation_options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onlydys_core::enums::TokenType;
    use onlydys_core::text::TextRun;

    fn handle() -> OnlyDysHandle {
        OnlyDysHandle::new(vec![
            DictionaryEntry::new("le", GrammarTag::Det, 0.9),
            DictionaryEntry::new("chat", GrammarTag::Nom, 0.7),
            DictionaryEntry::new("maison", GrammarTag::Nom, 0.8),
            DictionaryEntry::new("mais", GrammarTag::Con, 0.9),
            DictionaryEntry::new("manger", GrammarTag::Ver, 0.6),
        ])
        .unwrap()
    }

    #[test]
    fn invalid_entries_are_rejected() {
        let err = OnlyDysHandle::new(vec![DictionaryEntry::new("", GrammarTag::Nom, 0.5)]);
        assert!(matches!(err, Err(OnlyDysError::Dictionary(DictionaryError::EmptyWord { index: 0 }))));
    }

    #[test]
    fn from_tsv() {
        let handle = OnlyDysHandle::from_tsv("chat\tNOM\t0.7\nle\tART:def\t0.9\n").unwrap();
        assert_eq!(handle.dictionary().len(), 2);
        assert_eq!(handle.grammar_tag("Le"), Some(GrammarTag::Det));
    }

    #[test]
    fn suggest_uses_limit() {
        let mut handle = handle();
        assert_eq!(handle.suggest("maiso", None).len(), 2);
        handle.set_max_suggestions(1);
        assert_eq!(handle.suggest("maiso", None).len(), 1);
    }

    #[test]
    fn suggest_text_skips_short_words() {
        let results = handle().suggest_text("le maiso");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "maiso");
    }

    #[test]
    fn lemma_and_tag_use_dictionary() {
        let handle = handle();
        assert_eq!(handle.lemmatize("mangez"), "manger");
        assert_eq!(handle.grammar_tag("mangez"), Some(GrammarTag::Ver));
        assert_eq!(handle.grammar_tag("zzz"), None);
    }

    #[test]
    fn tokens_cover_text() {
        let tokens = handle().tokens("Le chat, dort.");
        let types: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Word,
                TokenType::Whitespace,
                TokenType::Word,
                TokenType::Punctuation,
                TokenType::Whitespace,
                TokenType::Word,
                TokenType::Punctuation,
            ]
        );
        assert_eq!(tokens[2].text, "chat");
        assert_eq!(tokens[2].pos, 3);
    }

    #[test]
    fn grammar_colorization_uses_dictionary() {
        let document = handle().colorize_text("Le chat", ColorMode::Grammar);
        let runs = &document.paragraphs[0].text_runs;
        assert_eq!(runs[0].formatting.color.as_deref(), Some("#6D214F"));
        assert_eq!(runs[2].formatting.color.as_deref(), Some("#A60628"));
    }

    #[test]
    fn colorize_by_name_rejects_unknown_modes() {
        let document = DocumentModel::from_plain_text("chat");
        assert!(matches!(
            handle().colorize_by_name(&document, "rainbow"),
            Err(OnlyDysError::Config(ConfigError::UnknownMode(_)))
        ));
        assert!(handle().colorize_by_name(&document, "syllables").is_ok());
    }

    #[test]
    fn options_flow_into_colorization() {
        let mut handle = handle();
        handle.set_use_highlighting(true);
        let paragraph = Paragraph::new(vec![TextRun::plain("ami")]);
        let colored = handle.colorize_paragraph(&paragraph, ColorMode::Syllables, 0);
        assert_eq!(
            colored.text_runs[0].formatting.background_color.as_deref(),
            Some("#FFE6E6")
        );
        assert_eq!(handle.grammar_legend()[0].color, "#FFE6E6");
    }

    #[test]
    fn target_letters_setter() {
        let mut handle = handle();
        handle.set_target_letters("b");
        let document = handle.colorize_text("bob", ColorMode::Letters);
        assert_eq!(document.paragraphs[0].text_runs.len(), 3);
        handle.set_target_letters("");
        let document = handle.colorize_text("bob", ColorMode::Letters);
        assert_eq!(document.paragraphs[0].text_runs.len(), 1);
    }

    #[test]
    fn reading_style() {
        let mut handle = handle();
        handle.set_reading_style(ReadingStyle {
            font_family: "Lexend".to_string(),
            font_size: 14.0,
        });
        let styled = handle.apply_reading_style(&DocumentModel::from_plain_text("chat"));
        let formatting = &styled.paragraphs[0].text_runs[0].formatting;
        assert_eq!(formatting.font_family.as_deref(), Some("Lexend"));
        assert_eq!(formatting.font_size, Some(14.0));
    }

    #[test]
    fn handles_share_a_dictionary() {
        let first = handle();
        let second = OnlyDysHandle::from_dictionary(Arc::clone(first.dictionary()));
        assert!(Arc::ptr_eq(first.dictionary(), second.dictionary()));
        assert_eq!(second.suggest("maiso", None), first.suggest("maiso", None));
    }

    #[cfg(feature = "simulate")]
    #[test]
    fn simulate_with_seed_is_reproducible() {
        let mut handle = handle();
        handle.set_simulation_options(SimulationOptions {
            seed: Some(11),
            ..SimulationOptions::default()
        });
        let text = "Les grenouilles sautent";
        assert_eq!(handle.simulate(text), handle.simulate(text));
    }

    #[test]
    fn version() {
        assert_eq!(OnlyDysHandle::version(), env!("CARGO_PKG_VERSION"));
    }
}
