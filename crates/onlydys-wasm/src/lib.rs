// WASM bindings for the OnlyDys French reading aids.
//
// Provides a `WasmOnlyDys` class exported via wasm-bindgen that wraps
// the `OnlyDysHandle` from onlydys-fr. Documents, suggestions and analyses
// cross the boundary as plain JavaScript objects through
// serde-wasm-bindgen, using the same camelCase shapes as the JSON API.
//
// Usage from JavaScript:
//
//   const dys = new WasmOnlyDys(dictionaryRecords);
//   dys.suggest("maiso", null);        // => [{ word: "maison", score: 0.8, ... }]
//   dys.classify("vin", "fin");        // => { type: "Phonetic", color: "#E69F00", icon: ... }
//   dys.analyze("maison");             // => { phonemes: ["m", "ai", ...], ... }
//   dys.colorize(doc, "syllables");    // => { paragraphs: [...] }
//   dys.simulate("Bonjour tout le monde");
//   dys.terminate();                   // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use onlydys_core::entry::DictionaryEntry;
use onlydys_core::enums::TokenType;
use onlydys_core::text::DocumentModel;
use onlydys_fr::colorize::{ColorizeConfig, ColorizeOptions, ReadingStyle};
use onlydys_fr::handle::{OnlyDysError, OnlyDysHandle};
use onlydys_fr::simulation::SimulationOptions;
use onlydys_fr::suggestion::RankingModel;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    token_type: &'static str,
    text: String,
    token_len: usize,
    pos: usize,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn token_type_to_str(tt: TokenType) -> &'static str {
    match tt {
        TokenType::None => "None",
        TokenType::Word => "Word",
        TokenType::Punctuation => "Punctuation",
        TokenType::Whitespace => "Whitespace",
        TokenType::Unknown => "Unknown",
    }
}

fn onlydys_error_to_js(e: OnlyDysError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmOnlyDys
// ============================================================================

/// French reading-aid engine for WebAssembly.
///
/// Provides phonetic spelling suggestions, confusion labels, word analysis,
/// document colorization and dyslexia simulation.
#[wasm_bindgen]
pub struct WasmOnlyDys {
    handle: OnlyDysHandle,
}

#[wasm_bindgen]
impl WasmOnlyDys {
    /// Create a new instance from an array of dictionary records
    /// (`{ w, g, frequence_norm?, p?, i? }`: word, grammar tag, normalized
    /// frequency, phonetic code, illustration).
    #[wasm_bindgen(constructor)]
    pub fn new(entries: JsValue) -> Result<WasmOnlyDys, JsError> {
        let entries: Vec<DictionaryEntry> = from_js(entries)?;
        let handle = OnlyDysHandle::new(entries).map_err(onlydys_error_to_js)?;
        Ok(WasmOnlyDys { handle })
    }

    /// Create a new instance from a tab-separated dictionary
    /// (`word<TAB>tag<TAB>frequency[<TAB>code]` per line).
    #[wasm_bindgen(js_name = "fromTsv")]
    pub fn from_tsv(text: &str) -> Result<WasmOnlyDys, JsError> {
        let handle = OnlyDysHandle::from_tsv(text).map_err(onlydys_error_to_js)?;
        Ok(WasmOnlyDys { handle })
    }

    /// Number of words in the loaded dictionary.
    #[wasm_bindgen(js_name = "dictionarySize")]
    pub fn dictionary_size(&self) -> usize {
        self.handle.dictionary().len()
    }

    /// Ranked corrections for a typed word.
    ///
    /// `preceding` is the word before it in the sentence, used to favor
    /// grammatically plausible suggestions.
    pub fn suggest(&self, word: &str, preceding: Option<String>) -> Result<JsValue, JsError> {
        to_js(&self.handle.suggest(word, preceding.as_deref()))
    }

    /// Suggestions for every whitespace-separated word of three or more
    /// characters, dictionary words included.
    ///
    /// Words with no suggestion are left out of the result.
    #[wasm_bindgen(js_name = "suggestText")]
    pub fn suggest_text(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.suggest_text(text))
    }

    /// Label the kind of confusion between a typed word and a suggestion.
    pub fn classify(&self, typed: &str, suggestion: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.classify(typed, suggestion))
    }

    /// Four-character phonetic code of a word.
    #[wasm_bindgen(js_name = "phoneticCode")]
    pub fn phonetic_code(&self, word: &str) -> String {
        self.handle.phonetic_code(word)
    }

    /// Phonemes, syllables and silent letters of a word.
    pub fn analyze(&self, word: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.analyze_word(word))
    }

    pub fn lemmatize(&self, word: &str) -> String {
        self.handle.lemmatize(word)
    }

    /// Grammar tag of a word, or null when it is unknown.
    #[wasm_bindgen(js_name = "grammarTag")]
    pub fn grammar_tag(&self, word: &str) -> Option<String> {
        self.handle.grammar_tag(word).map(|tag| tag.as_str().to_string())
    }

    /// Tokenize text into a list of tokens.
    ///
    /// Returns a JavaScript array of token objects with fields:
    /// `tokenType` ("Word", "Punctuation", "Whitespace", "Unknown"),
    /// `text`, `tokenLen`, `pos`.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let js_tokens: Vec<JsToken> = self
            .handle
            .tokens(text)
            .into_iter()
            .map(|t| JsToken {
                token_type: token_type_to_str(t.token_type),
                text: t.text,
                token_len: t.token_len,
                pos: t.pos,
            })
            .collect();
        to_js(&js_tokens)
    }

    /// Colorize a document (`{ paragraphs: [{ textRuns: [...] }] }`) in the
    /// named mode with the current options.
    pub fn colorize(&self, document: JsValue, mode: &str) -> Result<JsValue, JsError> {
        let document: DocumentModel = from_js(document)?;
        let output = self
            .handle
            .colorize_by_name(&document, mode)
            .map_err(onlydys_error_to_js)?;
        to_js(&output)
    }

    /// Colorize a document with a full request
    /// (`{ mode, options?, lineIndex? }`), ignoring the stored options.
    #[wasm_bindgen(js_name = "processDocument")]
    pub fn process_document(&self, document: JsValue, config: JsValue) -> Result<JsValue, JsError> {
        let document: DocumentModel = from_js(document)?;
        let config: ColorizeConfig = from_js(config)?;
        to_js(&self.handle.process_document(&document, &config))
    }

    /// Colorize plain text, one paragraph per line.
    #[wasm_bindgen(js_name = "colorizeText")]
    pub fn colorize_text(&self, text: &str, mode: &str) -> Result<JsValue, JsError> {
        let document = DocumentModel::from_plain_text(text);
        let output = self
            .handle
            .colorize_by_name(&document, mode)
            .map_err(onlydys_error_to_js)?;
        to_js(&output)
    }

    /// Apply the reading font to every run of a document.
    #[wasm_bindgen(js_name = "applyReadingStyle")]
    pub fn apply_reading_style(&self, document: JsValue) -> Result<JsValue, JsError> {
        let document: DocumentModel = from_js(document)?;
        to_js(&self.handle.apply_reading_style(&document))
    }

    /// Grammar tags with their labels and colors, in display order.
    #[wasm_bindgen(js_name = "grammarLegend")]
    pub fn grammar_legend(&self) -> Result<JsValue, JsError> {
        to_js(&self.handle.grammar_legend())
    }

    /// Map from grammar tag to color, for hosts that only need the lookup.
    #[wasm_bindgen(js_name = "grammarColors")]
    pub fn grammar_colors(&self) -> Result<JsValue, JsError> {
        let obj = js_sys::Object::new();
        for entry in self.handle.grammar_legend() {
            js_sys::Reflect::set(
                &obj,
                &JsValue::from_str(entry.tag.as_str()),
                &JsValue::from_str(entry.color),
            )
            .map_err(|e| JsError::new(&format!("{e:?}")))?;
        }
        Ok(obj.into())
    }

    /// Scramble the words of a text the way a dyslexic reader may see them.
    pub fn simulate(&self, text: &str) -> String {
        self.handle.simulate(text)
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        OnlyDysHandle::version().to_string()
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {
        // Drop self, releasing the dictionary.
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the maximum number of suggestions to return.
    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.handle.set_max_suggestions(value);
    }

    /// Set the ranking model: "weighted" or "distance".
    #[wasm_bindgen(js_name = "setRankingModel")]
    pub fn set_ranking_model(&mut self, value: &str) -> Result<(), JsError> {
        let model: RankingModel = value.parse().map_err(|e: String| JsError::new(&e))?;
        self.handle.set_ranking_model(model);
        Ok(())
    }

    /// Set how many edits two phonetic codes may differ by.
    #[wasm_bindgen(js_name = "setMaxPhoneticDistance")]
    pub fn set_max_phonetic_distance(&mut self, value: usize) {
        self.handle.set_max_phonetic_distance(value);
    }

    /// Set whether syllable runs carry arcs.
    #[wasm_bindgen(js_name = "setShowArcs")]
    pub fn set_show_arcs(&mut self, value: bool) {
        self.handle.set_show_arcs(value);
    }

    /// Set whether silent letters are grayed out in phoneme and syllable modes.
    #[wasm_bindgen(js_name = "setHighlightSilent")]
    pub fn set_highlight_silent(&mut self, value: bool) {
        self.handle.set_highlight_silent(value);
    }

    /// Set whether colors go to the background instead of the text.
    #[wasm_bindgen(js_name = "setUseHighlighting")]
    pub fn set_use_highlighting(&mut self, value: bool) {
        self.handle.set_use_highlighting(value);
    }

    /// Set the letters of the `letters` mode. Empty clears them.
    #[wasm_bindgen(js_name = "setTargetLetters")]
    pub fn set_target_letters(&mut self, value: &str) {
        self.handle.set_target_letters(value);
    }

    /// Replace all colorization options (`{ showArcs, highlightSilent, ... }`).
    #[wasm_bindgen(js_name = "setColorizeOptions")]
    pub fn set_colorize_options(&mut self, options: JsValue) -> Result<(), JsError> {
        let options: ColorizeOptions = from_js(options)?;
        self.handle.set_colorize_options(options);
        Ok(())
    }

    /// Set the reading font (`{ fontFamily, fontSize, ... }`).
    #[wasm_bindgen(js_name = "setReadingStyle")]
    pub fn set_reading_style(&mut self, style: JsValue) -> Result<(), JsError> {
        let style: ReadingStyle = from_js(style)?;
        self.handle.set_reading_style(style);
        Ok(())
    }

    /// Set the simulation options (`{ minWordLength, scrambleChance, seed }`).
    #[wasm_bindgen(js_name = "setSimulationOptions")]
    pub fn set_simulation_options(&mut self, options: JsValue) -> Result<(), JsError> {
        let options: SimulationOptions = from_js(options)?;
        self.handle.set_simulation_options(options);
        Ok(())
    }
}
