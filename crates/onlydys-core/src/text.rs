// Text model exchanged with the word-processor plugin: runs, paragraphs, documents

use serde::{Deserialize, Serialize};

/// Formatting shared by every character of a run.
///
/// Every field is optional: `None` means "not set" and serializes as an
/// absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formatting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikeout: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Ask the host to draw a syllable arc under the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_arc: Option<bool>,
}

/// A contiguous span of text with one formatting record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub formatting: Formatting,
}

impl TextRun {
    pub fn new(text: impl Into<String>, formatting: Formatting) -> Self {
        Self {
            text: text.into(),
            formatting,
        }
    }

    /// A run with no formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Formatting::default())
    }
}

/// An ordered sequence of runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub text_runs: Vec<TextRun>,
}

impl Paragraph {
    pub fn new(text_runs: Vec<TextRun>) -> Self {
        Self { text_runs }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.text_runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// An ordered sequence of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentModel {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl DocumentModel {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Build a model with one plain run per line of `text`.
    pub fn from_plain_text(text: &str) -> Self {
        let paragraphs = text
            .lines()
            .map(|line| Paragraph::new(vec![TextRun::plain(line)]))
            .collect();
        Self { paragraphs }
    }
}
