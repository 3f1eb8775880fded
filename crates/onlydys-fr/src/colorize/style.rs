// Reading style: dyslexia-friendly font applied to every run

use onlydys_core::text::DocumentModel;
use serde::{Deserialize, Serialize};

/// Font settings applied by [`apply_reading_style`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadingStyle {
    /// Default: "OpenDyslexic".
    pub font_family: String,
    /// Size in points. Default: 12.
    pub font_size: f32,
}

impl Default for ReadingStyle {
    fn default() -> Self {
        Self {
            font_family: "OpenDyslexic".to_string(),
            font_size: 12.0,
        }
    }
}

/// Return a copy of `document` with the style's font on every run.
/// Text and other formatting are untouched.
pub fn apply_reading_style(document: &DocumentModel, style: &ReadingStyle) -> DocumentModel {
    let mut styled = document.clone();
    for run in styled
        .paragraphs
        .iter_mut()
        .flat_map(|paragraph| paragraph.text_runs.iter_mut())
    {
        run.formatting.font_family = Some(style.font_family.clone());
        run.formatting.font_size = Some(style.font_size);
    }
    styled
}

#[cfg(test)]
mod tests {
    use super::*;
    use onlydys_core::text::{Formatting, Paragraph, TextRun};

    #[test]
    fn sets_font_on_every_run() {
        let bold = Formatting {
            bold: Some(true),
            ..Formatting::default()
        };
        let document = DocumentModel::new(vec![
            Paragraph::new(vec![TextRun::new("Le ", bold.clone()), TextRun::plain("chat")]),
            Paragraph::new(vec![TextRun::plain("dort")]),
        ]);
        let styled = apply_reading_style(&document, &ReadingStyle::default());

        for run in styled.paragraphs.iter().flat_map(|p| &p.text_runs) {
            assert_eq!(run.formatting.font_family.as_deref(), Some("OpenDyslexic"));
            assert_eq!(run.formatting.font_size, Some(12.0));
        }
        assert_eq!(styled.paragraphs[0].text_runs[0].formatting.bold, Some(true));
        assert_eq!(styled.paragraphs[0].text(), document.paragraphs[0].text());
        // The input is not modified.
        assert_eq!(document.paragraphs[1].text_runs[0].formatting, Formatting::default());
    }

    #[test]
    fn style_deserializes_with_defaults() {
        let style: ReadingStyle = serde_json::from_str(r#"{"fontSize":14}"#).unwrap();
        assert_eq!(style.font_family, "OpenDyslexic");
        assert_eq!(style.font_size, 14.0);
    }
}
