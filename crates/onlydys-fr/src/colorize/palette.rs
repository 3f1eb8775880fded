// Color palettes for text coloring and background highlighting

use onlydys_core::enums::GrammarTag;
use serde::Serialize;

/// Colors used by one rendering style.
#[derive(Debug)]
pub struct Palette {
    pub phonemes: &'static [&'static str],
    pub syllables: &'static [&'static str],
    pub words: &'static [&'static str],
    pub letters: &'static [&'static str],
    pub vowels: &'static str,
    pub consonants: &'static str,
    pub silent: &'static str,
    /// One color per tag, in [`GrammarTag::ALL`] order.
    grammar: [&'static str; 9],
}

impl Palette {
    /// Color of a tag. `None` for tags outside [`GrammarTag::ALL`].
    pub fn grammar_color(&self, tag: GrammarTag) -> Option<&'static str> {
        GrammarTag::ALL
            .iter()
            .position(|&t| t == tag)
            .map(|index| self.grammar[index])
    }
}

/// Foreground colors (dark, high contrast).
pub static TEXT_PALETTE: Palette = Palette {
    phonemes: &[
        "#A60628", "#0047AB", "#006B3C", "#AA3300", "#006994", "#663300", "#8B008B", "#000000",
    ],
    syllables: &["#A60628", "#0047AB"],
    words: &["#000000", "#0047AB"],
    letters: &["#A60628", "#0047AB", "#006B3C", "#AA3300"],
    vowels: "#6D214F",
    consonants: "#0047AB",
    silent: "#606060",
    grammar: [
        "#A60628", // NOM
        "#0047AB", // VER
        "#006994", // ADJ
        "#006B3C", // ADV
        "#AA3300", // PRO
        "#6D214F", // DET
        "#000000", // PRE
        "#663300", // CON
        "#8B008B", // INT
    ],
};

/// Background colors (light pastels, text stays black).
pub static HIGHLIGHT_PALETTE: Palette = Palette {
    phonemes: &[
        "#FFE6E6", "#E6F2FF", "#E6F9E6", "#FFE6CC", "#E6F9FF", "#F5E6D3", "#F2E6FF", "#F0F0F0",
    ],
    syllables: &["#FFE6E6", "#E6F2FF"],
    words: &["#F0F0F0", "#E6F2FF"],
    letters: &["#FFE6E6", "#E6F2FF", "#E6F9E6", "#FFE6CC"],
    vowels: "#F2E6FF",
    consonants: "#E6F2FF",
    silent: "#F0F0F0",
    grammar: [
        "#FFE6E6", // NOM
        "#E6F2FF", // VER
        "#E6F9FF", // ADJ
        "#E6F9E6", // ADV
        "#FFE6CC", // PRO
        "#F2E6FF", // DET
        "#F0F0F0", // PRE
        "#F5E6D3", // CON
        "#F2E6FF", // INT
    ],
};

/// Paragraph backgrounds of the `alternlines` mode.
pub const LINE_COLORS: [&str; 2] = ["#FFFACD", "#E0F0FF"];

/// Text color forced on highlighted runs.
pub const HIGHLIGHT_TEXT_COLOR: &str = "#000000";

/// The palette for a rendering style.
pub fn palette(use_highlighting: bool) -> &'static Palette {
    if use_highlighting {
        &HIGHLIGHT_PALETTE
    } else {
        &TEXT_PALETTE
    }
}

/// Cycle through a color list.
pub fn cycle(colors: &'static [&'static str], index: usize) -> &'static str {
    colors[index % colors.len()]
}

/// 32-bit string hash over UTF-16 code units (`h = h * 31 + unit`,
/// wrapping).
///
/// Stable across runs and platforms, so a phoneme always gets the same
/// color.
pub fn hash_code(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Color of a phoneme in the hashed `phonemes` mode.
pub fn hashed_color(colors: &'static [&'static str], text: &str) -> &'static str {
    let index = i64::from(hash_code(text)).unsigned_abs() % colors.len() as u64;
    colors[index as usize]
}

/// One entry of the grammar legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub tag: GrammarTag,
    pub label: &'static str,
    pub color: &'static str,
}

/// Tag colors of the grammar mode, in display order.
pub fn grammar_legend(use_highlighting: bool) -> Vec<LegendEntry> {
    let palette = palette(use_highlighting);
    GrammarTag::ALL
        .into_iter()
        .filter_map(|tag| {
            palette.grammar_color(tag).map(|color| LegendEntry {
                tag,
                label: tag.label(),
                color,
            })
        })
        .collect()
}
