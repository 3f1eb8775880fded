//! Shared, language-agnostic types for the OnlyDys reading aids.
//!
//! Character classification, word normalization, the dictionary entry
//! record, and the text-run model exchanged with the word-processor plugin.

pub mod character;
pub mod entry;
pub mod enums;
pub mod normalize;
pub mod text;
pub mod token;

pub use entry::DictionaryEntry;
pub use enums::{ConfusionType, GrammarTag, ParseGrammarTagError, PhonemeKind, TokenType};
pub use text::{DocumentModel, Formatting, Paragraph, TextRun};
pub use token::Token;
