//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser: delimiters,
//! separators, and the `=>` clause arrow used by `WHEN`.
//!
//! ## Notes
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use pascalite_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::FatArrow), "=>");
//! ```

use super::registry::{INITIAL_DIALECT, SinceVersion, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parentheses.
    Delimiter,
    /// Separators like `;`, `,` and `:`.
    Separator,
    /// The program terminator `.`.
    Terminator,
    /// Arrow markers like `=>`.
    Arrow,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Semicolon,
    Comma,
    Colon,

    // Terminators
    Dot,

    // Arrows
    FatArrow,

    // Delimiters
    LParen,
    RParen,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", PunctuationCategory::Terminator),
    info(PunctuationId::FatArrow, "=>", PunctuationCategory::Arrow),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return full metadata for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        since_version: Some(INITIAL_DIALECT),
        stability: Stability::Stable,
    }
}
