//! Define the reserved keyword vocabulary for pascalite.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) that records canonical spellings, categories, and usage hints.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive** (Pascal treats `when`, `When` and `WHEN` alike).
//! - Canonical spellings are upper-case; they are what diagnostics print.
//! - Some reserved words are also “word operators” (e.g. `DIV`, `AND`). If you need operator precedence, use
//!   [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use pascalite_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("otherwise"), Some(KeywordId::Otherwise));
//! assert_eq!(keywords::from_str("Otherwise"), Some(KeywordId::Otherwise));
//! assert_eq!(keywords::as_str(KeywordId::Otherwise), "OTHERWISE");
//! ```

use super::registry::{Example, INITIAL_DIALECT, SinceVersion, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Program,
    Begin,
    End,

    // Control flow
    If,
    Then,
    Else,
    While,
    Do,
    Repeat,
    Until,
    For,
    To,
    Downto,
    When,
    Otherwise,

    // Word operators
    Div,
    Mod,
    And,
    Or,
    Not,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Structure,
    ControlFlow,
    Operator,
}

/// Usage context hints (not enforced here; parser/lexer own context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordUsage {
    /// Introduces a statement (`IF`, `WHEN`, `BEGIN`, ...).
    StatementStart,
    /// Separates or terminates parts of a statement (`THEN`, `DO`, `END`, ...).
    Separator,
    /// Spelled operator inside expressions.
    Operator,
    /// Program header (`PROGRAM name;`).
    Header,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub usage: &'static [KeywordUsage],
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Program structure
    info(
        KeywordId::Program,
        "PROGRAM",
        KeywordCategory::Structure,
        &[KeywordUsage::Header],
    ),
    info(
        KeywordId::Begin,
        "BEGIN",
        KeywordCategory::Structure,
        &[KeywordUsage::StatementStart],
    ),
    info(
        KeywordId::End,
        "END",
        KeywordCategory::Structure,
        &[KeywordUsage::Separator],
    ),
    // Control flow
    info(
        KeywordId::If,
        "IF",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::StatementStart],
    ),
    info(
        KeywordId::Then,
        "THEN",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Separator],
    ),
    info(
        KeywordId::Else,
        "ELSE",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Separator],
    ),
    info(
        KeywordId::While,
        "WHILE",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::StatementStart],
    ),
    info(
        KeywordId::Do,
        "DO",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Separator],
    ),
    info(
        KeywordId::Repeat,
        "REPEAT",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::StatementStart],
    ),
    info(
        KeywordId::Until,
        "UNTIL",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Separator],
    ),
    info(
        KeywordId::For,
        "FOR",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::StatementStart],
    ),
    info(
        KeywordId::To,
        "TO",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Separator],
    ),
    info(
        KeywordId::Downto,
        "DOWNTO",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Separator],
    ),
    KeywordInfo {
        examples: &[Example {
            code: "WHEN\n  i = 1 => f := 10;\n  i = 2 => f := 20;\n  OTHERWISE => f := -1\nEND",
            note: Some("Each guard is tested in order; the first true guard's action runs."),
        }],
        ..info(
            KeywordId::When,
            "WHEN",
            KeywordCategory::ControlFlow,
            &[KeywordUsage::StatementStart],
        )
    },
    info(
        KeywordId::Otherwise,
        "OTHERWISE",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Separator],
    ),
    // Word operators
    info(KeywordId::Div, "DIV", KeywordCategory::Operator, &[KeywordUsage::Operator]),
    info(KeywordId::Mod, "MOD", KeywordCategory::Operator, &[KeywordUsage::Operator]),
    info(KeywordId::And, "AND", KeywordCategory::Operator, &[KeywordUsage::Operator]),
    info(KeywordId::Or, "OR", KeywordCategory::Operator, &[KeywordUsage::Operator]),
    info(KeywordId::Not, "NOT", KeywordCategory::Operator, &[KeywordUsage::Operator]),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical (upper-case) spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Usage hints.
pub fn usage(id: KeywordId) -> &'static [KeywordUsage] {
    info_for(id).usage
}

/// Return `true` if the keyword introduces a statement.
pub fn starts_statement(id: KeywordId) -> bool {
    usage(id).contains(&KeywordUsage::StatementStart)
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling, in any letter case.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(s))
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    usage: &'static [KeywordUsage],
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        usage,
        since_version: Some(INITIAL_DIALECT),
        stability: Stability::Stable,
        examples: &[],
    }
}
