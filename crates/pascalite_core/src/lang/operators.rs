//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and word operators like `DIV`) along
//! with basic metadata such as precedence, associativity, and fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] ignores letter case, so `div` and `DIV` resolve alike.
//! - Word-operator spellings also appear in the keyword registry ([`crate::lang::keywords`]); the lexer emits them
//!   as keyword tokens and the parser maps them here when it needs precedence.
//! - Pascal has only four precedence levels: relational < additive < multiplicative < prefix `NOT`.
//!
//! ## Examples
//! ```rust
//! use pascalite_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<>"), Some(OperatorId::NotEq));
//! assert_eq!(operators::info_for(OperatorId::Plus).precedence, 20);
//! ```

use super::keywords::KeywordId;
use super::registry::{INITIAL_DIALECT, SinceVersion, Stability};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Additive
    Plus,
    Minus,
    Or,

    // Multiplicative
    Star,
    Slash,
    Div,
    Mod,
    And,

    // Relational
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Prefix
    Not,

    // Assignment
    Assign,
}

/// Relational level (`=`, `<>`, `<`, ...): non-associative, at most one per expression.
pub const RELATIONAL: u8 = 10;
/// Additive level (`+`, `-`, `OR`).
pub const ADDITIVE: u8 = 20;
/// Multiplicative level (`*`, `/`, `DIV`, `MOD`, `AND`).
pub const MULTIPLICATIVE: u8 = 30;
/// Prefix `NOT`.
pub const PREFIX: u8 = 40;

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is a relative ordering where higher binds tighter.
/// - `Assign` has precedence `0`: it is a statement separator, never part of an expression.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Additive
    op(OperatorId::Plus, &["+"], ADDITIVE, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Minus, &["-"], ADDITIVE, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Or, &["OR"], ADDITIVE, Associativity::Left, Fixity::Infix, true),
    // Multiplicative
    op(
        OperatorId::Star,
        &["*"],
        MULTIPLICATIVE,
        Associativity::Left,
        Fixity::Infix,
        false,
    ),
    op(
        OperatorId::Slash,
        &["/"],
        MULTIPLICATIVE,
        Associativity::Left,
        Fixity::Infix,
        false,
    ),
    op(
        OperatorId::Div,
        &["DIV"],
        MULTIPLICATIVE,
        Associativity::Left,
        Fixity::Infix,
        true,
    ),
    op(
        OperatorId::Mod,
        &["MOD"],
        MULTIPLICATIVE,
        Associativity::Left,
        Fixity::Infix,
        true,
    ),
    op(
        OperatorId::And,
        &["AND"],
        MULTIPLICATIVE,
        Associativity::Left,
        Fixity::Infix,
        true,
    ),
    // Relational
    op(OperatorId::Eq, &["="], RELATIONAL, Associativity::None, Fixity::Infix, false),
    op(OperatorId::NotEq, &["<>"], RELATIONAL, Associativity::None, Fixity::Infix, false),
    op(OperatorId::Lt, &["<"], RELATIONAL, Associativity::None, Fixity::Infix, false),
    op(OperatorId::LtEq, &["<="], RELATIONAL, Associativity::None, Fixity::Infix, false),
    op(OperatorId::Gt, &[">"], RELATIONAL, Associativity::None, Fixity::Infix, false),
    op(OperatorId::GtEq, &[">="], RELATIONAL, Associativity::None, Fixity::Infix, false),
    // Prefix
    op(OperatorId::Not, &["NOT"], PREFIX, Associativity::Right, Fixity::Prefix, true),
    // Assignment
    op(OperatorId::Assign, &[":="], 0, Associativity::None, Fixity::Infix, false),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the canonical (first) spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spellings[0]
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.spellings.iter().any(|s| s.eq_ignore_ascii_case(spelling)))
        .map(|o| o.id)
}

/// Map a word-operator keyword to its operator identity.
///
/// ## Returns
/// - `Some(OperatorId)` for `DIV`, `MOD`, `AND`, `OR`, `NOT`.
/// - `None` for every other keyword.
pub fn from_keyword(id: KeywordId) -> Option<OperatorId> {
    match id {
        KeywordId::Div => Some(OperatorId::Div),
        KeywordId::Mod => Some(OperatorId::Mod),
        KeywordId::And => Some(OperatorId::And),
        KeywordId::Or => Some(OperatorId::Or),
        KeywordId::Not => Some(OperatorId::Not),
        _ => None,
    }
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        precedence,
        associativity,
        fixity,
        is_keyword_spelling,
        since_version: Some(INITIAL_DIALECT),
        stability: Stability::Stable,
    }
}
