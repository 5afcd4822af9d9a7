//! Recoverable syntax diagnostic vocabulary.
//!
//! Every diagnostic the parser can *flag* (as opposed to fatal errors that abort a parse) has a stable id, a
//! numeric code shown to users as `P0101`-style, a kebab-case name, and a one-line message. Keeping them in one
//! registry lets the parser, the CLI renderer, and tests agree on wording.
//!
//! ## Notes
//! - Flagged diagnostics never change control flow: the parser assumes the expected token was omitted and carries
//!   on without consuming anything.
//! - Codes are stable once published; add new ids at the end.
//!
//! ## Examples
//! ```rust
//! use pascalite_core::lang::errors::{self, SyntaxErrorId};
//!
//! assert_eq!(errors::code(SyntaxErrorId::MissingNext), 101);
//! assert_eq!(errors::message(SyntaxErrorId::MissingNext), "Missing =>");
//! assert_eq!(errors::from_str("missing-end"), Some(SyntaxErrorId::MissingEnd));
//! ```

use super::registry::{Example, INITIAL_DIALECT, LangItemInfo, Stability};

/// Stable identifier for every recoverable syntax diagnostic.
///
/// The discriminant is the published numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxErrorId {
    MissingNext = 101,
    MissingSemicolon = 102,
    MissingEnd = 103,
    MissingThen = 104,
    MissingDo = 105,
    MissingUntil = 106,
    MissingColonEquals = 107,
    MissingToDownto = 108,
    MissingRightParen = 109,
    MissingPeriod = 110,
    UnexpectedToken = 111,
}

/// Metadata for a syntax diagnostic: `canonical` is the kebab-case name, `description` the user-facing message.
pub type SyntaxErrorInfo = LangItemInfo<SyntaxErrorId>;

/// Registry of syntax diagnostics.
pub const SYNTAX_ERRORS: &[SyntaxErrorInfo] = &[
    info_with_examples(
        SyntaxErrorId::MissingNext,
        "missing-next",
        "Missing =>",
        &[Example {
            code: "WHEN a = 1 x := 1; OTHERWISE => x := 0 END",
            note: Some("Flagged at `x`; the guard's action is still parsed."),
        }],
    ),
    info_with_examples(
        SyntaxErrorId::MissingSemicolon,
        "missing-semicolon",
        "Missing ;",
        &[Example {
            code: "WHEN a = 1 => x := 1 OTHERWISE => x := 0 END",
            note: Some("Flagged at `OTHERWISE`; the clause still ends there."),
        }],
    ),
    info(SyntaxErrorId::MissingEnd, "missing-end", "Missing END"),
    info(SyntaxErrorId::MissingThen, "missing-then", "Missing THEN"),
    info(SyntaxErrorId::MissingDo, "missing-do", "Missing DO"),
    info(SyntaxErrorId::MissingUntil, "missing-until", "Missing UNTIL"),
    info(SyntaxErrorId::MissingColonEquals, "missing-colon-equals", "Missing :="),
    info(SyntaxErrorId::MissingToDownto, "missing-to-downto", "Missing TO or DOWNTO"),
    info(SyntaxErrorId::MissingRightParen, "missing-right-paren", "Missing )"),
    info(SyntaxErrorId::MissingPeriod, "missing-period", "Missing ."),
    info(SyntaxErrorId::UnexpectedToken, "unexpected-token", "Unexpected token"),
];

/// Return the published numeric code for a diagnostic.
#[inline]
pub fn code(id: SyntaxErrorId) -> u16 {
    id as u16
}

/// Return the kebab-case name for a diagnostic (e.g. `"missing-next"`).
#[inline]
pub fn as_str(id: SyntaxErrorId) -> &'static str {
    info_for(id).canonical
}

/// Return the user-facing message for a diagnostic.
#[inline]
pub fn message(id: SyntaxErrorId) -> &'static str {
    info_for(id).description
}

/// Return a short fix-it hint, when one applies.
pub fn help(id: SyntaxErrorId) -> Option<&'static str> {
    match id {
        SyntaxErrorId::MissingNext => Some("separate each guard from its action with `=>`"),
        SyntaxErrorId::MissingSemicolon => Some("end each statement with `;`"),
        SyntaxErrorId::MissingEnd => Some("close the construct with `END`"),
        SyntaxErrorId::MissingColonEquals => Some("Pascal assigns with `:=`; `=` compares"),
        _ => None,
    }
}

/// Resolve a kebab-case name to a diagnostic id.
pub fn from_str(name: &str) -> Option<SyntaxErrorId> {
    SYNTAX_ERRORS.iter().find(|e| e.canonical == name).map(|e| e.id)
}

/// Resolve a numeric code to a diagnostic id.
pub fn from_code(code: u16) -> Option<SyntaxErrorId> {
    SYNTAX_ERRORS.iter().find(|e| e.id as u16 == code).map(|e| e.id)
}

/// Return full metadata for a diagnostic.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: SyntaxErrorId) -> &'static SyntaxErrorInfo {
    SYNTAX_ERRORS
        .iter()
        .find(|e| e.id == id)
        .expect("syntax error info missing")
}

const fn info(id: SyntaxErrorId, canonical: &'static str, description: &'static str) -> SyntaxErrorInfo {
    info_with_examples(id, canonical, description, &[])
}

const fn info_with_examples(
    id: SyntaxErrorId,
    canonical: &'static str,
    description: &'static str,
    examples: &'static [Example],
) -> SyntaxErrorInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        since_version: Some(INITIAL_DIALECT),
        stability: Stability::Stable,
        examples,
    }
}
