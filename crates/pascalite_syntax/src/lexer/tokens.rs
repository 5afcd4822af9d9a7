//! Token types for the pascalite lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including word operators like `DIV`)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use pascalite_core::lang::keywords::{self, KeywordId};
use pascalite_core::lang::operators::{self, OperatorId};
use pascalite_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(i64),
    Real(f64),
    String(String),

    // ========== Special ==========
    Eof, // end of file
}

/// Tokens print the way a user would recognize them in a diagnostic ("Unexpected END").
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(*id)),
            TokenKind::Operator(id) => f.write_str(operators::as_str(*id)),
            TokenKind::Punctuation(id) => f.write_str(punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Int(v) => write!(f, "{v}"),
            TokenKind::Real(v) => write!(f, "{v:?}"),
            TokenKind::String(s) => write!(f, "string '{s}'"),
            TokenKind::Eof => f.write_str("end of file"),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
