//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with ID-based
//! tokens.

use crate::lexer::{Token, TokenKind};
use pascalite_core::lang::keywords::{self, KeywordId};
use pascalite_core::lang::operators::{self, OperatorId};
use pascalite_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id for symbol operators *and* word operators (`DIV`, `AND`, ...).
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            TokenKind::Keyword(id) => operators::from_keyword(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given symbol operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if a statement can begin with this token (an identifier or a statement keyword).
    pub fn starts_statement(&self) -> bool {
        match self {
            TokenKind::Ident(_) => true,
            TokenKind::Keyword(id) => keywords::starts_statement(*id),
            _ => false,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}
