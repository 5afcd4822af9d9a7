//! Lexer for the pascalite dialect
//!
//! Handles tokenization including:
//! - Keywords (BEGIN, WHEN, OTHERWISE, DIV, ...), matched case-insensitively
//! - Identifiers, normalized to lower case
//! - Integer, real and string literals
//! - Operators and punctuation (`:=`, `<>`, `=>`, ...)
//! - `{ ... }` and `(* ... *)` comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal and comment scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use pascalite_core::lang::operators::OperatorId;
use pascalite_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for pascalite source code.
///
/// Whitespace and comments separate tokens and are otherwise dropped. Errors are collected rather than returned
/// on first sight, so one run reports every bad character in the file.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        let end = self.source.len();
        self.tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Look `n` characters past the next one (`peek_nth(0) == peek()`).
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.current_pos..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&mut self, message: String, start: usize) {
        self.errors
            .push(CompileError::lexical(message, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }

        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Comments
            '{' => self.skip_brace_comment(start),
            '(' if self.peek() == Some('*') => {
                self.advance();
                self.skip_paren_comment(start);
            }

            // Operators and punctuation
            '+' => self.add_op(OperatorId::Plus, start),
            '-' => self.add_op(OperatorId::Minus, start),
            '*' => self.add_op(OperatorId::Star, start),
            '/' => self.add_op(OperatorId::Slash, start),
            '=' => {
                if self.match_char('>') {
                    self.add_punct(PunctuationId::FatArrow, start);
                } else {
                    self.add_op(OperatorId::Eq, start);
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::LtEq, start);
                } else if self.match_char('>') {
                    self.add_op(OperatorId::NotEq, start);
                } else {
                    self.add_op(OperatorId::Lt, start);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::GtEq, start);
                } else {
                    self.add_op(OperatorId::Gt, start);
                }
            }
            ':' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::Assign, start);
                } else {
                    self.add_punct(PunctuationId::Colon, start);
                }
            }
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            ',' => self.add_punct(PunctuationId::Comma, start),
            '.' => self.add_punct(PunctuationId::Dot, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),

            // Strings
            '\'' => self.scan_string(start),

            // Numbers
            '0'..='9' => self.scan_number(start),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => self.error(format!("Unexpected character '{}'", c), start),
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Reserved words are case-insensitive; everything else is folded to lower case.
        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_ascii_lowercase()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    let result = Lexer::new(source).tokenize();
    match &result {
        Ok(tokens) => tracing::trace!(tokens = tokens.len(), "lexed"),
        Err(errors) => tracing::debug!(errors = errors.len(), "lexing failed"),
    }
    result
}

// ============================================================================
// TESTS
// ============================================================================
