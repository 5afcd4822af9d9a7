//! Diagnostics produced by the lexer and parser.
//!
//! There are two kinds:
//! - [`SyntaxDiagnostic`]: a *flagged*, recoverable problem (a missing `=>`, `;`, `END`, ...). The parser records it
//!   and keeps going as if the expected token had been present.
//! - [`CompileError`]: a fatal problem (bad character, unparsable expression, nesting limit). It aborts the parse
//!   and propagates to the caller unchanged.
//!
//! Both implement [`miette::Diagnostic`], so tooling can attach the source text and render them with labels.

use std::fmt;

use miette::{LabeledSpan, Severity};
use pascalite_core::lang::errors::{self, SyntaxErrorId};
use thiserror::Error;

use crate::ast::Span;

// ============================================================================
// Recoverable diagnostics
// ============================================================================

/// A recoverable syntax problem flagged at a token position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxDiagnostic {
    pub id: SyntaxErrorId,
    /// Span of the token that was current when the problem was flagged.
    pub span: Span,
}

impl SyntaxDiagnostic {
    pub fn new(id: SyntaxErrorId, span: Span) -> Self {
        Self { id, span }
    }

    pub fn message(&self) -> &'static str {
        errors::message(self.id)
    }

    /// Published code, e.g. `P0101`.
    pub fn code(&self) -> String {
        format!("P{:04}", errors::code(self.id))
    }
}

impl fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SyntaxDiagnostic {}

impl miette::Diagnostic for SyntaxDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(SyntaxDiagnostic::code(self)))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        errors::help(self.id).map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some("flagged here".to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// Fatal errors
// ============================================================================

/// A fatal error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span, kind: ErrorKind) -> Self {
        Self {
            message,
            span,
            kind,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: String, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Lexical)
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Syntax)
    }

    pub fn limit(message: String, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Limit)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Limit,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Limit => write!(f, "limit exceeded"),
        }
    }
}

impl miette::Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.kind {
            ErrorKind::Lexical => "pascalite::lexical",
            ErrorKind::Syntax => "pascalite::syntax",
            ErrorKind::Limit => "pascalite::limit",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let lines: Vec<&str> = self
            .notes
            .iter()
            .chain(self.hints.iter())
            .map(String::as_str)
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(Box::new(lines.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}
