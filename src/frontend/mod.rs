//! pascalite frontend
//!
//! This module ties the syntax crate together for callers that start from source text:
//! - `lexer`, `parser`, `ast`, `config`, `diagnostics`: re-exported from `pascalite_syntax`
//! - [`parse_source`]: lex + parse in one step, for a whole program or a single statement
//! - `report`: rendering of diagnostics against the source with `miette`

// Syntax components are provided by the pascalite_syntax crate.
pub use pascalite_syntax::{ast, config, diagnostics, lexer, parser};

pub mod report;

use thiserror::Error;

use ast::{Program, Spanned, Statement};
use config::ParserConfig;
use diagnostics::{CompileError, SyntaxDiagnostic};
use parser::ParseOutput;

/// What a source text is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// `[PROGRAM name;] BEGIN ... END.`
    #[default]
    Program,
    /// A single statement, e.g. one `WHEN` chain.
    Fragment,
}

/// A successfully parsed source, with its recoverable diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSource {
    Program(ParseOutput<Program>),
    Fragment(ParseOutput<Spanned<Statement>>),
}

impl ParsedSource {
    /// Indented tag-tree rendering of the parsed tree.
    pub fn dump(&self) -> String {
        match self {
            ParsedSource::Program(out) => ast::dump_program(&out.ast),
            ParsedSource::Fragment(out) => ast::dump(&out.ast.node),
        }
    }

    pub fn diagnostics(&self) -> &[SyntaxDiagnostic] {
        match self {
            ParsedSource::Program(out) => &out.diagnostics,
            ParsedSource::Fragment(out) => &out.diagnostics,
        }
    }
}

/// Fatal frontend failure.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// Every lexical error found in the source.
    #[error("{} lexical error(s)", .0.len())]
    Lex(Vec<CompileError>),
    /// The first fatal parse error.
    #[error(transparent)]
    Parse(#[from] CompileError),
}

impl FrontendError {
    /// The underlying errors, in source order.
    pub fn errors(&self) -> &[CompileError] {
        match self {
            FrontendError::Lex(errors) => errors,
            FrontendError::Parse(error) => std::slice::from_ref(error),
        }
    }
}

/// Lex and parse `source`.
///
/// ## Errors
/// - [`FrontendError::Lex`] if the lexer rejects the text.
/// - [`FrontendError::Parse`] if the parser hits a fatal error.
///
/// Recoverable problems do not fail; they are carried in [`ParsedSource::diagnostics`].
pub fn parse_source(source: &str, kind: SourceKind, config: ParserConfig) -> Result<ParsedSource, FrontendError> {
    let tokens = lexer::lex(source).map_err(FrontendError::Lex)?;
    let parsed = match kind {
        SourceKind::Program => ParsedSource::Program(parser::parse_with_config(&tokens, config)?),
        SourceKind::Fragment => ParsedSource::Fragment(parser::parse_statement_with_config(&tokens, config)?),
    };
    Ok(parsed)
}
