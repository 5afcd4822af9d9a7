//! Parser for the pascalite dialect
//!
//! Converts a token stream into the statement tree defined in [`crate::ast`]. Recoverable problems (a missing `;`,
//! `=>`, `END`, ...) are flagged as [`SyntaxDiagnostic`]s and parsing continues as if the token had been present;
//! anything else aborts with a [`CompileError`].
//!
//! `WHEN` statements never reach the tree as such: the builder in `parser/when.rs` lowers them into right-nested
//! [`IfStmt`]s while parsing.
//!
//! ## Examples
//!
//! ```rust
//! use pascalite_syntax::{ast, lexer, parser};
//!
//! let tokens = lexer::lex("WHEN a = 1 => x := 1; OTHERWISE => x := 0 END").unwrap();
//! let output = parser::parse_statement(&tokens).unwrap();
//! assert!(output.diagnostics.is_empty());
//! assert!(matches!(output.ast.node, ast::Statement::If(_)));
//! ```

use crate::ast::*;
use crate::config::{ParserConfig, WhenTermination};
use crate::diagnostics::{CompileError, SyntaxDiagnostic};
use crate::lexer::{Token, TokenKind};
use pascalite_core::lang::errors::{self, SyntaxErrorId};
use pascalite_core::lang::keywords::KeywordId;
use pascalite_core::lang::operators::{self, Fixity, OperatorId};
use pascalite_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/when.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
