//! Syntax frontend for the pascalite dialect: lexer, parser, statement tree, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the CLI and any future tooling.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not resolve names, check types, or execute anything.
//! - Vocabulary identity (keywords/operators/punctuation/error codes) comes from `pascalite_core::lang` registries.
//! - `WHEN` statements are lowered to nested `IF` nodes by the parser; [`ast`] has no `WHEN` node.
//!
//! ## Examples
//! ```rust
//! use pascalite_syntax::{ast, lexer, parser};
//!
//! let tokens = lexer::lex("BEGIN WHEN a = 1 => x := 1; END END.").unwrap();
//! let output = parser::parse(&tokens).unwrap();
//! assert!(output.diagnostics.is_empty());
//! assert_eq!(ast::dump_program(&output.ast), "COMPOUND\n  IF\n    (= a 1)\n    ASSIGN x 1");
//! ```
//!
//! ## See also
//! - `pascalite_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
