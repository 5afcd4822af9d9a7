//! pascalite language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators, punctuation, and
//! syntax error codes.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and parser. Instead, callers work
//! with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics, docs).
//!
//! ## Examples
//! ```rust
//! use pascalite_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("when"), Some(KeywordId::When));
//! assert_eq!(keywords::as_str(KeywordId::When), "WHEN");
//! ```

pub mod errors;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
