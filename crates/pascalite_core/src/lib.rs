//! Provide the canonical language vocabulary for the pascalite frontend.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the lexer/parser and
//! tooling (CLI rendering, docs) agree on: reserved words, operators, punctuation, and the numbered catalog of
//! recoverable syntax diagnostics.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.
//! - Callers work with stable IDs (`KeywordId`, `OperatorId`, `SyntaxErrorId`) instead of spellings.

pub mod lang;
