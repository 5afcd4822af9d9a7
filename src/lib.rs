#![forbid(unsafe_code)]
//! pascalite
//!
//! A syntax frontend for a small Pascal dialect with a guarded multi-branch `WHEN` statement. The heavy lifting
//! lives in the workspace crates (`pascalite_core` for vocabulary, `pascalite_syntax` for lexing and parsing);
//! this crate adds source-level entry points, diagnostic rendering, and the `pascalite` CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod frontend;

pub use frontend::ast;
pub use frontend::config;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use frontend::{FrontendError, ParsedSource, SourceKind, parse_source};
