//! Shareable metadata for `pascalite_core::lang` registries.
//!
//! The `pascalite_core::lang` module is a set of **registry-first** vocabularies: keywords, operators,
//! punctuation, and syntax error codes. This submodule provides the small, dependency-free metadata types that are
//! reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives in the lexer/parser.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::operators`]
//! - [`crate::lang::errors`]

/// Identify the frontend version a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use pascalite_core::lang::registry::SinceVersion;
///
/// let since: SinceVersion = "0.1.0";
/// assert!(!since.is_empty());
/// ```
pub type SinceVersion = &'static str;

/// The version every item of the initial dialect was introduced in.
pub const INITIAL_DIALECT: SinceVersion = "0.1.0";

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use pascalite_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "WHEN a = 1 => x := 1; OTHERWISE => x := 0 END",
///     note: Some("Minimal guarded conditional."),
/// };
/// assert!(ex.code.contains("WHEN"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Registries that need extra per-item data (operator precedence, keyword category, error code numbers) wrap
/// this struct or mirror its fields in an extension info type.
///
/// ## Notes
/// - `description` is mandatory to keep docs/tooling consistent.
/// - This type is `Copy` so it can live in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
    pub examples: &'static [Example],
}
