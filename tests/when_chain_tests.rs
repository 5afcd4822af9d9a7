//! End-to-end tests for the root frontend, starting from source text.
//!
//! Clause-level WHEN behaviour is covered by the parser unit tests in `pascalite_syntax`. These tests go through
//! `parse_source` and check what only the root crate adds: `ParsedSource` dumps and diagnostics for both source
//! kinds, the mapping of lexer and parser failures onto `FrontendError`, and rendering of those failures.

use pascalite::config::{ParserConfig, WhenTermination};
use pascalite::diagnostics::ErrorKind;
use pascalite::frontend::report::Reporter;
use pascalite::{FrontendError, ParsedSource, SourceKind, parse_source};
use pascalite_core::lang::errors::SyntaxErrorId;

fn fragment(source: &str) -> ParsedSource {
    parse_source(source, SourceKind::Fragment, ParserConfig::default()).expect("fragment parses")
}

fn program(source: &str) -> ParsedSource {
    parse_source(source, SourceKind::Program, ParserConfig::default()).expect("program parses")
}

#[test]
fn fragment_dump_shows_right_nested_chain() {
    let parsed = fragment("WHEN a=1=>x:=1; b=2=>y:=2; OTHERWISE=>z:=3; END");

    assert!(matches!(parsed, ParsedSource::Fragment(_)));
    assert!(parsed.diagnostics().is_empty());
    assert_eq!(
        parsed.dump(),
        "IF\n  (= a 1)\n  ASSIGN x 1\n  IF\n    (= b 2)\n    ASSIGN y 2\n    ASSIGN z 3"
    );
}

#[test]
fn program_dump_includes_name_line() {
    let parsed = program("PROGRAM p; BEGIN x := 0; WHEN x = 0 => y := 1; OTHERWISE => y := 2 END END.");

    assert!(parsed.diagnostics().is_empty());
    assert_eq!(
        parsed.dump(),
        "PROGRAM p\nCOMPOUND\n  ASSIGN x 0\n  IF\n    (= x 0)\n    ASSIGN y 1\n    ASSIGN y 2"
    );
}

#[test]
fn program_dump_without_name_starts_at_body() {
    let parsed = program("BEGIN WHEN a => x := 1; END END.");
    assert_eq!(parsed.dump(), "COMPOUND\n  IF\n    a\n    ASSIGN x 1");
}

#[test]
fn diagnostics_are_reported_for_both_source_kinds() {
    let parsed = fragment("WHEN a=1 x:=1; OTHERWISE => y:=2; END");
    let ids: Vec<_> = parsed.diagnostics().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![SyntaxErrorId::MissingNext]);

    let parsed = program("BEGIN WHEN a=1 => x:=1 OTHERWISE => y:=2 END END");
    let ids: Vec<_> = parsed.diagnostics().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![SyntaxErrorId::MissingSemicolon, SyntaxErrorId::MissingPeriod]);
}

#[test]
fn lexical_errors_are_collected_into_one_failure() {
    let err = parse_source("WHEN a = 1e999 => x := 'open", SourceKind::Fragment, ParserConfig::default())
        .expect_err("both literals are rejected");

    assert!(matches!(err, FrontendError::Lex(_)));
    assert_eq!(err.to_string(), "2 lexical error(s)");
    let messages: Vec<_> = err.errors().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["Real literal '1e999' is out of range", "Unterminated string literal"]);
}

#[test]
fn legacy_bare_end_is_a_parse_failure() {
    let config = ParserConfig::new().with_when_termination(WhenTermination::Legacy);
    let err = parse_source("WHEN a=1=>x:=1; END", SourceKind::Fragment, config).expect_err("legacy chains need OTHERWISE");

    assert!(matches!(err, FrontendError::Parse(_)));
    assert_eq!(err.errors().len(), 1);
    assert_eq!(err.to_string(), "Unexpected END in expression");
}

#[test]
fn overlong_chain_is_a_limit_failure() {
    let mut source = String::from("BEGIN WHEN");
    for i in 0..100_000 {
        source.push_str(&format!(" a = {i} => x := {i};"));
    }
    source.push_str(" END END.");

    let err = parse_source(&source, SourceKind::Program, ParserConfig::default()).expect_err("chain is too deep");
    assert!(matches!(err, FrontendError::Parse(_)));
    assert_eq!(err.errors()[0].kind, ErrorKind::Limit);

    let source = "WHEN a => x := 1; b => x := 2; c => x := 3; END";
    let reporter = Reporter::new("deep.pas", source, false);
    let config = ParserConfig::new().with_max_depth(2);
    let err = parse_source(source, SourceKind::Fragment, config).expect_err("the second clause exceeds depth 2");
    let rendered = reporter.render_all(err.errors());
    assert!(rendered.contains("Nesting exceeds the limit of 2 levels"), "{rendered}");
    assert!(rendered.contains("WHEN clauses"), "{rendered}");
}
