//! Diagnostic rendering.
//!
//! Diagnostics from the syntax crate know their span but not the text they point into. [`Reporter`] pairs them with
//! a named source and renders them through `miette`'s graphical handler, one report per diagnostic.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, Severity, SourceCode};

/// Renders diagnostics against one source file.
pub struct Reporter {
    source: NamedSource<String>,
    handler: GraphicalReportHandler,
}

impl Reporter {
    /// Create a reporter for `source`, labelled `file_name` in report headers.
    pub fn new(file_name: &str, source: &str, color: bool) -> Self {
        let theme = if color {
            GraphicalTheme::unicode()
        } else {
            GraphicalTheme::unicode_nocolor()
        };
        Self {
            source: NamedSource::new(file_name, source.to_string()),
            handler: GraphicalReportHandler::new_themed(theme),
        }
    }

    /// Render a single diagnostic.
    pub fn render(&self, diagnostic: &dyn Diagnostic) -> String {
        let report = WithSource {
            inner: diagnostic,
            source: &self.source,
        };
        let mut out = String::new();
        if self.handler.render_report(&mut out, &report).is_err() {
            // Fall back to the bare message if the handler cannot lay out the snippet.
            out = format!("error: {}\n", diagnostic);
        }
        out
    }

    /// Render several diagnostics, concatenated in order.
    pub fn render_all<'d, I, D>(&self, diagnostics: I) -> String
    where
        I: IntoIterator<Item = &'d D>,
        D: Diagnostic + 'd,
    {
        diagnostics.into_iter().map(|d| self.render(d)).collect()
    }
}

/// A diagnostic borrowed together with the source text it refers to.
struct WithSource<'a> {
    inner: &'a dyn Diagnostic,
    source: &'a NamedSource<String>,
}

impl fmt::Debug for WithSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner, f)
    }
}

impl fmt::Display for WithSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner, f)
    }
}

impl std::error::Error for WithSource<'_> {}

impl Diagnostic for WithSource<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.inner.code()
    }

    fn severity(&self) -> Option<Severity> {
        self.inner.severity()
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.inner.help()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner.labels()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::Span;
    use crate::frontend::diagnostics::{CompileError, SyntaxDiagnostic};
    use pascalite_core::lang::errors::SyntaxErrorId;

    #[test]
    fn test_render_syntax_diagnostic() {
        let source = "WHEN a=1 x:=1; END";
        let reporter = Reporter::new("demo.pas", source, false);
        let diag = SyntaxDiagnostic::new(SyntaxErrorId::MissingNext, Span::new(9, 10));
        let out = reporter.render(&diag);
        assert!(out.contains("Missing =>"), "{out}");
        assert!(out.contains("P0101"), "{out}");
        assert!(out.contains("demo.pas"), "{out}");
        assert!(out.contains("flagged here"), "{out}");
    }

    #[test]
    fn test_render_compile_error_with_hint() {
        let source = "WHEN a=1 => x:=1; END";
        let reporter = Reporter::new("demo.pas", source, false);
        let err = CompileError::syntax("Unexpected END in expression".to_string(), Span::new(18, 21))
            .with_hint("close the chain with OTHERWISE");
        let out = reporter.render(&err);
        assert!(out.contains("Unexpected END in expression"), "{out}");
        assert!(out.contains("close the chain with OTHERWISE"), "{out}");
    }

    #[test]
    fn test_render_all_keeps_order() {
        let source = "BEGIN x := 1 y := 2 END";
        let reporter = Reporter::new("demo.pas", source, false);
        let diags = [
            SyntaxDiagnostic::new(SyntaxErrorId::MissingSemicolon, Span::new(13, 14)),
            SyntaxDiagnostic::new(SyntaxErrorId::MissingPeriod, Span::new(23, 23)),
        ];
        let out = reporter.render_all(&diags);
        let first = out.find("Missing ;").expect("first report");
        let second = out.find("Missing .").expect("second report");
        assert!(first < second);
    }
}
