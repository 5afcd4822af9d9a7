// Parser core types and entrypoints.
//
// This chunk defines the [`Parser`] type, its result wrapper [`ParseOutput`], and the two top-level productions:
// a whole program and a single statement fragment.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// A parsed tree plus every recoverable diagnostic flagged while building it, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput<T> {
    pub ast: T,
    pub diagnostics: Vec<SyntaxDiagnostic>,
}

impl<T> ParseOutput<T> {
    /// Return `true` if nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parser state.
///
/// ## Notes
/// - The cursor only moves forward. Flagging a missing token never consumes anything.
/// - `depth` counts open statements and parenthesized expressions; it is bounded by [`ParserConfig::max_depth`].
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    diagnostics: Vec<SyntaxDiagnostic>,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Errors
    /// Returns a [`CompileError`] if the stream does not end with [`TokenKind::Eof`], as streams produced by
    /// `pascalite_syntax::lexer` always do.
    pub fn new(tokens: &'a [Token], config: ParserConfig) -> Result<Self, CompileError> {
        match tokens.last() {
            Some(Token { kind: TokenKind::Eof, .. }) => Ok(Self {
                tokens,
                pos: 0,
                diagnostics: Vec::new(),
                config,
                depth: 0,
            }),
            last => Err(CompileError::syntax(
                "Token stream is not terminated by end of file".to_string(),
                last.map(|t| t.span).unwrap_or_default(),
            )),
        }
    }

    /// Parse `[PROGRAM name ;] BEGIN ... END .` followed by end of input.
    pub fn parse_program(mut self) -> Result<ParseOutput<Program>, CompileError> {
        let name = if self.match_keyword(KeywordId::Program) {
            let name = self.identifier_spanned()?;
            self.expect_punct_or_flag(PunctuationId::Semicolon, SyntaxErrorId::MissingSemicolon);
            Some(name)
        } else {
            None
        };

        if !self.check_keyword(KeywordId::Begin) {
            return Err(CompileError::syntax(
                format!("Expected BEGIN, found {}", self.peek().kind),
                self.current_span(),
            )
            .with_hint("a program body is a BEGIN ... END block followed by '.'"));
        }
        let body = self.statement()?;
        self.expect_punct_or_flag(PunctuationId::Dot, SyntaxErrorId::MissingPeriod);
        self.expect_end_of_input();

        Ok(ParseOutput {
            ast: Program { name, body },
            diagnostics: self.diagnostics,
        })
    }

    /// Parse a single statement, an optional trailing `;`, then end of input.
    pub fn parse_fragment(mut self) -> Result<ParseOutput<Spanned<Statement>>, CompileError> {
        let stmt = self.statement()?;
        self.match_punct(PunctuationId::Semicolon);
        self.expect_end_of_input();

        Ok(ParseOutput {
            ast: stmt,
            diagnostics: self.diagnostics,
        })
    }

    /// Flag leftover input once; nothing after it is examined.
    fn expect_end_of_input(&mut self) {
        if !self.is_at_end() {
            self.flag(SyntaxErrorId::UnexpectedToken);
        }
    }
}
