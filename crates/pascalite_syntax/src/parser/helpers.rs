/// Token-stream helpers and diagnostic flagging.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching keywords, operators, and punctuation
/// - Expect-or-flag helpers that record a [`SyntaxDiagnostic`] instead of failing
/// - The nesting guard (`nested`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[self.pos]
    }

    /// Consume the current token and return it. At end of file the cursor stays on `Eof`.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// End offset of the last consumed token (0 before the first).
    fn previous_end(&self) -> usize {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].span.end,
            None => 0,
        }
    }

    /// Span from `start` to the end of the last consumed token; zero-width if nothing was consumed since.
    fn span_since(&self, start: usize) -> Span {
        Span::new(start, self.previous_end().max(start))
    }

    // ========================================================================
    // Matching
    // ========================================================================

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Expect-or-flag
    // ========================================================================

    /// Record a recoverable diagnostic at the current token. Never moves the cursor.
    fn flag(&mut self, id: SyntaxErrorId) {
        let span = self.current_span();
        tracing::debug!(
            code = errors::code(id),
            start = span.start,
            found = %self.peek().kind,
            "{}",
            errors::message(id)
        );
        self.diagnostics.push(SyntaxDiagnostic::new(id, span));
    }

    /// Consume `id` if present, otherwise flag `missing` and leave the cursor where it is.
    fn expect_keyword_or_flag(&mut self, id: KeywordId, missing: SyntaxErrorId) -> bool {
        let found = self.match_keyword(id);
        if !found {
            self.flag(missing);
        }
        found
    }

    /// Consume `id` if present, otherwise flag `missing` and leave the cursor where it is.
    fn expect_punct_or_flag(&mut self, id: PunctuationId, missing: SyntaxErrorId) -> bool {
        let found = self.match_punct(id);
        if !found {
            self.flag(missing);
        }
        found
    }

    // ========================================================================
    // Nesting guard
    // ========================================================================

    /// Claim one more nesting level, failing once [`ParserConfig::max_depth`] is reached.
    fn enter_level(&mut self) -> Result<(), CompileError> {
        if self.depth >= self.config.max_depth {
            return Err(CompileError::limit(
                format!("Nesting exceeds the limit of {} levels", self.config.max_depth),
                self.current_span(),
            )
            .with_note("statements, parentheses, WHEN clauses and infix operators each count as one level"));
        }
        self.depth += 1;
        Ok(())
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, CompileError>) -> Result<T, CompileError> {
        self.enter_level()?;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Run `f`, which builds a chain iteratively and calls [`Self::enter_level`] once per link, then restore the
    /// depth. Every link nests the tree one level further, so it counts against the limit like recursion does.
    fn chained<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, CompileError>) -> Result<T, CompileError> {
        let base = self.depth;
        let result = f(self);
        self.depth = base;
        result
    }
}
