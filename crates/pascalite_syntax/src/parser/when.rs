// `WHEN` statement parsing and lowering.
//
// ```text
// when       ::= WHEN clause { clause } ( otherwise | END )
// clause     ::= expression "=>" statement ";"
// otherwise  ::= OTHERWISE "=>" statement [ ";" ] END
// ```
//
// The clauses are collected in source order and folded right-to-left into nested [`IfStmt`]s: clause *i*
// becomes `IF cond_i THEN action_i ELSE <clause i+1 ...>`, and the innermost else-branch is the `OTHERWISE`
// action (or absent). Each node owns its else-branch outright; nothing is patched after construction.
//
// ## Notes
// - A missing `=>`, `;` or `END` is flagged at the current token and not consumed. There is no
//   resynchronization, so one omission can cascade into further diagnostics.
// - Errors from the expression or statement parser propagate unchanged.
// - Every clause after the first nests the lowered tree one level deeper and counts against
//   `ParserConfig::max_depth`, so an overlong chain is a `Limit` error rather than an unbounded tree.
// - Under [`WhenTermination::Legacy`] only `OTHERWISE` closes the chain; a bare `END` is then parsed as the next
//   guard and rejected by the expression parser.

/// One `guard => action` pair.
struct WhenClause {
    condition: Spanned<Expr>,
    action: Spanned<Statement>,
}

impl WhenClause {
    /// Wrap this clause in a conditional whose else-branch is `tail`.
    fn into_if(self, tail: Option<Spanned<Statement>>) -> Spanned<Statement> {
        let end = tail.as_ref().map_or(self.action.span.end, |t| t.span.end);
        let span = Span::new(self.condition.span.start, end);
        Spanned::new(
            Statement::If(IfStmt {
                condition: self.condition,
                then_branch: Box::new(self.action),
                else_branch: tail.map(Box::new),
            }),
            span,
        )
    }
}

/// What follows a clause's `;`.
enum ChainEnd {
    /// `OTHERWISE => action END`
    Otherwise(Spanned<Statement>),
    /// The chain closes without a default action.
    End,
    /// Another clause follows.
    Continue,
}

impl<'a> Parser<'a> {
    // ========================================================================
    // WHEN
    // ========================================================================

    /// Parse the clauses of a `WHEN` statement, with the cursor just past `WHEN`.
    fn when_chain(&mut self) -> Result<Statement, CompileError> {
        let first = self.when_clause()?;
        let (rest, otherwise) = self.chained(|p| {
            let mut rest = Vec::new();
            let otherwise = loop {
                match p.chain_end()? {
                    ChainEnd::Otherwise(action) => break Some(action),
                    ChainEnd::End => break None,
                    ChainEnd::Continue => {
                        p.enter_level()?;
                        rest.push(p.when_clause()?);
                    }
                }
            };
            Ok((rest, otherwise))
        })?;

        tracing::trace!(
            clauses = rest.len() + 1,
            otherwise = otherwise.is_some(),
            "lowering WHEN chain"
        );

        let tail = rest
            .into_iter()
            .rev()
            .fold(otherwise, |tail, clause| Some(clause.into_if(tail)));
        Ok(first.into_if(tail).node)
    }

    fn when_clause(&mut self) -> Result<WhenClause, CompileError> {
        let condition = self.expression()?;
        self.expect_punct_or_flag(PunctuationId::FatArrow, SyntaxErrorId::MissingNext);
        let action = self.statement()?;
        self.expect_punct_or_flag(PunctuationId::Semicolon, SyntaxErrorId::MissingSemicolon);
        Ok(WhenClause { condition, action })
    }

    /// Decide how the chain continues after a clause.
    fn chain_end(&mut self) -> Result<ChainEnd, CompileError> {
        if self.match_keyword(KeywordId::Otherwise) {
            self.expect_punct_or_flag(PunctuationId::FatArrow, SyntaxErrorId::MissingNext);
            let action = self.statement()?;
            self.match_punct(PunctuationId::Semicolon);
            self.expect_keyword_or_flag(KeywordId::End, SyntaxErrorId::MissingEnd);
            return Ok(ChainEnd::Otherwise(action));
        }

        match self.config.when_termination {
            WhenTermination::EndTerminates => {
                if self.match_keyword(KeywordId::End) {
                    Ok(ChainEnd::End)
                } else if self.is_at_end() {
                    self.flag(SyntaxErrorId::MissingEnd);
                    Ok(ChainEnd::End)
                } else {
                    Ok(ChainEnd::Continue)
                }
            }
            WhenTermination::Legacy => Ok(ChainEnd::Continue),
        }
    }
}
