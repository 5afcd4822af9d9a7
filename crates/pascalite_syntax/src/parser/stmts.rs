/// Statement parsing methods.
///
/// This chunk parses the statement forms (`BEGIN`, assignment, `IF`, `WHILE`, `REPEAT`, `FOR`) and statement lists.
/// `WHEN` is dispatched from here into `parser/when.rs`.
///
/// ## Notes
/// - A token that cannot start a statement yields [`Statement::NoOp`] without being consumed; the enclosing list
///   decides what to do with it.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, CompileError> {
        self.nested(|p| p.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.current_span().start;

        let stmt = if self.match_keyword(KeywordId::Begin) {
            self.compound_stmt()?
        } else if self.match_keyword(KeywordId::If) {
            self.if_stmt()?
        } else if self.match_keyword(KeywordId::While) {
            self.while_stmt()?
        } else if self.match_keyword(KeywordId::Repeat) {
            self.repeat_stmt()?
        } else if self.match_keyword(KeywordId::For) {
            self.for_stmt()?
        } else if self.match_keyword(KeywordId::When) {
            self.when_chain()?
        } else if matches!(self.peek().kind, TokenKind::Ident(_)) {
            self.assign_stmt()?
        } else {
            Statement::NoOp
        };

        Ok(Spanned::new(stmt, self.span_since(start)))
    }

    /// `s1 ; s2 ; ... sn`, stopping before `terminator` or end of file.
    ///
    /// A missing `;` between two statements is flagged. A token that neither separates, terminates, nor starts a
    /// statement is flagged and skipped so the loop always makes progress.
    fn statement_list(&mut self, terminator: KeywordId) -> Result<Vec<Spanned<Statement>>, CompileError> {
        let mut stmts = vec![self.statement()?];
        loop {
            if self.match_punct(PunctuationId::Semicolon) {
                stmts.push(self.statement()?);
            } else if self.check_keyword(terminator) || self.is_at_end() {
                break;
            } else if self.peek().kind.starts_statement() {
                self.flag(SyntaxErrorId::MissingSemicolon);
                stmts.push(self.statement()?);
            } else {
                self.flag(SyntaxErrorId::UnexpectedToken);
                self.advance();
            }
        }
        Ok(stmts)
    }

    fn compound_stmt(&mut self) -> Result<Statement, CompileError> {
        let body = self.statement_list(KeywordId::End)?;
        self.expect_keyword_or_flag(KeywordId::End, SyntaxErrorId::MissingEnd);
        Ok(Statement::Compound(body))
    }

    fn assign_stmt(&mut self) -> Result<Statement, CompileError> {
        let target = self.identifier_spanned()?;
        self.assign_op();
        let value = self.expression()?;
        Ok(Statement::Assign(AssignStmt { target, value }))
    }

    /// Expect `:=`. A lone `=` in its place is flagged and consumed; anything else is only flagged.
    fn assign_op(&mut self) {
        if self.match_op(OperatorId::Assign) {
            return;
        }
        self.flag(SyntaxErrorId::MissingColonEquals);
        self.match_op(OperatorId::Eq);
    }

    fn if_stmt(&mut self) -> Result<Statement, CompileError> {
        let condition = self.expression()?;
        self.expect_keyword_or_flag(KeywordId::Then, SyntaxErrorId::MissingThen);
        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_keyword(KeywordId::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Statement::If(IfStmt {
            condition,
            then_branch,
            else_branch,
        }))
    }

    fn while_stmt(&mut self) -> Result<Statement, CompileError> {
        let condition = self.expression()?;
        self.expect_keyword_or_flag(KeywordId::Do, SyntaxErrorId::MissingDo);
        let body = Box::new(self.statement()?);
        Ok(Statement::While(WhileStmt { condition, body }))
    }

    fn repeat_stmt(&mut self) -> Result<Statement, CompileError> {
        let body = self.statement_list(KeywordId::Until)?;
        self.expect_keyword_or_flag(KeywordId::Until, SyntaxErrorId::MissingUntil);
        let condition = self.expression()?;
        Ok(Statement::Repeat(RepeatStmt { body, condition }))
    }

    fn for_stmt(&mut self) -> Result<Statement, CompileError> {
        let variable = self.identifier_spanned()?;
        self.assign_op();
        let start = self.expression()?;
        let direction = if self.match_keyword(KeywordId::To) {
            ForDirection::To
        } else if self.match_keyword(KeywordId::Downto) {
            ForDirection::Downto
        } else {
            self.flag(SyntaxErrorId::MissingToDownto);
            ForDirection::To
        };
        let end = self.expression()?;
        self.expect_keyword_or_flag(KeywordId::Do, SyntaxErrorId::MissingDo);
        let body = Box::new(self.statement()?);
        Ok(Statement::For(ForStmt {
            variable,
            start,
            direction,
            end,
            body,
        }))
    }
}
