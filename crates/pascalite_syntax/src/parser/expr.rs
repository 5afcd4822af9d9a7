/// Expression parsing methods.
///
/// This chunk implements the Pascal precedence ladder:
/// relational → additive (with optional leading sign) → multiplicative → factor.
///
/// ## Notes
/// - Which operators live on which level comes from the operator registry ([`operators::info_for`]), not from
///   per-level token lists.
/// - Relational operators do not chain: `a < b < c` stops after `a < b`.
/// - Each additive or multiplicative operator deepens the left spine by one level and is counted against
///   [`ParserConfig::max_depth`].
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let left = self.simple_expr()?;
        match self.binary_op_at(operators::RELATIONAL) {
            Some(op) => {
                self.advance();
                let right = self.simple_expr()?;
                Ok(binary(left, op, right))
            }
            None => Ok(left),
        }
    }

    fn simple_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span().start;
        let sign = if self.match_op(OperatorId::Plus) {
            Some(UnaryOp::Plus)
        } else if self.match_op(OperatorId::Minus) {
            Some(UnaryOp::Neg)
        } else {
            None
        };

        let mut left = self.term()?;
        if let Some(op) = sign {
            let span = Span::new(start, left.span.end);
            left = Spanned::new(Expr::Unary(op, Box::new(left)), span);
        }

        self.chained(|p| {
            while let Some(op) = p.binary_op_at(operators::ADDITIVE) {
                p.enter_level()?;
                p.advance();
                let right = p.term()?;
                left = binary(left, op, right);
            }
            Ok(left)
        })
    }

    fn term(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.factor()?;
        self.chained(|p| {
            while let Some(op) = p.binary_op_at(operators::MULTIPLICATIVE) {
                p.enter_level()?;
                p.advance();
                let right = p.factor()?;
                left = binary(left, op, right);
            }
            Ok(left)
        })
    }

    fn factor(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let span = self.current_span();

        if self.match_keyword(KeywordId::Not) {
            let operand = self.nested(|p| p.factor())?;
            let span = Span::new(span.start, operand.span.end);
            return Ok(Spanned::new(Expr::Unary(UnaryOp::Not, Box::new(operand)), span));
        }

        if self.match_punct(PunctuationId::LParen) {
            let inner = self.nested(|p| p.expression())?;
            self.expect_punct_or_flag(PunctuationId::RParen, SyntaxErrorId::MissingRightParen);
            return Ok(Spanned::new(inner.node, self.span_since(span.start)));
        }

        let expr = match &self.peek().kind {
            TokenKind::Ident(name) => Expr::Ident(name.clone()),
            TokenKind::Int(v) => Expr::Int(*v),
            TokenKind::Real(v) => Expr::Real(*v),
            TokenKind::String(s) => Expr::Str(s.clone()),
            other => {
                return Err(CompileError::syntax(format!("Unexpected {} in expression", other), span));
            }
        };
        self.advance();
        Ok(Spanned::new(expr, span))
    }

    /// The binary operator at the cursor, if it is an infix operator of the given precedence level.
    fn binary_op_at(&self, level: u8) -> Option<BinaryOp> {
        let id = self.peek().operator_id()?;
        let info = operators::info_for(id);
        if info.precedence == level && info.fixity == Fixity::Infix {
            binary_op(id)
        } else {
            None
        }
    }
}
