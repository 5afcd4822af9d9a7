/// Miscellaneous parser utilities.
///
/// This chunk contains small shared helpers that don’t cleanly fit into “stmts”, “when”, or “expr”.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                let name = name.clone();
                self.advance();
                Ok(Spanned::new(name, span))
            }
            other => Err(CompileError::syntax(
                format!("Expected identifier, found {}", other),
                self.current_span(),
            )),
        }
    }
}

/// Map an infix operator id onto its AST operator.
fn binary_op(id: OperatorId) -> Option<BinaryOp> {
    let op = match id {
        OperatorId::Eq => BinaryOp::Eq,
        OperatorId::NotEq => BinaryOp::NotEq,
        OperatorId::Lt => BinaryOp::Lt,
        OperatorId::LtEq => BinaryOp::LtEq,
        OperatorId::Gt => BinaryOp::Gt,
        OperatorId::GtEq => BinaryOp::GtEq,
        OperatorId::Plus => BinaryOp::Add,
        OperatorId::Minus => BinaryOp::Sub,
        OperatorId::Or => BinaryOp::Or,
        OperatorId::Star => BinaryOp::Mul,
        OperatorId::Slash => BinaryOp::RealDiv,
        OperatorId::Div => BinaryOp::IntDiv,
        OperatorId::Mod => BinaryOp::Mod,
        OperatorId::And => BinaryOp::And,
        OperatorId::Not | OperatorId::Assign => return None,
    };
    Some(op)
}

fn binary(left: Spanned<Expr>, op: BinaryOp, right: Spanned<Expr>) -> Spanned<Expr> {
    let span = left.span.merge(right.span);
    Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span)
}
