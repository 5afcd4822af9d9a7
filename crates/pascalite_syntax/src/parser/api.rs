/// Parse a token stream into a [`Program`] with the default [`ParserConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `pascalite_syntax::lexer`.
///
/// ## Errors
/// Returns `Err(CompileError)` on the first fatal error. Recoverable problems are returned in
/// [`ParseOutput::diagnostics`] alongside the tree.
pub fn parse(tokens: &[Token]) -> Result<ParseOutput<Program>, CompileError> {
    parse_with_config(tokens, ParserConfig::default())
}

/// Parse a whole program with an explicit configuration.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), when = ?config.when_termination))]
pub fn parse_with_config(tokens: &[Token], config: ParserConfig) -> Result<ParseOutput<Program>, CompileError> {
    Parser::new(tokens, config)?.parse_program()
}

/// Parse a single statement (optionally followed by `;`) with the default [`ParserConfig`].
pub fn parse_statement(tokens: &[Token]) -> Result<ParseOutput<Spanned<Statement>>, CompileError> {
    parse_statement_with_config(tokens, ParserConfig::default())
}

/// Parse a single statement with an explicit configuration.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), when = ?config.when_termination))]
pub fn parse_statement_with_config(
    tokens: &[Token],
    config: ParserConfig,
) -> Result<ParseOutput<Spanned<Statement>>, CompileError> {
    Parser::new(tokens, config)?.parse_fragment()
}
