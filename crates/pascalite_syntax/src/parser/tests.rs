#[cfg(test)]
/// Parser unit tests.
///
/// These tests pin the tree shapes the parser builds (in particular the `WHEN` lowering) and the exact set of
/// recoverable diagnostics each malformed input produces.
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use crate::lexer;

    fn fragment_with(source: &str, config: ParserConfig) -> Result<ParseOutput<Spanned<Statement>>, CompileError> {
        let tokens = lexer::lex(source).expect("test source should lex");
        parse_statement_with_config(&tokens, config)
    }

    fn fragment(source: &str) -> ParseOutput<Spanned<Statement>> {
        fragment_with(source, ParserConfig::default()).expect("fragment should parse")
    }

    fn program(source: &str) -> Result<ParseOutput<Program>, CompileError> {
        let tokens = lexer::lex(source).expect("test source should lex");
        parse(&tokens)
    }

    fn ids(diagnostics: &[SyntaxDiagnostic]) -> Vec<SyntaxErrorId> {
        diagnostics.iter().map(|d| d.id).collect()
    }

    fn root_if(stmt: &Spanned<Statement>) -> &IfStmt {
        match &stmt.node {
            Statement::If(node) => node,
            other => panic!("expected IF, got {:?}", other),
        }
    }

    // ------------------------------------------------------------------------
    // WHEN lowering
    // ------------------------------------------------------------------------

    #[test]
    fn test_when_single_clause_with_otherwise() {
        let out = fragment("WHEN a=1 => x:=1; OTHERWISE => y:=2 ; END");
        assert!(out.is_clean(), "unexpected diagnostics: {:?}", out.diagnostics);
        let node = root_if(&out.ast);
        assert_eq!(node.child_count(), 3);
        assert_eq!(node.chain().count(), 1);
        assert_eq!(dump(&out.ast.node), "IF\n  (= a 1)\n  ASSIGN x 1\n  ASSIGN y 2");
    }

    #[test]
    fn test_when_two_clauses_nest_right() {
        let out = fragment("WHEN a=1=>x:=1; b=2=>y:=2; OTHERWISE=>z:=3; END");
        assert!(out.is_clean());
        let root = root_if(&out.ast);
        let inner = root.else_if().expect("else-branch should be the second clause");
        assert_eq!(inner.condition.node.to_string(), "(= b 2)");
        assert!(inner.else_if().is_none());
        assert_eq!(
            dump(&out.ast.node),
            "IF\n  (= a 1)\n  ASSIGN x 1\n  IF\n    (= b 2)\n    ASSIGN y 2\n    ASSIGN z 3"
        );
    }

    #[test]
    fn test_when_missing_arrow_after_condition() {
        let source = "WHEN a=1 x:=1; OTHERWISE => y:=2; END";
        let out = fragment(source);
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingNext]);
        // Flagged at `x`, which is then parsed as the action.
        assert_eq!(out.diagnostics[0].span, Span::new(9, 10));
        let root = root_if(&out.ast);
        assert_eq!(root.condition.node.to_string(), "(= a 1)");
        assert!(matches!(&root.then_branch.node, Statement::Assign(a) if a.target.node == "x"));
    }

    #[test]
    fn test_when_each_omission_flags_once() {
        let cases = [
            ("WHEN a=1 x:=1; OTHERWISE => y:=2; END", SyntaxErrorId::MissingNext),
            ("WHEN a=1 => x:=1; OTHERWISE y:=2; END", SyntaxErrorId::MissingNext),
            ("WHEN a=1 => x:=1 OTHERWISE => y:=2; END", SyntaxErrorId::MissingSemicolon),
            ("WHEN a=1 => x:=1; OTHERWISE => y:=2", SyntaxErrorId::MissingEnd),
        ];
        for (source, expected) in cases {
            let out = fragment(source);
            assert_eq!(ids(&out.diagnostics), vec![expected], "source: {source}");
            assert_eq!(root_if(&out.ast).child_count(), 3, "source: {source}");
        }
    }

    #[test]
    fn test_when_end_closes_chain_without_else() {
        let out = fragment("WHEN a=1=>x:=1; END");
        assert!(out.is_clean());
        let root = root_if(&out.ast);
        assert_eq!(root.child_count(), 2);
        assert!(root.else_branch.is_none());
    }

    #[test]
    fn test_when_end_after_several_clauses() {
        let out = fragment("WHEN a=1=>x:=1; b=2=>y:=2; END");
        assert!(out.is_clean());
        let root = root_if(&out.ast);
        let last = root.chain().last().expect("chain is never empty");
        assert_eq!(root.chain().count(), 2);
        assert!(last.else_branch.is_none());
    }

    #[test]
    fn test_when_end_of_input_closes_chain() {
        let out = fragment("WHEN a=1=>x:=1;");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingEnd]);
        let root = root_if(&out.ast);
        assert_eq!(root.child_count(), 2);
        assert_eq!(dump(&out.ast.node), "IF\n  (= a 1)\n  ASSIGN x 1");

        let out = fragment("WHEN a=1=>x:=1");
        assert_eq!(
            ids(&out.diagnostics),
            vec![SyntaxErrorId::MissingSemicolon, SyntaxErrorId::MissingEnd]
        );
        assert_eq!(root_if(&out.ast).child_count(), 2);
    }

    #[test]
    fn test_legacy_when_rejects_bare_end() {
        let config = ParserConfig::new().with_when_termination(WhenTermination::Legacy);
        let err = fragment_with("WHEN a=1=>x:=1; END", config).expect_err("legacy mode treats END as a guard");
        assert_eq!(err.message, "Unexpected END in expression");
        assert_eq!(err.kind, ErrorKind::Syntax);
    }

    #[test]
    fn test_legacy_when_with_otherwise_matches_default() {
        let source = "WHEN a=1=>x:=1; b=2=>y:=2; OTHERWISE=>z:=3; END";
        let config = ParserConfig::new().with_when_termination(WhenTermination::Legacy);
        let legacy = fragment_with(source, config).expect("OTHERWISE still terminates");
        assert_eq!(legacy, fragment(source));
    }

    #[test]
    fn test_when_omissions_cascade_in_order() {
        let out = fragment("WHEN a=1 x:=1 OTHERWISE y:=2");
        assert_eq!(
            ids(&out.diagnostics),
            vec![
                SyntaxErrorId::MissingNext,
                SyntaxErrorId::MissingSemicolon,
                SyntaxErrorId::MissingNext,
                SyntaxErrorId::MissingEnd,
            ]
        );
        assert!(out.diagnostics.windows(2).all(|w| w[0].span.start <= w[1].span.start));
    }

    #[test]
    fn test_when_guard_error_propagates() {
        let err = fragment_with("WHEN => x := 1; END", ParserConfig::default()).expect_err("missing guard is fatal");
        assert_eq!(err.message, "Unexpected => in expression");
        assert_eq!(err.span, Span::new(5, 7));
    }

    #[test]
    fn test_when_nested_in_action() {
        let out = fragment("WHEN a=1 => WHEN b=2 => x:=1; END; OTHERWISE => y:=2 END");
        assert!(out.is_clean(), "unexpected diagnostics: {:?}", out.diagnostics);
        assert_eq!(
            dump(&out.ast.node),
            "IF\n  (= a 1)\n  IF\n    (= b 2)\n    ASSIGN x 1\n  ASSIGN y 2"
        );
    }

    #[test]
    fn test_when_spans_cover_clauses() {
        let source = "WHEN a=1 => x:=1; b=2 => y:=2; END";
        let out = fragment(source);
        assert_eq!(out.ast.span, Span::new(0, source.len()));
        let inner = root_if(&out.ast)
            .else_branch
            .as_deref()
            .expect("second clause");
        let b = source.find("b=2").expect("clause present");
        assert_eq!(inner.span.start, b);
    }

    #[test]
    fn test_when_empty_actions() {
        let out = fragment("WHEN a => ; OTHERWISE => ; END");
        assert!(out.is_clean());
        let root = root_if(&out.ast);
        assert_eq!(root.then_branch.node, Statement::NoOp);
        assert!(root.then_branch.span.is_empty());
    }

    #[test]
    fn test_when_inside_program() {
        let source = "PROGRAM demo;\nBEGIN\n  WHEN a = 1 => x := 1;\n       OTHERWISE => x := 0\n  END\nEND.";
        let out = program(source).expect("program should parse");
        assert!(out.is_clean(), "unexpected diagnostics: {:?}", out.diagnostics);
        assert_eq!(out.ast.name.as_ref().map(|n| n.node.as_str()), Some("demo"));
        match &out.ast.body.node {
            Statement::Compound(stmts) => {
                assert_eq!(stmts.len(), 1);
                assert!(matches!(stmts[0].node, Statement::If(_)));
            }
            other => panic!("expected compound body, got {:?}", other),
        }
    }

    // ------------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------------

    #[test]
    fn test_statement_list_missing_semicolon() {
        let out = fragment("BEGIN x := 1 y := 2 END");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingSemicolon]);
        assert!(matches!(&out.ast.node, Statement::Compound(s) if s.len() == 2));
    }

    #[test]
    fn test_statement_list_skips_unexpected_token() {
        let out = fragment("BEGIN x := 1 ) END");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::UnexpectedToken]);
        assert!(matches!(&out.ast.node, Statement::Compound(s) if s.len() == 1));
    }

    #[test]
    fn test_if_missing_then() {
        let out = fragment("IF a x := 1");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingThen]);
        assert_eq!(dump(&out.ast.node), "IF\n  a\n  ASSIGN x 1");
    }

    #[test]
    fn test_while_missing_do() {
        let out = fragment("WHILE a < 10 x := a");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingDo]);
    }

    #[test]
    fn test_assignment_with_equals() {
        let out = fragment("x = 1");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingColonEquals]);
        assert_eq!(dump(&out.ast.node), "ASSIGN x 1");
    }

    #[test]
    fn test_for_downto() {
        let out = fragment("FOR i := 10 DOWNTO 1 DO x := x + i");
        assert!(out.is_clean());
        assert_eq!(dump(&out.ast.node), "FOR i 10 DOWNTO 1\n  ASSIGN x (+ x i)");
    }

    #[test]
    fn test_for_missing_direction() {
        let out = fragment("FOR i := 1 10 DO x := i");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingToDownto]);
    }

    #[test]
    fn test_repeat_until() {
        let out = fragment("REPEAT x := x - 1; y := y + 1 UNTIL x <= 0");
        assert!(out.is_clean());
        assert_eq!(
            dump(&out.ast.node),
            "REPEAT\n  ASSIGN x (- x 1)\n  ASSIGN y (+ y 1)\n  UNTIL (<= x 0)"
        );
    }

    // ------------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------------

    #[test]
    fn test_expression_precedence() {
        let out = fragment("x := -a + b * c = d DIV 2");
        assert!(out.is_clean());
        assert_eq!(dump(&out.ast.node), "ASSIGN x (= (+ (- a) (* b c)) (DIV d 2))");
    }

    #[test]
    fn test_missing_right_paren() {
        let out = fragment("x := (a + 1");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingRightParen]);
        assert_eq!(dump(&out.ast.node), "ASSIGN x (+ a 1)");
    }

    #[test]
    fn test_string_and_not() {
        let out = fragment("s := NOT done AND 'it''s'");
        assert_eq!(dump(&out.ast.node), "ASSIGN s (AND (NOT done) 'it''s')");
    }

    // ------------------------------------------------------------------------
    // Programs, limits, streams
    // ------------------------------------------------------------------------

    #[test]
    fn test_program_missing_period() {
        let out = program("BEGIN END").expect("program should parse");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::MissingPeriod]);
        assert!(out.ast.name.is_none());
    }

    #[test]
    fn test_program_requires_begin() {
        let err = program("x := 1.").expect_err("body must be a compound statement");
        assert_eq!(err.message, "Expected BEGIN, found identifier 'x'");
    }

    #[test]
    fn test_program_trailing_tokens() {
        let out = program("BEGIN END. x").expect("program should parse");
        assert_eq!(ids(&out.diagnostics), vec![SyntaxErrorId::UnexpectedToken]);
    }

    #[test]
    fn test_nesting_limit() {
        let config = ParserConfig::new().with_max_depth(3);
        let err = fragment_with("BEGIN BEGIN BEGIN BEGIN END END END END", config.clone())
            .expect_err("four nested blocks exceed depth 3");
        assert_eq!(err.kind, ErrorKind::Limit);

        let err = fragment_with("x := NOT NOT NOT a", config).expect_err("prefix chains count too");
        assert_eq!(err.kind, ErrorKind::Limit);
    }

    fn when_source(clauses: usize) -> String {
        let mut source = String::from("WHEN");
        for i in 0..clauses {
            source.push_str(&format!(" a = {i} => x := {i};"));
        }
        source.push_str(" OTHERWISE => x := 0 END");
        source
    }

    #[test]
    fn test_long_when_chain_hits_nesting_limit() {
        let err = fragment_with(&when_source(100_000), ParserConfig::default())
            .expect_err("each clause nests one level deeper");
        assert_eq!(err.kind, ErrorKind::Limit);
        assert!(err.message.contains("256"), "{}", err.message);
    }

    #[test]
    fn test_when_chain_within_nesting_limit() {
        let out = fragment(&when_source(200));
        assert!(out.is_clean());
        assert_eq!(root_if(&out.ast).chain().count(), 200);
        assert!(dump(&out.ast.node).ends_with("ASSIGN x 0"));
    }

    #[test]
    fn test_when_clauses_count_against_custom_limit() {
        let config = ParserConfig::new().with_max_depth(4);
        assert!(fragment_with("WHEN a=>x:=1; b=>x:=2; END", config.clone()).is_ok());
        let err = fragment_with("WHEN a=>x:=1; b=>x:=2; c=>x:=3; d=>x:=4; END", config)
            .expect_err("four clauses need five levels");
        assert_eq!(err.kind, ErrorKind::Limit);
    }

    #[test]
    fn test_long_infix_chains_hit_nesting_limit() {
        for op in [" + 1", " * 2", " OR b"] {
            let source = format!("x := 0{}", op.repeat(200_000));
            let err = fragment_with(&source, ParserConfig::default()).expect_err("left spine is too deep");
            assert_eq!(err.kind, ErrorKind::Limit, "operator: {op}");
        }

        let source = format!("x := 0{}", " + 1".repeat(100));
        let out = fragment(&source);
        assert!(out.is_clean());
    }

    #[test]
    fn test_stream_without_eof_is_rejected() {
        assert!(parse_statement(&[]).is_err());
        let tokens = lexer::lex("x := 1").expect("lex");
        assert!(parse_statement(&tokens[..tokens.len() - 1]).is_err());
    }

    #[test]
    fn test_when_in_loop_body_snapshot() {
        let out = fragment("WHILE n > 0 DO WHEN n MOD 2 = 0 => n := n DIV 2; OTHERWISE => n := 3 * n + 1 END");
        assert!(out.is_clean());
        insta::assert_snapshot!(dump(&out.ast.node), @r"
        WHILE
          (> n 0)
          IF
            (= (MOD n 2) 0)
            ASSIGN n (DIV n 2)
            ASSIGN n (+ (* 3 n) 1)
        ");
    }
}
