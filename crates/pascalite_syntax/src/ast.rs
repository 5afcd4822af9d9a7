//! Intermediate representation produced by the pascalite parser.
//!
//! The tree is a closed set of tagged variants: statement nodes ([`Statement`]) and expression nodes ([`Expr`]).
//! There is no `WHEN` node. A `WHEN` statement is lowered while parsing into right-nested [`IfStmt`]s, so every
//! consumer downstream of the parser only ever sees binary conditionals.
//!
//! ## Notes
//! - [`IfStmt`] fixes the child order (condition, then-branch, optional else-branch) in its field layout; a
//!   conditional with a fourth child or swapped children cannot be built.
//! - [`dump`] renders a statement as an indented tag tree. It is stable and used by the CLI and snapshot tests.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier, normalized to lower case by the lexer.
pub type Ident = String;

/// A whole program: an optional `PROGRAM name;` header followed by a compound statement and `.`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: Option<Spanned<Ident>>,
    pub body: Spanned<Statement>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `BEGIN s1; s2; ... END`
    Compound(Vec<Spanned<Statement>>),
    /// `target := value`
    Assign(AssignStmt),
    /// Binary conditional. Also the lowering target of `WHEN`.
    If(IfStmt),
    While(WhileStmt),
    Repeat(RepeatStmt),
    For(ForStmt),
    /// The empty statement.
    NoOp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Spanned<Ident>,
    pub value: Spanned<Expr>,
}

/// A binary conditional node: `[0]` condition, `[1]` then-branch, `[2]` optional else-branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub then_branch: Box<Spanned<Statement>>,
    pub else_branch: Option<Box<Spanned<Statement>>>,
}

impl IfStmt {
    /// Number of children this node carries (2 or 3).
    pub fn child_count(&self) -> usize {
        if self.else_branch.is_some() { 3 } else { 2 }
    }

    /// The nested conditional in the else position, if the else-branch is one.
    pub fn else_if(&self) -> Option<&IfStmt> {
        match self.else_branch.as_deref().map(|s| &s.node) {
            Some(Statement::If(nested)) => Some(nested),
            _ => None,
        }
    }

    /// Walk the right spine of nested conditionals, starting with `self`.
    pub fn chain(&self) -> impl Iterator<Item = &IfStmt> {
        std::iter::successors(Some(self), |node| node.else_if())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Spanned<Expr>,
    pub body: Box<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    pub body: Vec<Spanned<Statement>>,
    pub condition: Spanned<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForDirection {
    To,
    Downto,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub variable: Spanned<Ident>,
    pub start: Spanned<Expr>,
    pub direction: ForDirection,
    pub end: Spanned<Expr>,
    pub body: Box<Spanned<Statement>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    Int(i64),
    Real(f64),
    Str(String),
    Unary(UnaryOp, Box<Spanned<Expr>>),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Relational
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    // Additive
    Add,
    Sub,
    Or,
    // Multiplicative
    Mul,
    RealDiv,
    IntDiv,
    Mod,
    And,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "NOT"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Or => "OR",
            BinaryOp::Mul => "*",
            BinaryOp::RealDiv => "/",
            BinaryOp::IntDiv => "DIV",
            BinaryOp::Mod => "MOD",
            BinaryOp::And => "AND",
        };
        write!(f, "{s}")
    }
}

/// Expressions print as compact prefix forms: `(= a 1)`, `(- x)`, `'text'`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => write!(f, "{name}"),
            Expr::Int(v) => write!(f, "{v}"),
            Expr::Real(v) => write!(f, "{v:?}"),
            Expr::Str(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Expr::Unary(op, operand) => write!(f, "({op} {})", operand.node),
            Expr::Binary(lhs, op, rhs) => write!(f, "({op} {} {})", lhs.node, rhs.node),
        }
    }
}

// ============================================================================
// Tree dump
// ============================================================================

/// Render a statement as an indented tag tree, two spaces per level.
///
/// ```text
/// IF
///   (= a 1)
///   ASSIGN x 1
///   ASSIGN y 2
/// ```
pub fn dump(stmt: &Statement) -> String {
    let mut out = String::new();
    dump_into(&mut out, stmt, 0);
    out.truncate(out.trim_end().len());
    out
}

/// Render a whole program: a `PROGRAM name` line (when present) followed by the body.
pub fn dump_program(program: &Program) -> String {
    match &program.name {
        Some(name) => format!("PROGRAM {}\n{}", name.node, dump(&program.body.node)),
        None => dump(&program.body.node),
    }
}

fn line(out: &mut String, depth: usize, text: impl fmt::Display) {
    use fmt::Write;
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{:indent$}{text}", "", indent = depth * 2);
}

fn dump_into(out: &mut String, stmt: &Statement, depth: usize) {
    match stmt {
        Statement::Compound(stmts) => {
            line(out, depth, "COMPOUND");
            for s in stmts {
                dump_into(out, &s.node, depth + 1);
            }
        }
        Statement::Assign(assign) => {
            line(out, depth, format_args!("ASSIGN {} {}", assign.target.node, assign.value.node));
        }
        Statement::If(if_stmt) => {
            line(out, depth, "IF");
            line(out, depth + 1, &if_stmt.condition.node);
            dump_into(out, &if_stmt.then_branch.node, depth + 1);
            if let Some(else_branch) = &if_stmt.else_branch {
                dump_into(out, &else_branch.node, depth + 1);
            }
        }
        Statement::While(w) => {
            line(out, depth, "WHILE");
            line(out, depth + 1, &w.condition.node);
            dump_into(out, &w.body.node, depth + 1);
        }
        Statement::Repeat(r) => {
            line(out, depth, "REPEAT");
            for s in &r.body {
                dump_into(out, &s.node, depth + 1);
            }
            line(out, depth + 1, format_args!("UNTIL {}", r.condition.node));
        }
        Statement::For(f) => {
            let dir = match f.direction {
                ForDirection::To => "TO",
                ForDirection::Downto => "DOWNTO",
            };
            line(
                out,
                depth,
                format_args!("FOR {} {} {dir} {}", f.variable.node, f.start.node, f.end.node),
            );
            dump_into(out, &f.body.node, depth + 1);
        }
        Statement::NoOp => line(out, depth, "NO_OP"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp<T>(node: T) -> Spanned<T> {
        Spanned::new(node, Span::default())
    }

    fn assign(target: &str, value: i64) -> Spanned<Statement> {
        sp(Statement::Assign(AssignStmt {
            target: sp(target.to_string()),
            value: sp(Expr::Int(value)),
        }))
    }

    #[test]
    fn test_span_merge_and_len() {
        let span = Span::new(4, 9).merge(Span::new(2, 6));
        assert_eq!(span, Span::new(2, 9));
        assert_eq!(span.len(), 7);
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_if_chain_walks_right_spine() {
        let inner = IfStmt {
            condition: sp(Expr::Ident("b".to_string())),
            then_branch: Box::new(assign("y", 2)),
            else_branch: Some(Box::new(assign("z", 3))),
        };
        let outer = IfStmt {
            condition: sp(Expr::Ident("a".to_string())),
            then_branch: Box::new(assign("x", 1)),
            else_branch: Some(Box::new(sp(Statement::If(inner)))),
        };
        assert_eq!(outer.chain().count(), 2);
        assert_eq!(outer.child_count(), 3);
        assert!(outer.else_if().is_some_and(|n| n.else_if().is_none()));
    }

    #[test]
    fn test_expr_display_is_prefix_form() {
        let expr = Expr::Binary(
            Box::new(sp(Expr::Ident("a".to_string()))),
            BinaryOp::NotEq,
            Box::new(sp(Expr::Unary(UnaryOp::Neg, Box::new(sp(Expr::Real(1.5)))))),
        );
        assert_eq!(expr.to_string(), "(<> a (- 1.5))");
        assert_eq!(Expr::Str("it's".to_string()).to_string(), "'it''s'");
    }

    #[test]
    fn test_dump_indents_children() {
        let stmt = Statement::Compound(vec![assign("x", 1), sp(Statement::NoOp)]);
        assert_eq!(dump(&stmt), "COMPOUND\n  ASSIGN x 1\n  NO_OP");
    }
}
