//! AST node definitions and the `reduce` operation.
//!
//! The grammar this parser accepts is small enough that "statement" and
//! "expression" coincide: every statement is an expression. Nodes are
//! strictly tree-shaped, with no back- or parent-references, and own
//! their children directly via `Box`.

use serde_json::{json, Map, Value};

use vixen_lex::Token;

/// A full parse: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program { body: Vec::new() }
    }

    pub fn reduce(&self) -> Value {
        json!({
            "program": self.body.iter().map(Expr::reduce).collect::<Vec<_>>(),
        })
    }
}

/// Every statement in this grammar is an expression; there is no
/// separate statement shape (see `parse_stmt` in the parser).
pub type Statement = Expr;

/// The AST's expression sum type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpression),
    LiteralIdent(Token),
    LiteralInt(Token),
    LiteralFlt(Token),
}

impl Expr {
    /// Deterministic conversion to a plain nested mapping, used for
    /// pretty-printing and test assertions.
    pub fn reduce(&self) -> Value {
        match self {
            Expr::Binary(b) => b.reduce(),
            Expr::LiteralIdent(t) | Expr::LiteralInt(t) | Expr::LiteralFlt(t) => {
                literal_reduce(t)
            }
        }
    }
}

fn literal_reduce(token: &Token) -> Value {
    let mut map = Map::new();
    map.insert("kind".into(), Value::from(token.ttype.name()));
    map.insert("value".into(), Value::from(token.symbol_str().into_owned()));
    map.insert("lineno".into(), Value::from(token.line));
    map.insert("column".into(), Value::from(token.column));
    Value::Object(map)
}

/// `left op right`, built left-associatively by the generic binary
/// builder shared across precedence levels.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpression {
    pub fn new(operator: Token, left: Expr, right: Expr) -> Self {
        BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn reduce(&self) -> Value {
        let mut map = Map::new();
        map.insert("kind".into(), Value::from(self.operator.ttype.name()));
        map.insert(
            "operator".into(),
            Value::from(self.operator.symbol_str().into_owned()),
        );
        map.insert("lineno".into(), Value::from(self.operator.line));
        map.insert("column".into(), Value::from(self.operator.column));
        map.insert("left".into(), self.left.reduce());
        map.insert("right".into(), self.right.reduce());
        Value::Object(map)
    }
}
