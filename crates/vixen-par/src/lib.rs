//! Recursive-descent parser producing a Vixen AST.
//!
//! The parser pulls tokens from a [`vixen_lex::Lexer`] through a 3-slot
//! ribbon (previous / current / next) and builds a [`Program`] by
//! repeatedly parsing one statement and sliding the ribbon forward. It
//! does not attempt error recovery: the first hard error is returned to
//! the caller.

pub mod ast;
pub mod error;

#[cfg(test)]
mod edge_cases;

pub use ast::{BinaryExpression, Expr, Program, Statement};
pub use error::{ParseError, Result};

use vixen_lex::{Lexer, Token, TokenType};
use vixen_util::FileId;

fn sentinel_token() -> Token {
    Token {
        ttype: TokenType::Eol,
        symbol: Vec::new(),
        line: 0,
        column: 0,
        file: None,
    }
}

/// The multiplicative-level operator set: `{*, /, //, %, **}`.
const MULTIPLICATIVE_OPS: &[TokenType] = &[
    TokenType::Star,
    TokenType::Slash,
    TokenType::SlashSlash,
    TokenType::Percent,
    TokenType::StarStar,
];

/// The additive-level operator set: `{+, -}`.
const ADDITIVE_OPS: &[TokenType] = &[TokenType::Plus, TokenType::Minus];

pub struct Parser {
    lexer: Lexer,
    previous: Token,
    current: Token,
    next: Token,
}

impl Parser {
    /// Draws the first two tokens off `lexer`; `previous` starts as a
    /// sentinel since there is nothing before the first token.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next();
        let next = lexer.next();
        Parser {
            lexer,
            previous: sentinel_token(),
            current,
            next,
        }
    }

    /// Builds a parser directly from source bytes.
    pub fn parse_source(source: impl Into<Vec<u8>>) -> Result<Program> {
        Parser::new(Lexer::new(source)).parse()
    }

    /// Builds a parser from source bytes attributed to `file`, so any
    /// hard error it raises carries that file id in its payload.
    pub fn parse_source_with_file(source: impl Into<Vec<u8>>, file: FileId) -> Result<Program> {
        Parser::new(Lexer::with_file(source, file)).parse()
    }

    pub fn previous(&self) -> &Token {
        &self.previous
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Slides the ribbon forward by one token.
    fn update(&mut self) {
        let fresh = self.lexer.next();
        self.previous = std::mem::replace(&mut self.current, std::mem::replace(&mut self.next, fresh));
    }

    fn at_terminator(&self) -> bool {
        self.current.ttype.is_control()
    }

    /// Parses statements until a terminator token (`EOF`/`EOL`), building
    /// the program body. After each statement, `update()` is called
    /// unconditionally to consume the statement separator and continue.
    pub fn parse(mut self) -> Result<Program> {
        let mut program = Program::new();
        while !self.at_terminator() {
            let stmt = self.parse_stmt()?;
            program.body.push(stmt);
            self.update();
        }
        Ok(program)
    }

    fn parse_stmt(&mut self) -> Result<Statement> {
        self.parse_expr()
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        self.parse_binary(ADDITIVE_OPS, Parser::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        self.parse_binary(MULTIPLICATIVE_OPS, Parser::parse_primary)
    }

    /// Given a set of accepted operator token types and the next
    /// precedence level down, parses a left-associative chain:
    /// `next_level (op next_level)*`.
    fn parse_binary(
        &mut self,
        accepted: &[TokenType],
        next_level: fn(&mut Parser) -> Result<Expr>,
    ) -> Result<Expr> {
        let mut left = next_level(self)?;
        while accepted.contains(&self.current.ttype) {
            let operator = self.current.clone();
            self.update();
            let right = next_level(self)?;
            left = Expr::Binary(BinaryExpression::new(operator, left, right));
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.current.ttype {
            TokenType::NameGeneric => {
                let tok = self.current.clone();
                self.update();
                Ok(Expr::LiteralIdent(tok))
            }
            TokenType::NumBin | TokenType::NumOct | TokenType::NumHex | TokenType::NumInt => {
                let tok = self.current.clone();
                self.update();
                Ok(Expr::LiteralInt(tok))
            }
            TokenType::NumFlt => {
                let tok = self.current.clone();
                self.update();
                Ok(Expr::LiteralFlt(tok))
            }
            TokenType::LParen => {
                self.update();
                let inner = self.parse_expr()?;
                self.expect(TokenType::RParen)?;
                self.update();
                Ok(inner)
            }
            _ => Err(self.unsupported_error()),
        }
    }

    /// Asserts `current.ttype == expected`; on mismatch raises a
    /// parser-typed error naming both the expected and received types.
    fn expect(&self, expected: TokenType) -> Result<()> {
        if self.current.ttype == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedType {
                expected: expected.name(),
                found: self.current.ttype.name(),
                symbol: self.current.symbol_str().into_owned(),
                line: self.current.line,
                column: self.current.column,
                file: self.current.file,
            })
        }
    }

    fn unsupported_error(&self) -> ParseError {
        ParseError::Unsupported {
            symbol: self.current.symbol_str().into_owned(),
            line: self.current.line,
            column: self.current.column,
            file: self.current.file,
        }
    }
}
