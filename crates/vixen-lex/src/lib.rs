//! Scanner and token classifier for Vixen source text.
//!
//! [`Lexer`] wraps a [`Scanner`] and turns each raw symbol it yields into
//! a classified [`Token`]. It is lazy and stateless beyond the scanner it
//! owns, with no buffering and no lookahead of its own.

mod scanner;
mod token;

#[cfg(test)]
mod edge_cases;

pub use scanner::Scanner;
pub use token::{classify, Token, TokenType};

use vixen_util::FileId;

/// Wraps a [`Scanner`], classifying each symbol it produces.
pub struct Lexer {
    scanner: Scanner,
    file: Option<FileId>,
}

impl Lexer {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Lexer {
            scanner: Scanner::new(data),
            file: None,
        }
    }

    pub fn with_file(data: impl Into<Vec<u8>>, file: FileId) -> Self {
        Lexer {
            scanner: Scanner::new(data),
            file: Some(file),
        }
    }

    pub fn end(&self) -> bool {
        self.scanner.end()
    }

    /// Classify and return the next token.
    ///
    /// The scanner's own `end()` is checked *before* pulling the symbol:
    /// if it was already true, the symbol that comes back is the
    /// synthetic `EOF`/`EOL` marker, so its type is assigned directly
    /// rather than run through `classify`. This is what lets an
    /// identifier literally spelled `EOF` classify as `NameGeneric`
    /// instead of colliding with the control marker.
    pub fn next(&mut self) -> Token {
        let at_end = self.scanner.end();
        let (line, column, symbol) = self.scanner.next();

        let ttype = if at_end {
            if symbol == b"EOF" {
                TokenType::Eof
            } else {
                TokenType::Eol
            }
        } else {
            classify(&symbol)
        };

        Token {
            ttype,
            symbol,
            line,
            column,
            file: self.file,
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.end() {
            None
        } else {
            Some(Lexer::next(self))
        }
    }
}
