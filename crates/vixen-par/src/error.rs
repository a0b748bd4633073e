//! Parser-visible hard errors.
//!
//! The parser never recovers: the first hard error encountered is
//! returned to the caller, which typically prints it and exits non-zero.

use thiserror::Error;

use vixen_util::FileId;

/// The three parser-visible failure categories. Each carries the full
/// `{line, column, file, symbol}` payload the error design calls for;
/// `file` is not interpolated into the message directly since it is only
/// meaningful together with a `SourceMap` the caller holds.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Current token is `NameGeneric` where a recognized construct was required.
    #[error("unknown name '{symbol}' at {line}:{column}")]
    UnknownName {
        symbol: String,
        line: u32,
        column: u32,
        file: Option<FileId>,
    },

    /// Current token type cannot start or continue the expected production.
    #[error("unsupported token '{symbol}' at {line}:{column}")]
    Unsupported {
        symbol: String,
        line: u32,
        column: u32,
        file: Option<FileId>,
    },

    /// `expect(T)` received a different type than it required.
    #[error("expected {expected}, found {found} ('{symbol}') at {line}:{column}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
        symbol: String,
        line: u32,
        column: u32,
        file: Option<FileId>,
    },
}

impl ParseError {
    pub fn file(&self) -> Option<FileId> {
        match self {
            ParseError::UnknownName { file, .. }
            | ParseError::Unsupported { file, .. }
            | ParseError::UnexpectedType { file, .. } => *file,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            ParseError::UnknownName { line, .. }
            | ParseError::Unsupported { line, .. }
            | ParseError::UnexpectedType { line, .. } => *line,
        }
    }

    pub fn column(&self) -> u32 {
        match self {
            ParseError::UnknownName { column, .. }
            | ParseError::Unsupported { column, .. }
            | ParseError::UnexpectedType { column, .. } => *column,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
