//! Error handling for the `vixen` command-line driver.

use std::path::PathBuf;

use thiserror::Error;

use vixen_par::ParseError;

/// Top-level error type for the `vixen` binary.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The command-line invocation itself is malformed (both `file` and
    /// `-c` given, or similar usage mistakes).
    #[error("usage error: {0}")]
    Usage(String),

    /// A source file could not be read.
    #[error("could not read source file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser raised a hard error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A `vixen.toml` configuration file exists but could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DriverError>;
