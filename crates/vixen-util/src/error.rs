//! Error types shared across the workspace's core crates.

use thiserror::Error;

/// Failures that can occur loading a source file into a [`crate::span::SourceMap`].
#[derive(Debug, Error)]
pub enum SourceLoadError {
    #[error("could not read source file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SourceLoadError>;
