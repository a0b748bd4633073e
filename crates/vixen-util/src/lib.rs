//! Shared primitives for the Vixen front end.
//!
//! This crate has no knowledge of Vixen's grammar: it only carries the
//! source-position type (`Span`), the file/source tracking needed to
//! attribute an error to a file (`FileId`, `SourceMap`), a small
//! diagnostic carrier for the logging layer, and the error enums the
//! other crates specialize.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, Level};
pub use error::{Result, SourceLoadError};
pub use span::{FileId, SourceFile, SourceMap, Span};
