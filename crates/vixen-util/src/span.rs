//! Source positions shared by the lexer and parser.
//!
//! A [`Span`] is a 1-based `(line, column)` pair, not a byte-offset range:
//! Vixen's scanner reports positions that way (see `Symbol` in the data
//! model), and nothing downstream needs byte offsets into the original
//! buffer once a symbol has been carved out.

use std::fmt;
use std::path::Path;

use crate::error::{Result, SourceLoadError};

/// A source position: 1-based line, 1-based column.
///
/// `column` is measured from the last newline to the first byte of the
/// symbol it marks, matching the scanner's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    pub fn new(line: u32, column: u32) -> Self {
        Span { line, column }
    }

    /// Whether this span precedes `other` in source order.
    pub fn precedes(&self, other: &Span) -> bool {
        (self.line, self.column) < (other.line, other.column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Identifies one loaded source file within a [`SourceMap`].
///
/// Distinct from a byte offset: Vixen never needs to slice the original
/// buffer by id, only to print a name back to the user in a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(pub u32);

impl FileId {
    pub const ANONYMOUS: FileId = FileId(u32::MAX);
}

/// A named, loaded source buffer.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub id: FileId,
    pub name: String,
    pub content: Vec<u8>,
}

impl SourceFile {
    pub fn content_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Tracks the source files a driver has loaded, keyed by [`FileId`].
///
/// There is no global byte-offset space here: each file is looked up
/// only by id, to recover its display name for an error message.
#[derive(Debug, Clone, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        SourceMap { files: Vec::new() }
    }

    pub fn add_file(&mut self, name: impl Into<String>, content: Vec<u8>) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(SourceFile {
            id,
            name: name.into(),
            content,
        });
        id
    }

    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0 as usize)
    }

    pub fn name(&self, id: FileId) -> &str {
        self.get(id).map(|f| f.name.as_str()).unwrap_or("<input>")
    }

    /// Reads `path` in full and registers it, returning the id it was
    /// assigned. Leaves the map untouched on an I/O failure.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId> {
        let content = std::fs::read(path).map_err(|source| SourceLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(self.add_file(path.display().to_string(), content))
    }
}
