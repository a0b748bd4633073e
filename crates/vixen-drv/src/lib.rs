//! vixen-drv - Command-line driver
//!
//! Wires the scanner, classifier, and parser together behind the surface
//! described for the `vixen` binary: parse a file, parse an inline `-c`
//! expression, or fall into a line-at-a-time REPL. None of the three core
//! crates (`vixen-lex`, `vixen-par`) know about files, processes, or
//! pretty-printing. That is entirely this crate's job.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{DriverError, Result};

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error};
use vixen_par::{ParseError, Parser};
use vixen_util::{Diagnostic, SourceMap, Span};

/// Turns a hard parse error into a structured [`Diagnostic`] and logs it,
/// so severity and position travel as fields rather than a formatted string.
fn log_parse_error(err: &ParseError, file_name: Option<&str>) {
    let diagnostic = Diagnostic::error(err.to_string(), Span::new(err.line(), err.column()));
    match file_name {
        Some(name) => error!(file = name, %diagnostic, "hard parse error"),
        None => error!(%diagnostic, "hard parse error"),
    }
}

/// Parses `source` as a single program and serializes its reduced AST as
/// pretty-printed JSON, matching the documented `program.reduce()` shape.
pub fn parse_and_reduce(source: impl Into<Vec<u8>>) -> Result<String> {
    debug!("parsing source into a Program");
    let program = Parser::parse_source(source).map_err(|e| {
        log_parse_error(&e, None);
        e
    })?;
    render(&program)
}

/// Reads `path` in full and parses its contents as a single program,
/// registering it in a fresh `SourceMap` so a hard error carries a file id.
pub fn parse_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading source file");
    let mut sources = SourceMap::new();
    let file = sources.load_file(path).map_err(|e| match e {
        vixen_util::SourceLoadError::Io { path, source } => DriverError::Io {
            path: PathBuf::from(path),
            source,
        },
    })?;
    let bytes = sources.get(file).expect("file was just registered").content.clone();

    let program = Parser::parse_source_with_file(bytes, file).map_err(|e| {
        log_parse_error(&e, Some(sources.name(file)));
        e
    })?;
    render(&program)
}

fn render(program: &vixen_par::Program) -> Result<String> {
    let value = program.reduce();
    Ok(serde_json::to_string_pretty(&value).expect("reduce() output is always valid JSON"))
}

/// Runs the REPL fallback: prints `prompt`, reads one line at a time from
/// `input`, parses each line as its own program, and writes the reduced
/// AST (or the error message) to `output`. Returns once `input` reaches
/// EOF.
pub fn run_repl(mut input: impl BufRead, mut output: impl Write, prompt: &str) -> Result<()> {
    let mut line = String::new();
    loop {
        let _ = write!(output, "{prompt}");
        let _ = output.flush();

        line.clear();
        let bytes_read = input.read_line(&mut line).map_err(|source| DriverError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        if bytes_read == 0 {
            return Ok(());
        }

        match parse_and_reduce(line.as_bytes().to_vec()) {
            Ok(rendered) => {
                let _ = writeln!(output, "{rendered}");
            }
            Err(e) => {
                let _ = writeln!(output, "error: {e}");
            }
        }
    }
}

/// The two mutually-exclusive ways of supplying a single program's
/// source, resolved from the CLI's positional `file` and `-c` flag.
pub enum Invocation {
    File(PathBuf),
    Inline(Vec<u8>),
    Repl,
}

impl Invocation {
    /// Resolves `file`/`inline` into one of the three invocation modes,
    /// rejecting the case where both are given.
    pub fn resolve(file: Option<PathBuf>, inline: Option<String>) -> Result<Self> {
        match (file, inline) {
            (Some(_), Some(_)) => Err(DriverError::Usage(
                "provide either a source file or -c <expr>, not both".to_string(),
            )),
            (Some(path), None) => Ok(Invocation::File(path)),
            (None, Some(expr)) => Ok(Invocation::Inline(expr.into_bytes())),
            (None, None) => Ok(Invocation::Repl),
        }
    }
}
