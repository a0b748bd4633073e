//! Vixen CLI - parse a source file or inline expression and print its AST.
//!
//! This is the main entry point for the `vixen` command-line tool. It uses
//! clap for argument parsing and dispatches into `vixen_drv`'s file, inline,
//! and REPL modes.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vixen_drv::{parse_and_reduce, parse_file, run_repl, Config, DriverError, Invocation};

/// Vixen - scan, classify, and parse Vixen source into an AST
#[derive(ClapParser, Debug)]
#[command(name = "vixen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parses Vixen source and prints its reduced AST", long_about = None)]
struct Cli {
    /// Source file to parse
    file: Option<PathBuf>,

    /// Inline source to interpret, as a single expression
    #[arg(short = 'c', long = "command")]
    command: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, env = "VIXEN_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "VIXEN_NO_COLOR")]
    no_color: bool,

    /// Path to a vixen.toml configuration file
    #[arg(long, env = "VIXEN_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("error: {e}");
        return ExitCode::from(1);
    }

    match run(cli) {
        Ok(()) => ExitCode::from(0),
        Err(DriverError::Usage(msg)) => {
            eprintln!("error: {msg}");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<(), String> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {e}"))
}

fn run(cli: Cli) -> vixen_drv::Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match Invocation::resolve(cli.file, cli.command)? {
        Invocation::File(path) => {
            let rendered = parse_file(&path)?;
            println!("{rendered}");
            Ok(())
        }
        Invocation::Inline(bytes) => {
            let rendered = parse_and_reduce(bytes)?;
            println!("{rendered}");
            Ok(())
        }
        Invocation::Repl => {
            let stdin = io::stdin();
            run_repl(BufReader::new(stdin.lock()), io::stdout(), &config.prompt)
        }
    }
}
