//! mirror-lint CLI - command-line interface for the mirror layout checker
//!
//! Translates arguments to a tree scan, routes every diagnostic to the error
//! stream, and derives the process exit status. Success is silent.

use clap::{Parser, ValueEnum};
use mirror_lint::{MirrorError, MirrorResult, OutputFormat, ReportFormatter, Scanner, EXIT_USAGE};
use std::io;
use std::path::PathBuf;
use std::process;

/// mirror-lint - slot convention enforcement for mirror class headers
#[derive(Parser)]
#[command(name = "mirror-lint")]
#[command(version = "0.1.0")]
#[command(about = "Checks mirror class headers for slot-wrapped field declarations")]
#[command(
    long_about = "mirror-lint scans a directory tree of .hpp headers and reports every \
instance field declared inside a class/struct body without the ST_SLOT(...) wrapper. \
Exit status: 0 when clean, 1 when violations were found, 2 on usage errors."
)]
struct Cli {
    /// Root directory containing mirror class headers
    root: PathBuf,

    /// Output format for the violation report
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e @ MirrorError::NotADirectory { .. }) => {
            eprintln!("{e}");
            process::exit(EXIT_USAGE);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> MirrorResult<i32> {
    let scanner = Scanner::new()?;
    let report = scanner.scan(&cli.root)?;

    if report.has_violations() {
        let formatter = ReportFormatter::new();
        formatter.write_report(&report, cli.format.into(), io::stderr().lock())?;
    }

    Ok(report.exit_code())
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}
