//! CLI argument definitions for the curriculum checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "curriculum-check",
    version,
    about = "Check academic transcripts against curriculum prerequisite rules",
    long_about = "Check academic transcripts against a course catalog.\n\n\
                  Reports missing prerequisites and corequisites, unknown course codes,\n\
                  and semesters over the credit limit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include student identifiers in log output.
    #[arg(long = "log-student-data", global = true)]
    pub log_student_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate transcripts against a course catalog.
    Validate(ValidateArgs),

    /// List the courses defined by a catalog.
    Courses(CoursesArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Catalog JSON file (repeat to merge several files).
    #[arg(long = "catalog", value_name = "FILE", required = true)]
    pub catalogs: Vec<PathBuf>,

    /// Validation policy TOML (default: $CURRICULUM_POLICY, then built-in defaults).
    #[arg(long = "policy", value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Write one `<student>.report.json` per transcript into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Transcript JSON files or directories of them.
    #[arg(value_name = "TRANSCRIPT", required = true)]
    pub transcripts: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct CoursesArgs {
    /// Catalog JSON file (repeat to merge several files).
    #[arg(long = "catalog", value_name = "FILE", required = true)]
    pub catalogs: Vec<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
