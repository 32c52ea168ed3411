//! CLI argument definitions for shelver.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use shelver_cli::types::{Mode, RunOptions};

#[derive(Parser)]
#[command(
    name = "shelver",
    version,
    about = "Copy and rename media files according to CSV rules",
    long_about = "Copy media files from an input directory into a structured\n\
                  output tree, renaming each file from the hierarchy columns\n\
                  of a rule CSV (book, unit, section, subsection, task,\n\
                  activity step, question).\n\n\
                  The whole CSV is validated before the first copy; any\n\
                  missing source file or unknown extension aborts the run."
)]
pub struct Cli {
    /// Rule CSV describing the files to copy.
    #[arg(value_name = "CSV", default_value = "rename.csv")]
    pub csv: PathBuf,

    /// Directory holding the source files.
    #[arg(value_name = "INPUT_DIR", default_value = "in")]
    pub input_dir: PathBuf,

    /// Root of the output tree.
    #[arg(value_name = "OUTPUT_DIR", default_value = "out")]
    pub output_dir: PathBuf,

    /// Rule variant the CSV follows.
    #[arg(long = "mode", value_enum, default_value = "hierarchy")]
    pub mode: ModeArg,

    /// Validate and plan without copying anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip writing the date-stamped audit CSV.
    #[arg(long = "no-audit")]
    pub no_audit: bool,

    /// Also write the validation report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

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
}

/// True when the invocation is the bare `help` pseudo-argument
/// (`shelver help`), which prints usage and exits without doing work.
/// Checked before clap parsing so the positional CSV argument never
/// swallows it.
pub fn is_help_invocation(mut args: impl Iterator<Item = String>) -> bool {
    args.nth(1).as_deref() == Some("help")
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            csv: self.csv.clone(),
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            mode: match self.mode {
                ModeArg::Hierarchy => Mode::Hierarchy,
                ModeArg::Suffix => Mode::Suffix,
            },
            dry_run: self.dry_run,
            write_audit: !self.no_audit,
            report_json: self.report_json.clone(),
        }
    }
}

/// CLI rule-variant choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Assemble names from the hierarchy columns.
    Hierarchy,
    /// Append a free-form suffix to each file's stem.
    Suffix,
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
