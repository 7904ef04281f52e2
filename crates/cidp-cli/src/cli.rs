//! CLI argument definitions for the CIDP evaluation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cidp-dx",
    version,
    about = "CIDP decision support - simplified EFNS/PNS 2021 criteria",
    long_about = "Evaluate a patient case against simplified EFNS/PNS 2021 CIDP criteria.\n\n\
                  Reads a JSON case file holding the clinical history, 20 nerve\n\
                  conduction records and ancillary results, and reports the diagnosis\n\
                  category, likely subtype, differentials and a management plan."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a case file and print the diagnostic report.
    Evaluate(EvaluateArgs),

    /// Write a starter case file with within-normal-limits values.
    Template(TemplateArgs),
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// Path to the JSON case file.
    #[arg(value_name = "CASE_FILE")]
    pub case_file: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Write the template to a file instead of stdout.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
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
