//! CLI argument definitions for the audit checklist.

use std::path::PathBuf;

use audit_cli::config::parse_audit_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "audit-checklist",
    version,
    about = "ICAI audit compliance checklist",
    long_about = "Track compliance with the ICAI Standards on Auditing for one client.\n\n\
                  Mark standards as complied with, keep notes, and export the\n\
                  checklist as an Excel workbook or a Word document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in Standards on Auditing.
    Standards,

    /// Run a checklist session reading commands from stdin or a script.
    Session(SessionArgs),
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Client name shown on the checklist and reports (default: XYZ Ltd).
    #[arg(long = "client", value_name = "NAME")]
    pub client: Option<String>,

    /// Audit date as YYYY-MM-DD (default: today).
    #[arg(long = "date", value_name = "DATE", value_parser = parse_audit_date)]
    pub date: Option<NaiveDate>,

    /// Directory for exported reports (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read session commands from a file instead of stdin.
    #[arg(long = "script", value_name = "PATH")]
    pub script: Option<PathBuf>,
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
