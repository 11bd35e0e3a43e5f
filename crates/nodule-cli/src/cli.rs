//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nodule",
    version,
    about = "Pulmonary nodule follow-up recommendations",
    long_about = "Pulmonary nodule follow-up recommendations.\n\n\
                  Applies the Fleischner Society 2017 guidelines to incidental nodules and\n\
                  ACR Lung-RADS v2022 to screening exams. Case files are JSON with an\n\
                  `input` record and optional raw `measurements`."
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

    /// Result format.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fleischner 2017 recommendation for an incidental nodule.
    Fleischner(CaseArgs),

    /// Lung-RADS v2022 category for a screening nodule.
    LungRads(CaseArgs),

    /// List the Lung-RADS categories.
    Categories,

    /// Classify interval growth between two measurements.
    Growth(GrowthArgs),
}

#[derive(Args)]
pub struct CaseArgs {
    /// Path to a JSON case file.
    #[arg(value_name = "CASE")]
    pub case: PathBuf,
}

#[derive(Args)]
pub struct GrowthArgs {
    /// Prior mean diameter in mm.
    #[arg(long = "prior", value_name = "MM")]
    pub prior: String,

    /// Current mean diameter in mm.
    #[arg(long = "current", value_name = "MM")]
    pub current: String,

    /// Date of the prior exam (e.g. 2024-01-15).
    #[arg(long = "prior-date", value_name = "DATE")]
    pub prior_date: String,

    /// Date of the current exam.
    #[arg(long = "current-date", value_name = "DATE")]
    pub current_date: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
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
