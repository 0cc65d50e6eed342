//! CLI argument definitions for the carrier status tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "courier-status",
    version,
    about = "Normalize FedEx and DHL shipment statuses",
    long_about = "Normalize carrier tracking signals into one shipment-status vocabulary.\n\n\
                  Maps FedEx status/exception codes and DHL free text, trims scan-event\n\
                  histories and detects the layout of uploaded tracking spreadsheets."
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

    /// Include carrier text and spreadsheet values in logs.
    ///
    /// These can contain recipient names and addresses; they are redacted
    /// by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map a FedEx derived status code (and optional exception code).
    Fedex(FedexArgs),

    /// Map a status string from the older FedEx integration.
    FedexLegacy(FedexLegacyArgs),

    /// Map a DHL free-text status.
    Dhl(DhlArgs),

    /// Detect the header layout of a tracking spreadsheet.
    Layout(LayoutArgs),

    /// Filter a scan-event trail from a JSON file.
    Events(EventsArgs),

    /// Reconcile carrier payloads from a JSON file.
    Reconcile(ReconcileArgs),

    /// List the FedEx code tables.
    Codes,
}

#[derive(Parser)]
pub struct FedexArgs {
    /// Derived status code, e.g. DL or IT.
    #[arg(value_name = "DERIVED")]
    pub derived: String,

    /// Exception code; takes precedence when known.
    #[arg(long = "exception", value_name = "CODE")]
    pub exception: Option<String>,
}

#[derive(Parser)]
pub struct FedexLegacyArgs {
    #[arg(value_name = "STATUS")]
    pub status: String,
}

#[derive(Parser)]
pub struct DhlArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Parser)]
pub struct LayoutArgs {
    /// Spreadsheet to inspect (csv, txt, xlsx, xlsm, xls, ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Also load the data rows and report how many were read.
    #[arg(long = "rows")]
    pub rows: bool,
}

#[derive(Parser)]
pub struct EventsArgs {
    /// JSON array of scan events.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Keep events from the oldest one whose description contains TEXT.
    #[arg(long = "filter", value_name = "TEXT", default_value = "")]
    pub filter: String,
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// JSON payload or array of payloads.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Event filter (default: the config's `event_filter`).
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,

    /// Reconciliation options as JSON.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
