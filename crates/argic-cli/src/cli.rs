//! Command-line arguments for `argic`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "argic",
    version,
    about = "ARGIC product codes and depot lookups",
    long_about = "Build ARGIC glass product codes from vehicle details, the \
                  windows picked on the damage diagram and the glass color.\n\n\
                  Also lists the lookup tables and queries the depot service."
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

    /// Settings file (default: ./argic.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Table directory to use instead of the shipped tables.
    #[arg(long = "tables-dir", value_name = "DIR", global = true)]
    pub tables_dir: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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

    /// Include account logins in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a product code.
    Code(CodeArgs),

    /// Print a lookup table, or a count of every table.
    Tables(TablesArgs),

    /// Check a table directory against its manifest and load it.
    VerifyTables(VerifyTablesArgs),

    /// List the depots available to an account.
    Depots(DepotsArgs),
}

#[derive(Args)]
pub struct CodeArgs {
    /// Vehicle manufacturer, e.g. "BMW".
    #[arg(long, value_name = "NAME")]
    pub manufacturer: String,

    /// Vehicle model, e.g. "3 SERIES E46".
    #[arg(long, value_name = "NAME")]
    pub model: String,

    /// Window id selected on the damage diagram (repeatable).
    #[arg(long = "window", value_name = "ID")]
    pub windows: Vec<String>,

    /// Glass color, e.g. "BLUE".
    #[arg(long, value_name = "NAME")]
    pub color: String,

    /// Shade band color.
    #[arg(long, value_name = "NAME")]
    pub stripe: Option<String>,

    /// Glass modification (repeatable).
    #[arg(long = "modification", value_name = "NAME")]
    pub modifications: Vec<String>,

    /// Print the per-segment breakdown instead of the bare code.
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args)]
pub struct TablesArgs {
    /// Table to print; all tables are counted when omitted.
    #[arg(value_enum)]
    pub table: Option<TableArg>,
}

#[derive(Args)]
pub struct VerifyTablesArgs {
    /// Directory holding manifest.toml and the table files.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

#[derive(Args)]
pub struct DepotsArgs {
    /// Service endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Account code.
    #[arg(long, value_name = "ACCOUNT")]
    pub login: Option<String>,

    /// Account password.
    #[arg(long)]
    pub password: Option<String>,

    /// Numeric account id.
    #[arg(long = "user-id", value_name = "ID")]
    pub user_id: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableArg {
    Manufacturers,
    Models,
    Glass,
    Windows,
    Colors,
    Stripes,
    Modifications,
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
