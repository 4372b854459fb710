//! CLI argument definitions for the OSM wrangler.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use osm_ingest::DEFAULT_PROGRESS_STEP;

#[derive(Parser)]
#[command(
    name = "osm-wrangler",
    version,
    about = "Audit and reshape OpenStreetMap XML exports",
    long_about = "Audit and reshape OpenStreetMap XML exports.\n\n\
                  Reports inconsistent street names and tag keys, and converts\n\
                  node/way elements into JSON records for document-store import."
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
    /// Report unexpected street suffixes and unnormalized street names.
    Audit(AuditArgs),

    /// Convert node and way elements into JSON records.
    Shape(ShapeArgs),

    /// Count occurrences of every element name.
    Tags(InputArgs),

    /// Count tag keys by key type.
    Keys(InputArgs),

    /// Count distinct contributing users.
    Users(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Path to the OpenStreetMap XML file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Log a progress message every N elements (0 disables).
    #[arg(long = "progress-every", value_name = "N", default_value_t = DEFAULT_PROGRESS_STEP)]
    pub progress_every: u64,

    /// Do not draw the progress spinner.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Args)]
pub struct AuditArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Suffix considered canonical; repeat to replace the default list.
    #[arg(long = "expected", value_name = "SUFFIX")]
    pub expected: Vec<String>,

    /// Example street names kept per unexpected suffix.
    #[arg(long = "sample-limit", value_name = "N")]
    pub sample_limit: Option<usize>,

    /// Suffix mapping (JSON object) used by --suggest.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Show the corrected form of every sampled street name.
    #[arg(long = "suggest", requires = "mapping")]
    pub suggest: bool,
}

#[derive(Args)]
pub struct ShapeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Suffix mapping (JSON object) applied to address.street.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,

    /// Output file (default: <INPUT>.json).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Indent each record instead of writing one record per line.
    #[arg(long = "pretty")]
    pub pretty: bool,
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
