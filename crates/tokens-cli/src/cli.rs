//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use tokens_cli::config::{DEFAULT_OUTPUT_DIR, FILE_KEY_ENV, TOKEN_ENV};
use tokens_figma::FIGMA_API_URL;

#[derive(Parser)]
#[command(
    name = "tokens",
    version,
    about = "Sync Figma variables into design token files",
    long_about = "Fetch the local variables of one or more Figma files and write one\n\
                  design token file per collection and mode.\n\n\
                  Also normalizes raw token exports into a single canonical file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Fetch variables and write one token file per collection and mode.
    Sync(SyncArgs),

    /// Merge raw options and alias exports into the canonical token file.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct SyncArgs {
    /// Output directory for token files.
    #[arg(long = "output", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Personal access token.
    #[arg(long = "token", env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// File key(s) to sync. Repeat the flag or separate keys with commas.
    #[arg(
        long = "file-key",
        value_name = "KEY",
        env = FILE_KEY_ENV,
        value_delimiter = ','
    )]
    pub file_keys: Vec<String>,

    /// API root.
    #[arg(long = "base-url", default_value = FIGMA_API_URL, hide = true)]
    pub base_url: String,

    /// Build and validate token files without writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Project root the default paths are relative to.
    #[arg(long = "root", value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Raw options export (default: <ROOT>/data/raw-figma-options.json).
    #[arg(long = "options", value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Raw alias export (default: <ROOT>/data/raw-figma-alias.json).
    #[arg(long = "alias", value_name = "FILE")]
    pub alias: Option<PathBuf>,

    /// Canonical output file (default: <ROOT>/tokens/canonical.json).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
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
