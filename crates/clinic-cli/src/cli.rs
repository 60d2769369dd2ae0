//! CLI argument definitions for the procedure importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clinic-import",
    version,
    about = "Bulk-import medical procedures from CSV files",
    long_about = "Bulk-import medical procedures from CSV, semicolon, or tab-delimited files.\n\n\
                  Parses and validates the file locally, shows a per-row preview, and commits\n\
                  the valid rows against the record store, creating referenced doctors,\n\
                  patients, and procedure types as needed."
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

    /// Allow doctor and patient names in log output (personal data).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse and validate a file, showing the per-row preview.
    Preview(PreviewArgs),

    /// Validate a file and commit its valid rows to the record store.
    Import(ImportArgs),

    /// Write the example CSV template.
    Template(TemplateArgs),
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Import file (CSV, semicolon, or tab delimited, UTF-8).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the preview as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Import file (CSV, semicolon, or tab delimited, UTF-8).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Offline store state file; created when missing, updated on commit.
    /// Without it the import runs against a throwaway in-memory store.
    #[arg(long = "state", value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Commit without asking; otherwise only the preview is shown.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,

    /// Print the result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Destination path (default: template_importacao.csv in the current
    /// directory). Use `-` for stdout.
    #[arg(value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
