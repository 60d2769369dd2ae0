//! Procedure import CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};

use clinic_cli::cli::{Cli, Command, LogFormatArg};
use clinic_cli::commands::{run_import, run_preview, run_template, to_json};
use clinic_cli::logging::{LogConfig, LogFormat, init_logging};
use clinic_cli::summary::{print_preview, print_result};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Preview(args) => match run_preview(args) {
            Ok(preview) => {
                if args.json {
                    match to_json(&preview) {
                        Ok(json) => println!("{json}"),
                        Err(error) => {
                            eprintln!("error: {error:#}");
                            std::process::exit(1);
                        }
                    }
                } else {
                    print_preview(&preview);
                }
                if preview.invalid_rows > 0 { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Import(args) => match run_import(args) {
            Ok(Some(result)) => {
                if args.json {
                    match to_json(&result) {
                        Ok(json) => println!("{json}"),
                        Err(error) => {
                            eprintln!("error: {error:#}");
                            std::process::exit(1);
                        }
                    }
                } else {
                    print_result(&result);
                }
                if result.has_row_errors() { 1 } else { 0 }
            }
            Ok(None) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Template(args) => match run_template(args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
