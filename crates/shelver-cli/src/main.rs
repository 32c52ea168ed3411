//! shelver CLI.

use clap::{ColorChoice, CommandFactory, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use shelver_cli::logging::{LogConfig, LogFormat, init_logging};
use shelver_cli::pipeline::run;
use shelver_cli::summary::{print_summary, print_violations};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, is_help_invocation};

fn main() {
    // `shelver help` behaves like `--help`: usage only, no run.
    if is_help_invocation(std::env::args()) {
        if Cli::command().print_long_help().is_err() {
            eprintln!("usage: shelver [CSV] [INPUT_DIR] [OUTPUT_DIR]");
        }
        return;
    }
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = cli.run_options();
    let exit_code = match run(&options) {
        Ok(result) => {
            if result.has_errors() {
                print_violations(&result.report);
                1
            } else {
                print_summary(&result);
                0
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
