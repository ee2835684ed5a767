//! Roster CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use roster_cli::config::Settings;
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_cli::session::Session;
use roster_persistence::FileStore;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_add, run_delete, run_delete_many, run_export, run_list, run_load, run_page_size,
    run_stats, run_update,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let data_dir = cli
        .data_dir
        .or_else(|| settings.data_dir.clone())
        .unwrap_or_else(FileStore::default_dir);
    tracing::debug!(data_dir = %data_dir.display(), source = %settings.source, "opening session");
    let mut session = Session::open(data_dir, settings.default_page_size);
    let source = settings.source.as_str();

    match cli.command {
        Command::Load(args) => run_load(&mut session, args.source.as_deref().unwrap_or(source)),
        Command::List(args) => run_list(&mut session, &args, source),
        Command::Add(args) => run_add(&mut session, args),
        Command::Update(args) => run_update(&mut session, args),
        Command::Delete { id } => run_delete(&mut session, &id),
        Command::DeleteMany(args) => run_delete_many(&mut session, &args),
        Command::Export(args) => {
            run_export(&mut session, &args, settings.export_dir.as_deref(), source)
        }
        Command::Stats => run_stats(&mut session, source),
        Command::PageSize { size } => run_page_size(&mut session, size),
    }
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
