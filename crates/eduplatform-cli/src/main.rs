//! `eduplatform` command-line entry point.
mod cli;
mod command;
mod error;
mod render;

use crate::{cli::Cli, error::CliError};
use clap::Parser;
use eduplatform_config::Config;
use std::{env, process::ExitCode};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            report(&err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config, cli.debug);

    match command::run(cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

// `--config` (or its env var), then ./eduplatform.toml, then defaults.
fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let dir = env::current_dir().map_err(CliError::WorkingDir)?;

    Ok(Config::discover(cli.config.as_deref(), &dir)?)
}

// RUST_LOG wins, then --debug, then the configured filter.
fn init_tracing(config: &Config, debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(&config.log.filter).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &CliError) {
    eprintln!("error: {err}");

    if let Some(issues) = err.issues() {
        for (path, messages) in issues {
            for message in messages {
                eprintln!("  {path}: {message}");
            }
        }
    }
}

///
/// TESTS
///
