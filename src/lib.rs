pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::domain::error::AppError;
use crate::interfaces::cli::{execute, load_config, Cli};

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
/// Logs go to stderr so stdout stays machine-readable.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);

    match execute(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::NotFound(msg)) => {
            eprintln!("{}", msg);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
