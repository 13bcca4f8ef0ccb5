mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod meraki;
mod report;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};

use cli::Cli;
use config::{Config, ConfigOrigin, RunConfig};
use error::AppError;
use utils::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    // A .env file wins over variables already set in the process.
    match dotenvy::dotenv_override() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring .env file: {e}"),
    }

    let (file_config, origin) = Config::load(cli.config.as_deref())?;
    if let ConfigOrigin::File(path) = &origin {
        info!("Loaded config from {}", path.display());
    }

    let config = RunConfig::resolve(cli, &file_config, |name| std::env::var(name).ok())?;
    app::run(cli, &config)
}
