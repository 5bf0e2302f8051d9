//! vb - veterinary clinic booking CLI
//!
//! # Examples
//!
//! ```bash
//! # Register a pet (local backend, acting as a user id)
//! vb pet add --user-id u1 --name Rex --species dog --birth-date 2022-01-01
//!
//! # Book as a guest; the owner is matched by email
//! vb appointment book --service checkup --date 2024-05-01 --email owner@clinic.test
//!
//! # Admin dashboard against the hosted backend
//! vb stats --email admin@clinic.test --password ... --pretty
//! ```

use vb_cli::{App, Cli, logger};
use vb_config::{Config, LogLevel};

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose {
        LogLevel(LevelFilter::Debug)
    } else {
        config.logging.level
    };
    let log_file = match (&config.logging.file, config.log_dir()) {
        (Some(name), Ok(dir)) => Some(dir.join(name)),
        (Some(_), Err(e)) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
        (None, _) => None,
    };
    if let Err(e) = logger::initialize(level, log_file, config.logging.colored) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let result = app.run(&cli.identity, cli.command).await;
    app.finish().await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
