//! kc - Keycloak identity resolver CLI
//!
//! For hosts that receive the identity through environment variables
//! (CGI-style embedding) rather than proxy headers.
//!
//! # Examples
//!
//! ```bash
//! # Point kc at the variables the embedding process exports
//! export KC_UUID_VARIABLE=KEYCLOAK_UUID KC_EMAIL_VARIABLE=KEYCLOAK_EMAIL \
//!   KC_USERNAME_VARIABLE=KEYCLOAK_USERNAME
//!
//! # Resolve the identity
//! KEYCLOAK_UUID=u-1 KEYCLOAK_EMAIL=a@x.com KEYCLOAK_USERNAME=alice kc resolve
//!
//! # DDL for a PostgreSQL host
//! kc schema --engine postgres
//! ```

use kc_cli::{Cli, CliError, Commands, EXIT_NO_IDENTITY, Outcome, logger, runner};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::initialize(cli.verbose) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match execute(&cli).await {
        Ok(Outcome::Json(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Ok(Outcome::Text(text)) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Outcome::NoIdentity(reason)) => {
            eprintln!("No identity: {}", reason);
            ExitCode::from(EXIT_NO_IDENTITY)
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<Outcome, CliError> {
    // Schema output needs no configuration
    if let Commands::Schema { engine } = &cli.command {
        return runner::schema(engine);
    }

    let config = kc_config::Config::load()?;
    config.validate()?;

    runner::run(&cli.command, &config).await
}
