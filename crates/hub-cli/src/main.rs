//! hub - CLI for CRM/CMS REST and GraphQL APIs.
//!
//! This is a thin wrapper over the `hubkit` crates, intended for manual
//! exploration of records and the GraphQL schema.

mod cli;
mod commands;
mod context;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{graphql, objects};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let result = match cli.command {
        Commands::Objects(cmd) => objects::handle(cmd, &cli.global).await,
        Commands::Graphql(cmd) => graphql::handle(cmd, &cli.global).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{:#}", err));
            if let Some(hint) = hint_for(&err) {
                output::hint(hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// A follow-up suggestion for well-known failure kinds.
fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let err: &(dyn std::error::Error + 'static) = err.as_ref();
    if hubkit_core::error::is_unauthorized(err) {
        Some("check the token passed via --token or HUB_ACCESS_TOKEN")
    } else if hubkit_core::error::is_forbidden(err) {
        Some("the token is missing a scope required for this resource")
    } else if hubkit_core::error::is_rate_limited(err) {
        Some("rate limit reached; wait before retrying")
    } else if hubkit_core::error::is_server_error(err) {
        Some("the API reported a server error; it may be transient")
    } else {
        None
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
