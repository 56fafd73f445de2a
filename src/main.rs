mod cli;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use dimstore::dispatch;
use ds_core::config::Config;
use ds_db::SqliteStore;
use ds_probe::HeaderReader;

fn main() -> ExitCode {
    let (cli, rejected) = match Cli::try_parse() {
        Ok(cli) => (cli, None),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            ErrorKind::MissingRequiredArgument => {
                let _ = e.print();
                return ExitCode::FAILURE;
            }
            // Anything else clap rejects ends up at the usage text.
            kind => (Cli::usage_fallback(), Some(kind)),
        },
    };

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "dimstore=debug,ds_db=debug,ds_probe=debug".to_string()
        } else {
            "warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    if let Some(kind) = rejected {
        tracing::debug!(%kind, "Arguments not understood, showing usage");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<ds_core::Error>())
                .map_or("other", ds_core::Error::kind);
            tracing::debug!(kind, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    for warning in config.validate() {
        tracing::warn!("{warning}");
    }

    let url = config
        .resolve_database_url(cli.database_url.as_deref())
        .context("Unable to connect to database")?;
    let busy_timeout = Duration::from_millis(config.database.busy_timeout_ms);
    let store = SqliteStore::open(&url, busy_timeout).context("Unable to connect to database")?;
    tracing::debug!(?store, "Connected to database");

    let command = cli::to_command(cli.command);
    let result = dispatch(&command, &store, &HeaderReader::new(), &mut io::stdout().lock());

    // Close before the exit code is decided, whatever the outcome.
    if let Err(e) = store.close() {
        tracing::warn!("Failed to close database connection: {e}");
    }

    result
}
