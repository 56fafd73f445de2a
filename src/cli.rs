use clap::{Parser, Subcommand};
use dimstore::Command;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dimstore")]
#[command(author, version, about = "Record image dimensions in a database")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database connection string (e.g. sqlite://images.db)
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the images table if it does not exist
    Ddl {
        #[arg(hide = true, trailing_var_arg = true)]
        rest: Vec<String>,
    },

    /// Decode an image header and store its dimensions
    Add {
        /// Image file to register
        filename: String,

        #[arg(hide = true, trailing_var_arg = true)]
        rest: Vec<String>,
    },

    /// Show the stored dimensions of an image
    Read {
        /// Filename the image was registered under
        filename: String,

        #[arg(hide = true, trailing_var_arg = true)]
        rest: Vec<String>,
    },

    /// Anything else prints the usage text
    #[command(external_subcommand)]
    Other(Vec<String>),
}

impl Cli {
    /// Arguments used when argv is rejected: no command, with the database
    /// taken from the environment alone.
    pub fn usage_fallback() -> Self {
        Self {
            config: None,
            verbose: false,
            database_url: std::env::var("DATABASE_URL").ok(),
            command: None,
        }
    }
}

/// Map the parsed subcommand onto a dispatchable [`Command`].
///
/// Operands after the expected ones are ignored.
pub fn to_command(command: Option<Commands>) -> Command {
    match command {
        Some(Commands::Ddl { .. }) => Command::Ddl,
        Some(Commands::Add { filename, .. }) => Command::Add(filename),
        Some(Commands::Read { filename, .. }) => Command::Read(filename),
        Some(Commands::Other(_)) | None => Command::Help,
    }
}
