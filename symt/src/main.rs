//! Symt CLI - encode, decode and self-check symc symbols.
//!
//! Parses arguments with clap, sets up logging, loads `symt.toml` and
//! dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{check, run_decode, run_encode, run_validate, CheckArgs, CodecArgs};
use config::Config;
use error::{Result, SymtError};

/// Symt - a tool for 64-bit identifier symbols
#[derive(Parser, Debug)]
#[command(name = "symt")]
#[command(author = "Symc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Encode, decode and self-check 64-bit identifier symbols", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SYMT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SYMT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SYMT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the symt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode identifiers into symbols
    Encode(CodecCommand),

    /// Decode symbol codes (decimal or 0x hex) into text
    Decode(CodecCommand),

    /// Check identifiers against the symbol alphabet
    Validate(ValidateCommand),

    /// Run the encoding self-check
    ///
    /// Exits non-zero if any case fails. Cases come from the `[check]`
    /// table of the configuration file, or the built-in defaults.
    Check,
}

/// Arguments for the encode and decode subcommands.
#[derive(Parser, Debug)]
struct CodecCommand {
    /// Identifiers (encode) or codes (decode)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Print a JSON array instead of text
    #[arg(long)]
    json: bool,
}

/// Arguments for the validate subcommand.
#[derive(Parser, Debug)]
struct ValidateCommand {
    /// Identifiers to check
    #[arg(required = true)]
    identifiers: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SymtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Encode(args) => run_encode(CodecArgs {
            inputs: args.inputs,
            json: args.json,
        }),
        Commands::Decode(args) => run_decode(CodecArgs {
            inputs: args.inputs,
            json: args.json,
        }),
        Commands::Validate(args) => run_validate(&args.identifiers),
        Commands::Check => check::execute(CheckArgs {
            verbose,
            cases: config.check,
        }),
    }
}
