//! oauth1 CLI - OAuth 1.0a RSA-SHA256 request signer.
//!
//! Provides commands for:
//! - `sign`: Print the `Authorization` header value for a request
//! - `base-string`: Print the signature base string for a request

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BaseStringArgs, SignArgs};
use output::Output;

/// oauth1 - OAuth 1.0a RSA-SHA256 request signer.
#[derive(Parser)]
#[command(name = "oauth1", version, about)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the Authorization header value for a request.
    Sign(SignArgs),
    /// Print the signature base string without signing it.
    BaseString(BaseStringArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sign(args) => args.execute(),
        Commands::BaseString(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
