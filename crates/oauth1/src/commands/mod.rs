//! CLI command implementations.

pub(crate) mod base_string;
pub(crate) mod sign;

use std::path::PathBuf;

use clap::Args;
use oauth1_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use base_string::BaseStringArgs;
pub(crate) use sign::SignArgs;

/// Request and credential arguments shared by every command.
#[derive(Args)]
pub(crate) struct RequestArgs {
    /// Absolute request URI, including the query string.
    #[arg(short, long)]
    uri: String,

    /// HTTP method, used exactly as given.
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Request body.
    #[arg(short, long, conflicts_with = "data_file")]
    data: Option<String>,

    /// Read the request body from a file.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// OAuth consumer key (default: from config).
    #[arg(long, env = "OAUTH1_CONSUMER_KEY")]
    consumer_key: Option<String>,

    /// Path to RSA private key file (default: from config).
    #[arg(short = 'k', long)]
    private_key: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover oauth1.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RequestArgs {
    /// Load config with command-line overrides applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            consumer_key: self.consumer_key.clone(),
            private_key: self.private_key.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Request body from `--data`, `--data-file`, or empty.
    fn payload(&self) -> Result<String, CliError> {
        if let Some(data) = &self.data {
            return Ok(data.clone());
        }
        match &self.data_file {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => Ok(String::new()),
        }
    }
}
