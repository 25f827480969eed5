//! `oauth1 base-string` command implementation.

use std::io::{self, Write};

use clap::Args;
use oauth1_signer::compute_signature_base_string;

use super::RequestArgs;
use crate::error::CliError;

/// Arguments for the base-string command.
#[derive(Args)]
pub(crate) struct BaseStringArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Nonce the verifier saw.
    #[arg(long)]
    nonce: String,

    /// Timestamp the verifier saw.
    #[arg(long)]
    timestamp: u64,
}

impl BaseStringArgs {
    /// Execute the base-string command.
    ///
    /// # Errors
    ///
    /// Returns an error if the config, body, or URI cannot be used.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let base_string = self.base_string()?;
        writeln!(io::stdout(), "{base_string}")?;
        Ok(())
    }

    fn base_string(&self) -> Result<String, CliError> {
        let config = self.request.load_config()?;
        let consumer_key = config.require_consumer_key()?;
        let payload = self.request.payload()?;

        Ok(compute_signature_base_string(
            &self.request.uri,
            &self.request.method,
            &payload,
            consumer_key,
            &self.nonce,
            self.timestamp,
        )?)
    }
}
