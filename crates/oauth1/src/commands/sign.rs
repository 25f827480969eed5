//! `oauth1 sign` command implementation.

use std::io::{self, Write};

use clap::Args;
use oauth1_signer::{OAuthSigner, generate_nonce, read_private_key, unix_timestamp};

use super::RequestArgs;
use crate::error::CliError;

/// Arguments for the sign command.
#[derive(Args)]
pub(crate) struct SignArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Fixed nonce instead of a random one.
    #[arg(long, hide = true)]
    nonce: Option<String>,

    /// Fixed timestamp instead of the current time.
    #[arg(long, hide = true)]
    timestamp: Option<u64>,
}

impl SignArgs {
    /// Execute the sign command.
    ///
    /// # Errors
    ///
    /// Returns an error if the config, key, body, or URI cannot be used.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let header = self.authorization_header()?;
        writeln!(io::stdout(), "{header}")?;
        Ok(())
    }

    fn authorization_header(&self) -> Result<String, CliError> {
        let config = self.request.load_config()?;
        let settings = config.require_signer()?;

        tracing::debug!(path = %settings.private_key.display(), "Reading private key");
        let private_key = read_private_key(settings.private_key)?;
        let signer = OAuthSigner::new(settings.consumer_key, private_key);

        let payload = self.request.payload()?;
        let nonce = self.nonce.clone();
        let timestamp = self.timestamp;
        let header = signer.authorization_header_with(
            &self.request.uri,
            &self.request.method,
            &payload,
            || nonce.map_or_else(generate_nonce, Ok),
            || timestamp.unwrap_or_else(unix_timestamp),
        )?;
        Ok(header)
    }
}
