//! CLI error types.

use oauth1_config::ConfigError;
use oauth1_signer::{KeyError, SignerError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Signer(#[from] SignerError),

    #[error("Failed to load private key: {0}")]
    Key(#[from] KeyError),
}
