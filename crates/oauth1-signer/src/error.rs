//! Error types for Authorization header signing.

use std::str::Utf8Error;

/// Error from computing an OAuth Authorization header.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried internally and no partial header is returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SignerError {
    /// Request URI could not be parsed.
    #[error("malformed URI")]
    MalformedUri(#[from] url::ParseError),

    /// Secure random source failed while generating the nonce.
    #[error("secure random source unavailable")]
    RandomSource(#[source] rand::rngs::SysError),

    /// RSA private key could not be decoded.
    #[error("invalid RSA key format")]
    InvalidKeyFormat(#[from] KeyError),

    /// RSA PKCS#1 v1.5 signing operation failed.
    #[error("RSA signing failed")]
    Signing(#[from] rsa::signature::Error),
}

/// RSA key loading/parsing error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum KeyError {
    /// Key file could not be read.
    #[error("failed to read key file")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8 in key file.
    #[error("invalid UTF-8 in key")]
    InvalidUtf8(#[from] Utf8Error),

    /// PKCS#1 key parsing error (`RSA PRIVATE KEY` block).
    #[error("PKCS#1 key error")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    /// PKCS#8 key parsing error.
    #[error("PKCS#8 key error")]
    Pkcs8(#[from] rsa::pkcs8::Error),
}
