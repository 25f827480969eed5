//! OAuth 1.0a `Authorization` header signing with RSA-SHA256.
//!
//! Computes the header value for a single API request: query and OAuth
//! protocol parameters are normalized into a signature base string
//! (RFC 5849 Section 3.4.1, extended with `oauth_body_hash`), signed with
//! RSA PKCS#1 v1.5 over SHA-256, and serialized as `OAuth k="v",...`.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), oauth1_signer::SignerError> {
//! let pem = std::fs::read_to_string("private_key.pem").unwrap_or_default();
//! let header = oauth1_signer::compute_authorization_header(
//!     "https://api.example.com/v1/items?limit=10",
//!     "GET",
//!     "",
//!     "consumer-key",
//!     &pem,
//! )?;
//! assert!(header.starts_with("OAuth "));
//! # Ok(())
//! # }
//! ```

mod base_string;
mod canonical;
mod encode;
mod error;
mod header;
mod key;
mod params;
mod query;
mod signature;
mod signer;

pub use base_string::{base_uri, signature_base_string};
pub use canonical::parameter_string;
pub use encode::{form_encode, oauth_encode};
pub use error::{KeyError, SignerError};
pub use header::build_authorization_header;
pub use key::{load_private_key, read_private_key};
pub use params::{
    NONCE_LENGTH, OAUTH_BODY_HASH, OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE,
    OAUTH_SIGNATURE_METHOD, OAUTH_TIMESTAMP, OAUTH_VERSION, OAuthParams, SIGNATURE_METHOD,
    VERSION, body_hash, generate_nonce, unix_timestamp,
};
pub use query::QueryParams;
pub use signature::{RsaSha256Key, sign_rsa_sha256, signing_key};
pub use signer::OAuthSigner;

/// Compute the OAuth `Authorization` header value for one request.
///
/// # Arguments
/// * `uri` - Absolute request URI, may include a query string
/// * `method` - HTTP method, used exactly as given
/// * `payload` - Raw request body, empty for bodyless requests
/// * `consumer_key` - OAuth consumer key
/// * `signing_key` - PEM-armored RSA private key (PKCS#1 or PKCS#8)
///
/// Returns the header value without the `Authorization: ` prefix.
pub fn compute_authorization_header(
    uri: &str,
    method: &str,
    payload: &str,
    consumer_key: &str,
    signing_key: &str,
) -> Result<String, SignerError> {
    OAuthSigner::from_pem(consumer_key, signing_key)?.authorization_header(uri, method, payload)
}

/// Compute the signature base string for one request without signing it.
///
/// Needs no private key, so a verifier's reported base string can be
/// compared against ours with only the consumer key at hand.
pub fn compute_signature_base_string(
    uri: &str,
    method: &str,
    payload: &str,
    consumer_key: &str,
    nonce: &str,
    timestamp: u64,
) -> Result<String, SignerError> {
    let url = url::Url::parse(uri)?;
    let oauth_params = OAuthParams::new(consumer_key, payload, nonce.to_owned(), timestamp);
    Ok(signer::base_string_for(method, &url, &oauth_params))
}
