//! OAuth protocol parameters (RFC 5849 Section 3.1, plus `oauth_body_hash`).

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use rand::TryRng;
use rand::rngs::SysRng;
use sha2::{Digest, Sha256};

use crate::encode::form_encode;
use crate::error::SignerError;

pub const OAUTH_BODY_HASH: &str = "oauth_body_hash";
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_VERSION: &str = "oauth_version";

/// The only supported signature method.
pub const SIGNATURE_METHOD: &str = "RSA-SHA256";
/// OAuth protocol version.
pub const VERSION: &str = "1.0";
/// Length of generated nonces.
pub const NONCE_LENGTH: usize = 8;

const NONCE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Single-valued OAuth parameters, keyed by name in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthParams(BTreeMap<String, String>);

impl OAuthParams {
    /// Build the protocol parameters for one request.
    ///
    /// Nonce and timestamp are supplied by the caller so that output is a
    /// pure function of the inputs.
    pub fn new(consumer_key: &str, payload: &str, nonce: String, timestamp: u64) -> Self {
        let mut params = BTreeMap::new();
        params.insert(OAUTH_BODY_HASH.to_owned(), body_hash(payload));
        params.insert(OAUTH_CONSUMER_KEY.to_owned(), consumer_key.to_owned());
        params.insert(OAUTH_NONCE.to_owned(), nonce);
        params.insert(
            OAUTH_SIGNATURE_METHOD.to_owned(),
            SIGNATURE_METHOD.to_owned(),
        );
        params.insert(OAUTH_TIMESTAMP.to_owned(), timestamp.to_string());
        params.insert(OAUTH_VERSION.to_owned(), VERSION.to_owned());
        Self(params)
    }

    /// Attach the base64 signature, form-encoded for the header.
    pub fn set_signature(&mut self, signature: &str) {
        self.0
            .insert(OAUTH_SIGNATURE.to_owned(), form_encode(signature));
    }

    /// Value of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate parameters in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OAuthParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Base64 SHA-256 digest of the raw request body.
pub fn body_hash(payload: &str) -> String {
    let digest = Sha256::digest(payload.as_bytes());
    BASE64_STANDARD.encode(digest.as_slice())
}

/// Generate an alphanumeric nonce from the OS random source.
///
/// Each character is one random byte reduced modulo the alphabet size.
pub fn generate_nonce() -> Result<String, SignerError> {
    let mut bytes = [0u8; NONCE_LENGTH];
    SysRng
        .try_fill_bytes(&mut bytes)
        .map_err(SignerError::RandomSource)?;

    Ok(bytes
        .iter()
        .map(|&b| char::from(NONCE_ALPHABET[usize::from(b) % NONCE_ALPHABET.len()]))
        .collect())
}

/// Current Unix time in seconds.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
