//! RSA-SHA256 signing of the signature base string.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};

use crate::error::SignerError;

/// PKCS#1 v1.5 signing key bound to SHA-256.
pub type RsaSha256Key = SigningKey<Sha256>;

/// Wrap a parsed private key for RSA-SHA256 signing.
pub fn signing_key(private_key: RsaPrivateKey) -> RsaSha256Key {
    SigningKey::<Sha256>::new(private_key)
}

/// Sign data with RSA-SHA256 and return the base64-encoded signature.
pub fn sign_rsa_sha256(key: &RsaSha256Key, data: &str) -> Result<String, SignerError> {
    let signature = key.try_sign(data.as_bytes())?;
    Ok(BASE64_STANDARD.encode(signature.to_bytes()))
}
