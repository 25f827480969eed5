//! Request signer holding the consumer key and RSA private key.

use rsa::RsaPrivateKey;
use url::Url;

use crate::base_string::{base_uri, signature_base_string};
use crate::canonical::parameter_string;
use crate::error::SignerError;
use crate::header::build_authorization_header;
use crate::key::load_private_key;
use crate::params::{OAuthParams, generate_nonce, unix_timestamp};
use crate::query::QueryParams;
use crate::signature::{RsaSha256Key, sign_rsa_sha256, signing_key};

/// OAuth 1.0a RSA-SHA256 signer.
///
/// Holds no per-request state, so one instance can sign requests from
/// several threads at once.
#[derive(Clone)]
pub struct OAuthSigner {
    consumer_key: String,
    signing_key: RsaSha256Key,
}

impl std::fmt::Debug for OAuthSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthSigner")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

impl OAuthSigner {
    /// Create signer with pre-loaded private key.
    pub fn new(consumer_key: &str, private_key: RsaPrivateKey) -> Self {
        Self {
            consumer_key: consumer_key.to_owned(),
            signing_key: signing_key(private_key),
        }
    }

    /// Create signer from PEM-armored private key text (PKCS#1 or PKCS#8).
    pub fn from_pem(consumer_key: &str, pem: &str) -> Result<Self, SignerError> {
        let private_key = load_private_key(pem)?;
        Ok(Self::new(consumer_key, private_key))
    }

    /// OAuth consumer key sent as `oauth_consumer_key`.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Compute the `Authorization` header value for a request.
    ///
    /// # Arguments
    /// * `uri` - Absolute request URI (including query string)
    /// * `method` - HTTP method, used exactly as given
    /// * `payload` - Raw request body, empty for bodyless requests
    pub fn authorization_header(
        &self,
        uri: &str,
        method: &str,
        payload: &str,
    ) -> Result<String, SignerError> {
        self.authorization_header_with(uri, method, payload, generate_nonce, unix_timestamp)
    }

    /// Compute the `Authorization` header value with caller-supplied nonce
    /// and clock providers.
    ///
    /// With fixed providers the output is a pure function of the inputs.
    pub fn authorization_header_with<N, C>(
        &self,
        uri: &str,
        method: &str,
        payload: &str,
        nonce: N,
        clock: C,
    ) -> Result<String, SignerError>
    where
        N: FnOnce() -> Result<String, SignerError>,
        C: FnOnce() -> u64,
    {
        let url = Url::parse(uri)?;
        let mut oauth_params = OAuthParams::new(&self.consumer_key, payload, nonce()?, clock());
        let base_string = base_string_for(method, &url, &oauth_params);

        let signature = sign_rsa_sha256(&self.signing_key, &base_string)?;
        oauth_params.set_signature(&signature);

        Ok(build_authorization_header(&oauth_params))
    }

    /// Compute the signature base string without signing it.
    ///
    /// Useful for comparing against the base string a verifier reports.
    pub fn signature_base_string(
        &self,
        uri: &str,
        method: &str,
        payload: &str,
        nonce: &str,
        timestamp: u64,
    ) -> Result<String, SignerError> {
        crate::compute_signature_base_string(
            uri,
            method,
            payload,
            &self.consumer_key,
            nonce,
            timestamp,
        )
    }
}

pub(crate) fn base_string_for(method: &str, url: &Url, oauth_params: &OAuthParams) -> String {
    let query_params = QueryParams::from_url(url);
    let base = base_uri(url);
    tracing::debug!(
        base_uri = %base,
        query_params = query_params.len(),
        "Building signature base string"
    );

    let params = parameter_string(&query_params, oauth_params);
    let base_string = signature_base_string(method, &base, &params);
    tracing::trace!(%base_string, "Signature base string");
    base_string
}
