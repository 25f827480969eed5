//! Signature base string (RFC 5849 Section 3.4.1).

use url::Url;

use crate::encode::oauth_encode;

/// Base string URI: the request URI without query and fragment.
///
/// Scheme and host come out lowercased and default ports are dropped by the
/// URL parser; path case, explicit ports and user-info are kept. The parser
/// also resolves `.` and `..` path segments, so the signed path is the
/// normalized one.
pub fn base_uri(url: &Url) -> String {
    let mut base = url.clone();
    base.set_query(None);
    base.set_fragment(None);
    base.into()
}

/// Build the signature base string.
///
/// Format: `METHOD&encoded_base_uri&encoded_parameters`. The method is used
/// exactly as supplied.
pub fn signature_base_string(method: &str, base_uri: &str, params: &str) -> String {
    format!(
        "{}&{}&{}",
        oauth_encode(method),
        oauth_encode(base_uri),
        oauth_encode(params)
    )
}
