//! Normalized request parameter string (RFC 5849 Section 3.4.1.3.2).

use std::collections::BTreeMap;

use crate::params::OAuthParams;
use crate::query::QueryParams;

/// Build the normalized parameter string from query and OAuth parameters.
///
/// Names and values are emitted as-is; the whole string is percent-encoded
/// once more when it goes into the signature base string. Pairs are sorted
/// by name, then by value. An OAuth parameter whose name collides with a
/// query parameter is added alongside the query values.
pub fn parameter_string(query: &QueryParams, oauth: &OAuthParams) -> String {
    let mut consolidated: BTreeMap<&str, Vec<&str>> = query
        .iter()
        .map(|(name, values)| (name, values.iter().map(String::as_str).collect()))
        .collect();

    for (name, value) in oauth.iter() {
        consolidated.entry(name).or_default().push(value);
    }

    let mut out = String::new();
    for (name, values) in &mut consolidated {
        values.sort_unstable();
        for value in values.iter() {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
    }
    out
}
