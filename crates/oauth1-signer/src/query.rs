//! Query parameter extraction.

use std::collections::{BTreeMap, BTreeSet};

use url::Url;

/// Query parameters of a request URI, keyed by name.
///
/// Values stay in their raw wire form (no percent-decoding). Each name maps
/// to a deduplicated set of values in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, BTreeSet<String>>);

impl QueryParams {
    /// Extract query parameters from a parsed URI.
    pub fn from_url(url: &Url) -> Self {
        url.query().map(Self::parse).unwrap_or_default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Pairs are split on the first `=`; a pair without `=` maps to the
    /// empty string. Empty segments are skipped.
    pub fn parse(query: &str) -> Self {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect()
    }

    /// Values for a parameter name.
    pub fn get(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.0.get(name)
    }

    /// Iterate parameters in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0.iter().map(|(name, values)| (name.as_str(), values))
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (name, value) in iter {
            params.entry(name.into()).or_default().insert(value.into());
        }
        Self(params)
    }
}
