//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::env::VarError;
use std::fmt;

use crate::ConfigError;

/// Config fields that go through environment expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpandedField {
    ConsumerKey,
    PrivateKey,
}

impl fmt::Display for ExpandedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ConsumerKey => "signer.consumer_key",
            Self::PrivateKey => "signer.private_key",
        })
    }
}

/// Expand `${VAR}` references in a signer field value.
///
/// Values without `${` are returned unchanged, so bare `$VAR` stays literal.
/// A non-Unicode variable is reported rather than lossily converted.
pub(crate) fn expand_env(value: &str, field: ExpandedField) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let expanded = shellexpand::env_with_context(value, |name: &str| std::env::var(name).map(Some))
        .map_err(|err| {
            let problem = match err.cause {
                VarError::NotPresent => "not set",
                VarError::NotUnicode(_) => "is not valid Unicode",
            };
            ConfigError::EnvVar {
                field: field.to_string(),
                message: format!("${{{}}} {problem}", err.var_name),
            }
        })?;
    Ok(expanded.into_owned())
}
