//! Configuration management for the OAuth 1.0a signer.
//!
//! Parses `oauth1.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `signer.consumer_key`
//! - `signer.private_key`

mod expand;

use expand::ExpandedField;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override OAuth consumer key.
    pub consumer_key: Option<String>,
    /// Override private key path (used as given, not relative to config).
    pub private_key: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "oauth1.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Signer configuration as parsed from TOML.
    signer: SignerConfigRaw,

    /// Resolved signer configuration (set after loading).
    #[serde(skip)]
    pub signer_resolved: SignerConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw signer configuration as parsed from TOML (paths as strings).
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SignerConfigRaw {
    consumer_key: Option<String>,
    private_key: Option<String>,
}

/// Resolved signer configuration with absolute key path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SignerConfig {
    /// OAuth consumer key.
    pub consumer_key: Option<String>,
    /// Path to PEM-encoded RSA private key.
    pub private_key: Option<PathBuf>,
}

/// Signer settings with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerSettings<'a> {
    /// OAuth consumer key.
    pub consumer_key: &'a str,
    /// Path to PEM-encoded RSA private key.
    pub private_key: &'a Path,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`signer.consumer_key`").
        field: String,
        /// Error message (e.g., "${`OAUTH_CONSUMER_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `oauth1.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(consumer_key) = &settings.consumer_key {
            self.signer_resolved.consumer_key = Some(consumer_key.clone());
        }
        if let Some(private_key) = &settings.private_key {
            self.signer_resolved.private_key = Some(private_key.clone());
        }
    }

    /// Get the validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the consumer key is missing or empty.
    pub fn require_consumer_key(&self) -> Result<&str, ConfigError> {
        let consumer_key = self.signer_resolved.consumer_key.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "signer.consumer_key required (via --consumer-key or config)".to_owned(),
            )
        })?;
        require_non_empty(consumer_key, "signer.consumer_key")?;
        Ok(consumer_key)
    }

    /// Get validated signer settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the consumer key or private key
    /// path is missing or empty.
    pub fn require_signer(&self) -> Result<SignerSettings<'_>, ConfigError> {
        let consumer_key = self.require_consumer_key()?;
        let private_key = self.signer_resolved.private_key.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "signer.private_key required (via --private-key or config)".to_owned(),
            )
        })?;
        if private_key.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "signer.private_key cannot be empty".to_owned(),
            ));
        }

        Ok(SignerSettings {
            consumer_key,
            private_key,
        })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Fields are optional in the file, but present ones must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(consumer_key) = &self.signer.consumer_key {
            require_non_empty(consumer_key, "signer.consumer_key")?;
        }
        if let Some(private_key) = &self.signer.private_key {
            require_non_empty(private_key, "signer.private_key")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref key) = self.signer.consumer_key {
            self.signer.consumer_key = Some(expand::expand_env(key, ExpandedField::ConsumerKey)?);
        }
        if let Some(ref path) = self.signer.private_key {
            self.signer.private_key = Some(expand::expand_env(path, ExpandedField::PrivateKey)?);
        }
        Ok(())
    }

    /// Resolve the private key path relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.signer_resolved = SignerConfig {
            consumer_key: self.signer.consumer_key.clone(),
            private_key: self
                .signer
                .private_key
                .as_deref()
                .map(|path| config_dir.join(path)),
        };
    }
}
