//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `PROCURA_*` environment
//! variables. Loaded once at startup and passed into the component
//! constructors; nothing in this crate reads the environment afterwards.

pub mod error;


pub use error::ConfigError;

use std::env;

/// Core configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PROCURA_*` overrides on top of defaults,
/// then [`Config::validate`] before constructing components.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to sign newly issued tokens. No default; required.
    pub signing_secret: String,

    /// Retired signing secrets, most recently retired first. Checked during
    /// verification only, never used for signing. Default: empty.
    pub legacy_secrets: Vec<String>,

    /// Token lifetime in days. Default: `7`.
    pub token_ttl_days: i64,

    /// Default truncation limit for similarity ranking. Default: `5`.
    pub match_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            signing_secret: String::new(),
            legacy_secrets: Vec::new(),
            token_ttl_days: crate::auth::DEFAULT_TOKEN_TTL_DAYS,
            match_limit: crate::matching::DEFAULT_MATCH_LIMIT,
        }
    }
}

impl Config {
    const ENV_SIGNING_SECRET: &'static str = "PROCURA_SIGNING_SECRET";
    const ENV_LEGACY_SECRETS: &'static str = "PROCURA_LEGACY_SECRETS";
    const ENV_TOKEN_TTL_DAYS: &'static str = "PROCURA_TOKEN_TTL_DAYS";
    const ENV_MATCH_LIMIT: &'static str = "PROCURA_MATCH_LIMIT";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let signing_secret =
            Self::parse_string_from_env(Self::ENV_SIGNING_SECRET, defaults.signing_secret);
        let legacy_secrets = Self::parse_secret_list_from_env(Self::ENV_LEGACY_SECRETS);
        let token_ttl_days = Self::parse_ttl_from_env(defaults.token_ttl_days)?;
        let match_limit = Self::parse_match_limit_from_env(defaults.match_limit)?;

        Ok(Self {
            signing_secret,
            legacy_secrets,
            token_ttl_days,
            match_limit,
        })
    }

    /// Validates basic invariants. Catches hand-constructed configs as well
    /// as missing environment variables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.signing_secret.is_empty() {
            return Err(ConfigError::MissingSigningSecret);
        }

        if self.token_ttl_days < 1 {
            return Err(ConfigError::InvalidTokenTtl {
                value: self.token_ttl_days.to_string(),
            });
        }

        if self.match_limit < 1 {
            return Err(ConfigError::InvalidMatchLimit {
                value: self.match_limit.to_string(),
            });
        }

        Ok(())
    }

    fn parse_ttl_from_env(default: i64) -> Result<i64, ConfigError> {
        match env::var(Self::ENV_TOKEN_TTL_DAYS) {
            Ok(value) => {
                let days: i64 = value.parse().map_err(|e| ConfigError::TtlParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if days < 1 {
                    return Err(ConfigError::InvalidTokenTtl { value });
                }

                Ok(days)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_match_limit_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MATCH_LIMIT) {
            Ok(value) => {
                let limit: usize =
                    value
                        .parse()
                        .map_err(|e| ConfigError::MatchLimitParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if limit < 1 {
                    return Err(ConfigError::InvalidMatchLimit { value });
                }

                Ok(limit)
            }
            Err(_) => Ok(default),
        }
    }

    /// Comma-separated list; entries are trimmed, empty segments dropped.
    fn parse_secret_list_from_env(var_name: &str) -> Vec<String> {
        env::var(var_name)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }
}
