//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PROCURA_SIGNING_SECRET` was not set (or was set to an empty string).
    #[error("missing signing secret: set PROCURA_SIGNING_SECRET")]
    MissingSigningSecret,

    /// Token TTL is zero or negative.
    #[error("invalid token TTL '{value}': must be at least 1 day")]
    InvalidTokenTtl { value: String },

    /// Token TTL string could not be parsed as a number.
    #[error("failed to parse token TTL '{value}': {source}")]
    TtlParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Match limit is zero.
    #[error("invalid match limit '{value}': must be at least 1")]
    InvalidMatchLimit { value: String },

    /// Match limit string could not be parsed as a number.
    #[error("failed to parse match limit '{value}': {source}")]
    MatchLimitParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
