//! Rotating signing-secret set.

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::config::Config;

/// Ordered set of signing secrets.
///
/// The current secret signs new tokens. Retired secrets are kept for
/// verification only, until tokens signed under them expire, so a rotation
/// never forces a mass logout. Immutable after construction and safe for
/// concurrent reads from any number of request handlers.
pub struct SecretSet {
    encoding: EncodingKey,
    /// Trial order: current first, then retired secrets as declared.
    decoding: Vec<DecodingKey>,
}

impl std::fmt::Debug for SecretSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of Debug output.
        f.debug_struct("SecretSet")
            .field("secrets", &self.decoding.len())
            .finish()
    }
}

impl SecretSet {
    /// Builds a set from the current secret and the retired ones, most
    /// recently retired first.
    pub fn new(current: &str, legacy: &[String]) -> Self {
        let mut decoding = Vec::with_capacity(1 + legacy.len());
        decoding.push(DecodingKey::from_secret(current.as_bytes()));
        for secret in legacy {
            decoding.push(DecodingKey::from_secret(secret.as_bytes()));
        }

        Self {
            encoding: EncodingKey::from_secret(current.as_bytes()),
            decoding,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.signing_secret, &config.legacy_secrets)
    }

    /// Number of secrets in the set (current plus retired).
    pub fn len(&self) -> usize {
        self.decoding.len()
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    /// Decoding keys in trial order.
    pub(crate) fn decoding_keys(&self) -> impl Iterator<Item = &DecodingKey> {
        self.decoding.iter()
    }
}
