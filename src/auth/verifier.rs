use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use tracing::debug;

use crate::config::Config;

use super::claims::{Claims, IdentityClaim, Role};
use super::error::{AuthError, AuthResult};
use super::secrets::SecretSet;

/// Default token lifetime.
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Issues and verifies bearer tokens for the onboarding API.
///
/// Pure function of its inputs plus the immutable [`SecretSet`]; stateless
/// and reentrant.
pub struct TokenVerifier {
    secrets: SecretSet,
    ttl: Duration,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("secrets", &self.secrets)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secrets: SecretSet) -> Self {
        Self::with_ttl_days(secrets, DEFAULT_TOKEN_TTL_DAYS)
    }

    pub fn with_ttl_days(secrets: SecretSet, ttl_days: i64) -> Self {
        Self {
            secrets,
            ttl: Duration::days(ttl_days),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_ttl_days(SecretSet::from_config(config), config.token_ttl_days)
    }

    /// Mints a signed token for `subject_id` acting as `role`.
    ///
    /// Signed with the current secret only; expiry is issuance time plus the
    /// configured TTL. Opaque to callers, passed back unmodified on
    /// subsequent requests.
    pub fn issue_token(&self, subject_id: &str, role: Role) -> AuthResult<String> {
        if subject_id.is_empty() {
            return Err(AuthError::EmptySubject);
        }

        let now = Utc::now();
        let claims = Claims {
            sub: subject_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::default(), &claims, self.secrets.encoding_key())?;

        debug!(role = %role, "issued token");

        Ok(token)
    }

    /// Verifies signature and expiry against the secret set.
    ///
    /// The current secret is tried first, then retired secrets in declared
    /// order; the first key that validates wins and the scan stops. `None`
    /// covers malformed, expired, and unknown-signature tokens alike — a
    /// routine outcome (an expired session), not a fault. The result carries
    /// no trace of which key matched.
    pub fn verify_token(&self, token: &str) -> Option<Claims> {
        for key in self.secrets.decoding_keys() {
            if let Ok(data) = decode::<Claims>(token, key, &self.validation) {
                return Some(data.claims);
            }
        }

        debug!("token failed verification under every known secret");
        None
    }

    /// Route-guard composition: verify the token, then check the actor type.
    ///
    /// The returned [`IdentityClaim`] is what authorization decisions key on;
    /// checking the account's persisted active/approved state is the
    /// caller's job.
    pub fn authenticate_as(&self, required: Role, token: &str) -> AuthResult<IdentityClaim> {
        let claims = self.verify_token(token).ok_or(AuthError::Unauthenticated)?;

        if claims.role != required {
            debug!(required = %required, actual = %claims.role, "role mismatch");
            return Err(AuthError::WrongRole {
                required,
                actual: claims.role,
            });
        }

        Ok(IdentityClaim::from(claims))
    }
}
