//! Bearer-token authentication with secret rotation.
//!
//! Tokens are HS256 JWTs signed with the current secret from a [`SecretSet`].
//! Verification tries the current secret first and then each retired secret
//! in declared order, so rotating the signing secret never invalidates
//! outstanding sessions before they expire.
//!
//! # Outcome Model
//!
//! A bad token (malformed, expired, signed by an unknown secret) is a routine
//! outcome, not a fault: [`TokenVerifier::verify_token`] returns `Option`.
//! The route-guard composition [`TokenVerifier::authenticate_as`] layers the
//! role check on top and distinguishes [`AuthError::Unauthenticated`] from
//! [`AuthError::WrongRole`] so the boundary can report them separately.
//!
//! Whether a token validated under the current secret or a retired one is
//! deliberately unobservable: the outcome, the claim, and the logging are
//! identical either way.

pub mod claims;
pub mod error;
pub mod secrets;
pub mod verifier;


pub use claims::{Claims, IdentityClaim, Role};
pub use error::{AuthError, AuthResult};
pub use secrets::SecretSet;
pub use verifier::{DEFAULT_TOKEN_TTL_DAYS, TokenVerifier};

/// Extracts the token from an `Authorization` header value.
///
/// Accepts `Bearer <token>` with a case-insensitive scheme. Returns `None`
/// for any other shape; the boundary maps that to `Unauthenticated`.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, rest) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}
