//! Authentication error types.

use thiserror::Error;

use super::claims::Role;

/// Errors surfaced by token issuance and the route-guard composition.
///
/// `Unauthenticated` and `WrongRole` are routine rejections the boundary maps
/// to HTTP status codes; they carry no detail about which secret (if any) was
/// involved.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token missing, malformed, expired, or not signed by any known secret.
    #[error("token is missing, malformed, expired, or not signed by a known secret")]
    Unauthenticated,

    /// Token verified but was issued for a different actor type.
    #[error("token role '{actual}' does not satisfy required role '{required}'")]
    WrongRole { required: Role, actual: Role },

    /// Issuance was asked to mint a token for an empty subject id.
    #[error("subject id must not be empty")]
    EmptySubject,

    /// Token serialization/signing failed at issuance.
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

pub type AuthResult<T> = Result<T, AuthError>;
