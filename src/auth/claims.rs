//! Token payload and identity types.

use serde::{Deserialize, Serialize};

/// Actor type encoded in every token.
///
/// Closed set: any other value in the wire payload fails deserialization, so
/// a token carrying an unknown role can never authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform operator.
    Admin,
    /// Onboarded vendor account.
    Supplier,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Supplier => write!(f, "supplier"),
        }
    }
}

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — account ID (standard JWT `sub` claim).
    pub sub: String,
    /// Actor type.
    pub role: Role,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Verified identity attached to a request after a successful guard check.
///
/// Constructed fresh per verification and never persisted. Account-state
/// checks ("is this supplier still approved") are the caller's job, against
/// the account store, using `subject_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityClaim {
    /// Account ID the token was issued to.
    pub subject_id: String,
    /// Actor type the token was issued for.
    pub role: Role,
}

impl From<Claims> for IdentityClaim {
    fn from(claims: Claims) -> Self {
        Self {
            subject_id: claims.sub,
            role: claims.role,
        }
    }
}
