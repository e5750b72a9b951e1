//! Procura core library (used by the HTTP boundary and integration tests).
//!
//! Two independent components back the supplier-onboarding service:
//!
//! - [`TokenVerifier`] — bearer-token issuance and verification against a
//!   rotating [`SecretSet`]. Route guards call
//!   [`TokenVerifier::authenticate_as`] and map the result to 401/403.
//! - [`SimilarityRanker`] — cosine-similarity ranking of embedding vectors.
//!   Embeddings come from the upstream provider; this crate treats them as
//!   opaque `f32` slices.
//!
//! Both components are synchronous, stateless computations over immutable
//! state and are safe to share across any number of request handlers. No data
//! flows between them.
//!
//! Configuration is loaded once at startup via [`Config::from_env`] and
//! passed explicitly into the constructors.

pub mod auth;
pub mod config;
pub mod matching;

pub use auth::{
    AuthError, AuthResult, Claims, DEFAULT_TOKEN_TTL_DAYS, IdentityClaim, Role, SecretSet,
    TokenVerifier, bearer_token,
};
pub use config::{Config, ConfigError};
pub use matching::{
    Candidate, DEFAULT_MATCH_LIMIT, MatchingError, MatchingResult, ScoredMatch, SimilarityRanker,
    cosine_similarity,
};
