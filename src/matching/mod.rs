//! Embedding similarity ranking for semantic product/supplier search.
//!
//! The boundary obtains embedding vectors from the upstream provider and
//! hands them here as opaque `f32` slices; this module ranks candidates by
//! cosine similarity to a reference vector and returns the top matches with
//! their caller-supplied metadata attached.
//!
//! Vectors being compared must have equal length. A mismatch means the
//! collaborator mixed embedding models or stored a corrupted vector, so the
//! computation fails explicitly instead of producing a plausible-looking
//! wrong score.

pub mod error;
pub mod ranker;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{MatchingError, MatchingResult};
pub use ranker::{DEFAULT_MATCH_LIMIT, SimilarityRanker, cosine_similarity};
pub use types::{Candidate, ScoredMatch};
