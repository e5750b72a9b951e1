use std::cmp::Ordering;
use tracing::debug;

use crate::config::Config;

use super::error::{MatchingError, MatchingResult};
use super::types::{Candidate, ScoredMatch};

/// Default truncation limit for ranked output.
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Cosine similarity of two equal-length vectors.
///
/// Returns a value in `[-1, 1]` (modulo floating-point rounding). A
/// zero-magnitude operand yields `0.0`, so degenerate embeddings rank last
/// instead of poisoning the sort with NaN.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> MatchingResult<f32> {
    if a.len() != b.len() {
        return Err(MatchingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / (norm_a * norm_b))
    }
}

/// Ranks candidates by cosine similarity to a reference embedding.
///
/// Pure and stateless; safe to share across request handlers.
#[derive(Debug, Clone)]
pub struct SimilarityRanker {
    limit: usize,
}

impl SimilarityRanker {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_MATCH_LIMIT,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            limit: config.match_limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Scores every candidate against `reference`, sorts descending, and
    /// truncates to the configured limit.
    ///
    /// The sort is stable: candidates with equal similarity keep their input
    /// order. A dimension mismatch on any candidate fails the whole call; a
    /// partial ranking computed over mixed dimensions would be silently
    /// wrong.
    pub fn rank<M>(
        &self,
        reference: &[f32],
        candidates: Vec<Candidate<M>>,
    ) -> MatchingResult<Vec<ScoredMatch<M>>> {
        debug!(
            num_candidates = candidates.len(),
            dim = reference.len(),
            "ranking candidates"
        );

        let mut scored: Vec<ScoredMatch<M>> = candidates
            .into_iter()
            .map(|candidate| {
                let similarity = cosine_similarity(reference, &candidate.vector)?;
                Ok(ScoredMatch {
                    metadata: candidate.metadata,
                    similarity,
                })
            })
            .collect::<MatchingResult<_>>()?;

        scored.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(Ordering::Equal));
        scored.truncate(self.limit);

        Ok(scored)
    }
}

impl Default for SimilarityRanker {
    fn default() -> Self {
        Self::new()
    }
}
