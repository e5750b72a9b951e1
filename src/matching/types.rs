use serde::Serialize;

/// An embedding under ranking, with caller metadata returned unchanged in
/// the output.
///
/// Ephemeral: built by the caller per ranking request.
#[derive(Debug, Clone)]
pub struct Candidate<M> {
    /// Embedding vector.
    pub vector: Vec<f32>,
    /// Opaque pass-through payload (product name, category, and so on).
    pub metadata: M,
}

impl<M> Candidate<M> {
    pub fn new(vector: Vec<f32>, metadata: M) -> Self {
        Self { vector, metadata }
    }
}

/// One row of ranked output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch<M> {
    /// The candidate's metadata, unchanged.
    pub metadata: M,
    /// Cosine similarity to the reference vector.
    pub similarity: f32,
}
