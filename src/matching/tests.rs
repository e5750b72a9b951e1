use super::*;

fn named(name: &str, vector: &[f32]) -> Candidate<String> {
    Candidate::new(vector.to_vec(), name.to_string())
}

#[test]
fn test_cosine_identical_vectors() {
    let v = [1.0, 2.0, 3.0];
    let similarity = cosine_similarity(&v, &v).unwrap();
    assert!(
        (similarity - 1.0).abs() < 1e-6,
        "Identical vectors should have similarity ~1.0"
    );
}

#[test]
fn test_cosine_orthogonal_vectors() {
    let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    assert!(
        similarity.abs() < 1e-6,
        "Orthogonal vectors should have similarity ~0.0"
    );
}

#[test]
fn test_cosine_opposite_vectors() {
    let similarity = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
    assert!(
        (similarity + 1.0).abs() < 1e-6,
        "Opposite vectors should have similarity ~-1.0"
    );
}

#[test]
fn test_cosine_scaled_vectors() {
    let similarity = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
    assert!(
        (similarity - 1.0).abs() < 1e-6,
        "Scaled vectors should have similarity ~1.0"
    );
}

#[test]
fn test_cosine_stays_in_bounds() {
    let pairs: &[(&[f32], &[f32])] = &[
        (&[0.3, -0.7, 0.2], &[0.9, 0.1, -0.4]),
        (&[5.0, 5.0, 5.0], &[-1.0, 2.0, -3.0]),
        (&[0.001, 0.002], &[1000.0, -2000.0]),
    ];

    for (a, b) in pairs {
        let similarity = cosine_similarity(a, b).unwrap();
        assert!(
            (-1.0 - 1e-6..=1.0 + 1e-6).contains(&similarity),
            "similarity {similarity} out of bounds"
        );
    }
}

#[test]
fn test_cosine_zero_vector_is_zero_not_nan() {
    let similarity = cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(similarity, 0.0);
}

#[test]
fn test_cosine_empty_vectors() {
    let similarity = cosine_similarity(&[], &[]).unwrap();
    assert_eq!(similarity, 0.0, "Empty vectors have zero magnitude");
}

#[test]
fn test_cosine_dimension_mismatch() {
    let result = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(
        result,
        Err(MatchingError::DimensionMismatch {
            expected: 3,
            actual: 5,
        })
    );
}

#[test]
fn test_rank_orders_and_truncates() {
    // Angles from the reference chosen so similarities are ~1.0, ~0.707, ~0.0.
    let reference = [1.0, 0.0];
    let candidates = vec![
        named("orthogonal", &[0.0, 1.0]),
        named("aligned", &[2.0, 0.0]),
        named("diagonal", &[1.0, 1.0]),
    ];

    let ranked = SimilarityRanker::with_limit(2)
        .rank(&reference, candidates)
        .unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].metadata, "aligned");
    assert!((ranked[0].similarity - 1.0).abs() < 1e-6);
    assert_eq!(ranked[1].metadata, "diagonal");
    assert!((ranked[1].similarity - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
}

#[test]
fn test_rank_tie_break_preserves_input_order() {
    let reference = [1.0, 0.0];
    let candidates = vec![
        named("first", &[3.0, 0.0]),
        named("second", &[5.0, 0.0]),
        named("weaker", &[1.0, 1.0]),
    ];

    let ranked = SimilarityRanker::new().rank(&reference, candidates).unwrap();

    // "first" and "second" both score ~1.0; the stable sort keeps them in
    // input order.
    assert_eq!(ranked[0].metadata, "first");
    assert_eq!(ranked[1].metadata, "second");
    assert_eq!(ranked[2].metadata, "weaker");
}

#[test]
fn test_rank_returns_all_when_limit_exceeds_candidates() {
    let reference = [1.0, 0.0];
    let candidates = vec![named("a", &[1.0, 0.0]), named("b", &[0.0, 1.0])];

    let ranked = SimilarityRanker::with_limit(10)
        .rank(&reference, candidates)
        .unwrap();

    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_rank_empty_candidates() {
    let ranked = SimilarityRanker::new()
        .rank::<String>(&[1.0, 0.0], vec![])
        .unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_rank_fails_whole_call_on_dimension_mismatch() {
    let reference = [1.0, 0.0];
    let candidates = vec![
        named("fine", &[0.5, 0.5]),
        named("corrupted", &[0.5, 0.5, 0.5]),
    ];

    let result = SimilarityRanker::new().rank(&reference, candidates);
    assert_eq!(
        result,
        Err(MatchingError::DimensionMismatch {
            expected: 2,
            actual: 3,
        })
    );
}

#[test]
fn test_rank_zero_reference_scores_everything_zero() {
    let reference = [0.0, 0.0];
    let candidates = vec![named("a", &[1.0, 2.0]), named("b", &[3.0, 4.0])];

    let ranked = SimilarityRanker::new().rank(&reference, candidates).unwrap();

    assert!(ranked.iter().all(|m| m.similarity == 0.0));
    // Ties everywhere, so input order survives.
    assert_eq!(ranked[0].metadata, "a");
    assert_eq!(ranked[1].metadata, "b");
}

#[test]
fn test_scored_match_serializes_metadata_unchanged() {
    let ranked = SimilarityRanker::new()
        .rank(
            &[1.0, 0.0],
            vec![Candidate::new(
                vec![1.0, 0.0],
                serde_json::json!({"name": "industrial valve", "category": "plumbing"}),
            )],
        )
        .unwrap();

    let rendered = serde_json::to_value(&ranked[0]).unwrap();
    assert_eq!(rendered["metadata"]["name"], "industrial valve");
    assert_eq!(rendered["metadata"]["category"], "plumbing");
    assert_eq!(rendered["similarity"], 1.0);
}
