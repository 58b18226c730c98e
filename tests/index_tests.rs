//! Property tests for vector index search ordering and bounds.

use docrag::{Chunk, VectorIndex};
use proptest::prelude::*;

const DIM: usize = 16;

/// Generate a non-zero L2-normalized embedding of the given dimension.
fn arb_normalized_embedding(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim).prop_filter_map("non-zero embedding", |mut v| {
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm < 1e-8 {
            return None;
        }
        for val in &mut v {
            *val /= norm;
        }
        Some(v)
    })
}

/// Generate a chunk with a normalized embedding.
fn arb_entry(dim: usize) -> impl Strategy<Value = (Chunk, Vec<f32>)> {
    ("[a-z ]{5,30}", arb_normalized_embedding(dim)).prop_map(|(text, embedding)| {
        (Chunk { text, source: "doc.pdf".to_string(), seq: 0 }, embedding)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Search over N chunks returns at most `min(k, N)` results, ordered by
    /// non-increasing similarity.
    #[test]
    fn results_ordered_descending_and_bounded_by_k(
        entries in proptest::collection::vec(arb_entry(DIM), 0..20),
        query in arb_normalized_embedding(DIM),
        k in 1usize..25,
    ) {
        let count = entries.len();
        let index = VectorIndex::new(entries);
        let results = index.search(&query, k);

        prop_assert!(results.len() <= k);
        prop_assert!(results.len() <= count);
        prop_assert_eq!(results.len(), k.min(count));

        for window in results.windows(2) {
            prop_assert!(
                window[0].score >= window[1].score,
                "results not in descending order: {} < {}",
                window[0].score,
                window[1].score,
            );
        }
    }
}

#[test]
fn search_on_empty_index_is_empty_not_an_error() {
    let index = VectorIndex::new(Vec::new());
    assert!(index.search(&[1.0; DIM], 5).is_empty());
}

#[test]
fn two_chunks_and_k_five_returns_exactly_two() {
    let index = VectorIndex::new(vec![
        (Chunk { text: "a".into(), source: "x.pdf".into(), seq: 0 }, vec![1.0, 0.0]),
        (Chunk { text: "b".into(), source: "x.pdf".into(), seq: 1 }, vec![0.5, 0.5]),
    ]);
    assert_eq!(index.search(&[1.0, 0.0], 5).len(), 2);
}
