//! Property tests for the boundary-preferring text splitter.

use docrag::split_text;
use proptest::prelude::*;

/// Valid `(chunk_size, overlap)` pairs: positive size, overlap below it.
fn arb_params() -> impl Strategy<Value = (usize, usize)> {
    (2usize..64).prop_flat_map(|size| (Just(size), 0..size))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Dropping each chunk's leading overlap and concatenating the rest
    /// reproduces the input text exactly.
    #[test]
    fn unique_spans_reconstruct_the_input(
        (chunk_size, overlap) in arb_params(),
        text in r"[a-z .\n]{0,300}",
    ) {
        let chunks = split_text(&text, chunk_size, overlap);
        let mut rebuilt: String = chunks.first().cloned().unwrap_or_default();
        for chunk in chunks.iter().skip(1) {
            rebuilt.extend(chunk.chars().skip(overlap));
        }
        prop_assert_eq!(rebuilt, text);
    }

    /// No chunk exceeds the configured maximum, and none is empty.
    #[test]
    fn chunks_are_bounded_and_non_empty(
        (chunk_size, overlap) in arb_params(),
        text in r"[a-z .\n]{0,300}",
    ) {
        for chunk in split_text(&text, chunk_size, overlap) {
            let len = chunk.chars().count();
            prop_assert!(len > 0);
            prop_assert!(len <= chunk_size, "chunk of {len} chars exceeds {chunk_size}");
        }
    }

    /// Consecutive chunks share a character-identical overlap region.
    #[test]
    fn consecutive_chunks_share_overlap(
        (chunk_size, overlap) in arb_params(),
        text in r"[a-z .\n]{0,300}",
    ) {
        let chunks = split_text(&text, chunk_size, overlap);
        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].chars().collect();
            let next: Vec<char> = pair[1].chars().collect();
            prop_assert!(prev.len() > overlap);
            prop_assert!(next.len() >= overlap);
            prop_assert_eq!(&prev[prev.len() - overlap..], &next[..overlap]);
        }
    }

    /// Text no longer than the chunk size comes back as a single chunk.
    #[test]
    fn short_text_is_one_chunk(
        (chunk_size, overlap) in arb_params(),
        text in r"[a-z ]{1,40}",
    ) {
        prop_assume!(text.chars().count() <= chunk_size);
        let chunks = split_text(&text, chunk_size, overlap);
        prop_assert_eq!(chunks, vec![text]);
    }
}
