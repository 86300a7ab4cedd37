//! Property tests for flat index search ordering.

use std::collections::HashSet;

use finbuddy_rag::index::FlatIndex;
use proptest::prelude::*;

const DIM: usize = 8;

fn arb_vector(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim)
}

/// For any vector set and any `k`, search returns `min(k, n)` results in
/// non-decreasing distance order, with distinct positions inside `[0, n)`.
mod prop_search_ordering {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn results_are_bounded_sorted_and_in_range(
            vectors in proptest::collection::vec(arb_vector(DIM), 0..20),
            query in arb_vector(DIM),
            k in 0usize..25,
        ) {
            let count = vectors.len();
            let index = FlatIndex::build(vectors).unwrap();
            let results = index.search(&query, k);

            prop_assert_eq!(results.len(), k.min(count));

            for window in results.windows(2) {
                prop_assert!(
                    window[0].distance <= window[1].distance,
                    "results not in ascending order: {} > {}",
                    window[0].distance,
                    window[1].distance,
                );
            }

            let positions: HashSet<usize> = results.iter().map(|n| n.position).collect();
            prop_assert_eq!(positions.len(), results.len(), "duplicate positions");
            for neighbor in &results {
                prop_assert!(neighbor.position < count);
            }
        }

        #[test]
        fn rebuilding_and_requerying_is_deterministic(
            vectors in proptest::collection::vec(arb_vector(DIM), 1..20),
            query in arb_vector(DIM),
            k in 1usize..25,
        ) {
            let first = FlatIndex::build(vectors.clone()).unwrap().search(&query, k);
            let second = FlatIndex::build(vectors).unwrap().search(&query, k);
            prop_assert_eq!(first, second);
        }
    }
}

#[test]
fn empty_index_returns_no_results() {
    let index = FlatIndex::build(Vec::new()).unwrap();
    assert!(index.is_empty());
    assert!(index.search(&[0.0, 0.0], 5).is_empty());
}

#[test]
fn k_is_clamped_to_the_vector_count() {
    let index = FlatIndex::build(vec![vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
    assert_eq!(index.search(&[0.0, 0.0], 10).len(), 2);
    assert!(index.search(&[0.0, 0.0], 0).is_empty());
}

#[test]
fn distances_are_squared_euclidean() {
    let index =
        FlatIndex::build(vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![1.0, 0.0]]).unwrap();
    let results = index.search(&[0.0, 0.0], 3);

    let positions: Vec<usize> = results.iter().map(|n| n.position).collect();
    assert_eq!(positions, [0, 2, 1]);
    let distances: Vec<f32> = results.iter().map(|n| n.distance).collect();
    assert_eq!(distances, [0.0, 1.0, 25.0]);
}

#[test]
fn ties_break_to_the_lowest_position() {
    let index =
        FlatIndex::build(vec![vec![0.0, 0.0], vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();
    let results = index.search(&[0.0, 0.0], 3);
    let positions: Vec<usize> = results.iter().map(|n| n.position).collect();
    assert_eq!(positions, [0, 1, 2]);
}

#[test]
fn mixed_dimensions_fail_the_build() {
    let err = FlatIndex::build(vec![vec![0.0, 0.0], vec![1.0]]).unwrap_err();
    assert!(err.to_string().contains("dimension"));
}

#[test]
fn wrong_dimension_query_returns_no_results() {
    let index = FlatIndex::build(vec![vec![0.0, 0.0]]).unwrap();
    assert!(index.search(&[0.0, 0.0, 0.0], 1).is_empty());
}
