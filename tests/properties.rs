//! Property tests for the matrix primitives and the search

use circulant_inverse::combinations::{binomial, combinations};
use circulant_inverse::{
    enumerate_triples, is_inverse_pair, strassen_multiply, InverseSearch, OffsetTriple,
    SquareMatrix,
};
use proptest::prelude::*;

/// A size together with an in-range triple of distinct offsets.
fn sized_triple() -> impl Strategy<Value = (usize, OffsetTriple)> {
    (4usize..24).prop_flat_map(|n| {
        (Just(n), 0..n, 0..n, 0..n)
            .prop_filter("offsets must be distinct", |(_, a, b, c)| a != b && b != c && a != c)
            .prop_map(|(n, a, b, c)| (n, OffsetTriple::new(a, b, c)))
    })
}

proptest! {
    #[test]
    fn enumeration_is_complete_and_ascending(n in 0usize..20) {
        let triples = enumerate_triples(n);
        prop_assert_eq!(triples.len(), binomial(n, 3));
        for pair in triples.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for t in &triples {
            prop_assert!(t.fits(n));
        }
    }

    #[test]
    fn combinations_have_k_elements(n in 0usize..10, k in 0usize..5) {
        for c in combinations(n, k) {
            prop_assert_eq!(c.len(), k);
            prop_assert!(c.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn circulant_has_three_ones_per_row((n, t) in sized_triple()) {
        let m = SquareMatrix::circulant(&t, n);
        prop_assert!(m.ones_per_row().iter().all(|&k| k == 3));
        let first = m.row(0).to_vec();
        for i in 1..n {
            let mut rotated = first.clone();
            rotated.rotate_right(i);
            prop_assert_eq!(m.row(i), rotated.as_slice());
        }
    }

    #[test]
    fn circulants_commute((n, t) in sized_triple(), seed in any::<u64>()) {
        let all = enumerate_triples(n);
        let u = all[(seed as usize) % all.len()];
        let a = SquareMatrix::circulant(&t, n);
        let b = SquareMatrix::circulant(&u, n);
        prop_assert_eq!(a.multiply(&b), b.multiply(&a));
    }

    #[test]
    fn strassen_agrees_with_schoolbook(
        n in 1usize..13,
        entries in prop::collection::vec(-5i64..5, 2 * 12 * 12),
    ) {
        let a = SquareMatrix::from_rows(n, entries[..n * n].to_vec());
        let b = SquareMatrix::from_rows(n, entries[n * n..2 * n * n].to_vec());
        prop_assert_eq!(strassen_multiply(&a, &b), a.multiply(&b));
    }

    #[test]
    fn triple_text_round_trips((_, t) in sized_triple()) {
        let parsed: OffsetTriple = t.to_string().parse().unwrap();
        prop_assert_eq!(parsed, t);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn found_inverse_verifies((n, t) in sized_triple().prop_filter("keep it quick", |(n, _)| *n <= 12)) {
        let mut search = InverseSearch::new(n);
        if let Some(u) = search.find_inverse(&t) {
            prop_assert!(is_inverse_pair(&t, &u, n));
            prop_assert!(is_inverse_pair(&u, &t, n));
            let mut back = InverseSearch::new(n);
            prop_assert_eq!(back.find_inverse(&u), Some(t));
        }
    }
}
