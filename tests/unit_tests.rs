//! Integration tests for the public search API

use circulant_inverse::combinations::binomial;
use circulant_inverse::{
    enumerate_triples, find_all_inverses, find_general_inverses, is_inverse_pair, load_results,
    run_batch, strassen_multiply, BatchConfig, InverseSearch, MemorySink, NullObserver,
    OffsetTriple, SquareMatrix, Support,
};
use tempfile::TempDir;

fn t(a: usize, b: usize, c: usize) -> OffsetTriple {
    OffsetTriple::new(a, b, c)
}

#[test]
fn test_circulant_first_row_size_four() {
    let m = SquareMatrix::circulant(&t(0, 1, 2), 4);
    assert_eq!(m.row(0), &[1, 1, 1, 0]);
}

#[test]
fn test_enumeration_matches_binomial() {
    for n in 4..=16 {
        assert_eq!(enumerate_triples(n).len(), binomial(n, 3));
    }
}

#[test]
fn test_size_five_full_mapping() {
    let expected = [
        (t(0, 1, 2), t(1, 2, 4)),
        (t(0, 1, 3), t(1, 2, 3)),
        (t(0, 1, 4), t(0, 2, 3)),
        (t(0, 2, 3), t(0, 1, 4)),
        (t(0, 2, 4), t(2, 3, 4)),
        (t(0, 3, 4), t(1, 3, 4)),
        (t(1, 2, 3), t(0, 1, 3)),
        (t(1, 2, 4), t(0, 1, 2)),
        (t(1, 3, 4), t(0, 3, 4)),
        (t(2, 3, 4), t(0, 2, 4)),
    ];
    let map = find_all_inverses(5);
    let found: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(found, expected);
}

#[test]
fn test_counts_by_size() {
    let counts: Vec<usize> = (4..=10).map(|n| find_all_inverses(n).len()).collect();
    assert_eq!(counts, vec![4, 10, 12, 0, 24, 0, 60]);
}

#[test]
fn test_inverse_relation_is_symmetric() {
    let map = find_all_inverses(8);
    for (k, v) in &map {
        // Circulants commute, so the partner is always inverted back.
        assert_eq!(map.get(v), Some(k), "{k} -> {v}");
    }
}

#[test]
fn test_search_is_deterministic() {
    assert_eq!(find_all_inverses(6), find_all_inverses(6));
}

#[test]
fn test_find_inverse_for_single_generator() {
    let mut search = InverseSearch::new(10);
    let inverse = search.find_inverse(&t(0, 2, 4)).unwrap();
    assert_eq!(inverse, t(2, 4, 8));
    assert!(is_inverse_pair(&t(0, 2, 4), &inverse, 10));
}

#[test]
fn test_strassen_cross_validation() {
    let a = SquareMatrix::circulant(&t(15, 28, 31), 32);
    let b = SquareMatrix::circulant(&t(4, 7, 23), 32);
    assert_eq!(strassen_multiply(&a, &b), a.multiply(&b));
}

#[test]
fn test_empty_size_still_written() {
    let dir = TempDir::new().unwrap();
    let config = BatchConfig {
        start: 7,
        stop: 8,
        output_dir: dir.path().to_path_buf(),
        ..BatchConfig::default()
    };
    let mut sink = config.sink();
    let report = run_batch(&config, &mut sink, &mut NullObserver).unwrap();
    assert!(report.is_success());

    let loaded = load_results(dir.path().join("7.json")).unwrap();
    assert_eq!(loaded.size, 0);
    assert!(loaded.results.is_empty());
}

#[test]
fn test_written_files_round_trip_through_verification() {
    let dir = TempDir::new().unwrap();
    let config = BatchConfig {
        start: 4,
        stop: 7,
        output_dir: dir.path().to_path_buf(),
        ..BatchConfig::default()
    };
    let mut sink = config.sink();
    run_batch(&config, &mut sink, &mut NullObserver).unwrap();

    for size in config.sizes() {
        let loaded = load_results(sink.path_for(size)).unwrap();
        assert_eq!(loaded.size, loaded.results.len());
        for record in &loaded.results {
            assert!(is_inverse_pair(&record.key, &record.value, size));
        }
    }
}

#[test]
fn test_memory_sink_preserves_discovery_order() {
    let config = BatchConfig {
        start: 4,
        stop: 5,
        ..BatchConfig::default()
    };
    let mut sink = MemorySink::new();
    run_batch(&config, &mut sink, &mut NullObserver).unwrap();
    let keys: Vec<&str> = sink.get(4).unwrap().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["0, 1, 2", "0, 1, 3", "0, 2, 3", "1, 2, 3"]);
}

#[test]
fn test_general_inverses_exist_where_weight_three_ones_do_not() {
    let generator = t(0, 1, 2);
    let m = SquareMatrix::circulant(&generator, 7);
    assert!(find_all_inverses(7).is_empty());

    let inverse = m.inverse_mod2().unwrap();
    let (map, _) = find_general_inverses(7);
    assert_eq!(map.get(&generator), Some(&Support::new(inverse.row_support(0))));
    assert_eq!(
        m.multiply(&inverse).reduce_mod(2),
        SquareMatrix::identity(7)
    );
}

#[test]
fn test_general_support_agrees_with_weight_three_search() {
    for size in [4, 5, 6, 8, 10] {
        let (general, _) = find_general_inverses(size);
        let weight3 = find_all_inverses(size);
        for (k, v) in &weight3 {
            assert_eq!(general.get(k).map(Support::indices), Some(&v.as_array()[..]));
        }
        // every generator with a weight-3 inverse is invertible in general
        assert!(general.len() >= weight3.len());
    }
}

#[cfg(feature = "exhaustive")]
#[test]
fn test_exhaustive_pairs_verify_up_to_sixteen() {
    for size in 11..=16 {
        for (k, v) in &find_all_inverses(size) {
            assert!(is_inverse_pair(k, v, size));
        }
    }
}
