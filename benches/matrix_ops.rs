use circulant_inverse::{find_all_inverses, strassen_multiply, OffsetTriple, SquareMatrix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [8usize, 16, 32, 64] {
        let a = SquareMatrix::circulant(&OffsetTriple::new(0, 3, 5), size);
        let b = SquareMatrix::circulant(&OffsetTriple::new(1, 2, 7), size);

        group.bench_with_input(BenchmarkId::new("schoolbook", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&a).multiply(black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("strassen", size), &size, |bencher, _| {
            bencher.iter(|| strassen_multiply(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_search");
    group.sample_size(10);

    for size in [6usize, 8, 10] {
        group.bench_with_input(BenchmarkId::new("find_all", size), &size, |bencher, &size| {
            bencher.iter(|| find_all_inverses(black_box(size)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_search);
criterion_main!(benches);
