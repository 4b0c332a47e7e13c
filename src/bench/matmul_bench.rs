//! Criterion comparison of the naive and blocked kernels.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matbench::{matmul_blocked_tiled, matmul_naive_ikj, random_matrix};

fn bench_naive_vs_blocked(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for &size in &[64usize, 128, 256] {
        let a = random_matrix(size, 42);
        let b = random_matrix(size, 43);
        let mut out = vec![0.0; size * size];
        group.throughput(Throughput::Elements(2 * (size as u64).pow(3)));

        group.bench_with_input(BenchmarkId::new("naive_ikj", size), &size, |bench, &n| {
            bench.iter(|| {
                out.fill(0.0);
                matmul_naive_ikj(black_box(a.as_slice()), black_box(b.as_slice()), &mut out, n);
            })
        });

        for &block in &[16usize, 32, 64] {
            group.bench_with_input(
                BenchmarkId::new(format!("blocked_{}", block), size),
                &size,
                |bench, &n| {
                    bench.iter(|| {
                        out.fill(0.0);
                        matmul_blocked_tiled(
                            black_box(a.as_slice()),
                            black_box(b.as_slice()),
                            &mut out,
                            n,
                            block,
                        );
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_naive_vs_blocked);
criterion_main!(benches);
