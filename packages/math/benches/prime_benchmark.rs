use criterion::{criterion_group, criterion_main, Criterion};
use math::{primes, primes_below};

fn run_all_benchmarks(c: &mut Criterion) {
    let mut group_10k = c.benchmark_group("primes_below_n_10000");
    group_10k.bench_function("sieve", |b| b.iter(|| primes_below(10_000)));
    group_10k.bench_function("trial_division", |b| {
        b.iter(|| primes().take_while(|&p| p < 10_000).count())
    });
    group_10k.finish();

    let mut group_1m = c.benchmark_group("primes_below_n_1000000");
    group_1m.sample_size(10);
    group_1m.bench_function("sieve", |b| b.iter(|| primes_below(1_000_000)));
    group_1m.bench_function("trial_division", |b| {
        b.iter(|| primes().take_while(|&p| p < 1_000_000).count())
    });
    group_1m.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
