use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use optpair::{OptionPair, Schedule};
use rand::{Rng, SeedableRng};

/// Generates `count` pairs with each slot present about half the time
fn random_pairs(count: usize) -> Vec<OptionPair<u32, u32>> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    (0..count)
        .map(|_| {
            let left = rng.gen_bool(0.5).then(|| rng.gen());
            let right = rng.gen_bool(0.5).then(|| rng.gen());
            OptionPair::of(left, right)
        })
        .collect()
}

fn bench_reduce(c: &mut Criterion) {
    let pairs = random_pairs(1024);

    c.bench_function("reduce", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter_map(|p| p.reduce(u32::wrapping_add))
                .fold(0u32, u32::wrapping_add)
        })
    });
}

fn bench_combine(c: &mut Criterion) {
    // configuration of criterion
    let mut bench_group = c.benchmark_group("then_combine");
    // filter noise more noise
    bench_group.noise_threshold(0.05);

    let pairs = random_pairs(64);

    for schedule in [Schedule::Inline, Schedule::Background] {
        let name = format!("{schedule:?}");
        bench_group.bench_with_input(BenchmarkId::from_parameter(name), &pairs, |b, pairs| {
            b.iter(|| {
                pairs
                    .iter()
                    .map(|p| p.then_combine_on(schedule, u32::wrapping_add))
                    .collect::<Vec<_>>()
                    .into_iter()
                    .filter_map(|task| task.wait().ok().flatten())
                    .count()
            })
        });
    }

    bench_group.finish();
}

criterion_group! {benches, bench_reduce, bench_combine}
criterion_main!(benches);
