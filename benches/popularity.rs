//! Popularity ranking and batch runner throughput.
//!
//! Run with: `cargo bench --bench popularity`

use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use topnkit::rec::{PopularityRecommender, PreferenceData, RunnerBuilder, TsvFormat};
use topnkit::traits::Recommender;

const USERS: u32 = 2_000;
const ITEMS: u32 = 20_000;
const INTERACTIONS: usize = 200_000;

fn skewed_data(seed: u64) -> PreferenceData<u32, u32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    PreferenceData::from_pairs((0..INTERACTIONS).map(|_| {
        let user = rng.random_range(0..USERS);
        // Product of two uniforms concentrates mass on low item ids.
        let item = (rng.random::<f64>() * rng.random::<f64>() * f64::from(ITEMS)) as u32;
        (user, item)
    }))
}

fn bench_build(c: &mut Criterion) {
    let data = skewed_data(42);
    c.bench_function("popularity_build", |b| {
        b.iter(|| black_box(PopularityRecommender::new(&data)))
    });
}

fn bench_candidates(c: &mut Criterion) {
    let data = skewed_data(42);
    let rec = PopularityRecommender::new(&data);
    let candidates: Vec<u32> = (0..ITEMS).collect();

    c.bench_function("popularity_candidates_top20", |b| {
        b.iter(|| black_box(rec.recommend_candidates(&0u32, &candidates, 20)))
    });
}

fn bench_runner(c: &mut Criterion) {
    let data = skewed_data(42);
    let rec = PopularityRecommender::new(&data);
    let items = data.items().to_vec();
    let runner = RunnerBuilder::new().max_length(10).build(
        data.users().iter().copied().take(200),
        TsvFormat::new(),
        |user: &u32| -> Vec<u32> {
            items
                .iter()
                .copied()
                .filter(|item| !data.has_interacted(user, item))
                .collect()
        },
    );

    c.bench_function("runner_200_users_unseen", |b| {
        b.iter(|| black_box(runner.run(&rec, io::sink()).unwrap()))
    });
}

criterion_group!(benches, bench_build, bench_candidates, bench_runner);
criterion_main!(benches);
