use aprender_collab::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Synthetic 1-5 star ratings: each user rates `per_user` of `n_items` items.
fn generate_ratings(n_users: i64, n_items: i64, per_user: i64) -> RatingStore {
    let mut store = RatingStore::new();
    let mut state: u64 = 42;
    for user in 0..n_users {
        for _ in 0..per_user {
            // Simple LCG for deterministic "random" values
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let item = ((state >> 33) % n_items as u64) as i64;
            let stars = 1 + ((state >> 13) % 5) as i64;
            store.add_rating(user, item, stars as f32);
        }
    }
    store
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("collab_normalize");

    for size in [100, 1_000, 10_000].iter() {
        let store = generate_ratings(*size, 2_000, 40);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut store = store.clone();
                store.normalize_all_users();
                store
            });
        });
    }

    group.finish();
}

fn bench_ranked_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("collab_ranked_neighbors");

    for size in [100, 1_000, 10_000].iter() {
        let mut store = generate_ratings(*size, 2_000, 40);
        store.normalize_all_users();
        let ranker = NeighborRanker::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| ranker.ranked_neighbors(&store, black_box(0)));
        });
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("collab_recommend");
    group.sample_size(50);

    for size in [100, 1_000, 10_000].iter() {
        let mut store = generate_ratings(*size, 500, 40);
        store.normalize_all_users();
        let recommender = Recommender::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| recommender.recommend(&store, black_box(0), black_box(10)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_ranked_neighbors, bench_recommend);
criterion_main!(benches);
