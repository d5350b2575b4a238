use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::core::{build_for_grid, Catalog, GameConfig, NullSink, Session, SessionSnapshot};
use memory_match::types::GridSize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_deck_build(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let mut rng = SmallRng::seed_from_u64(12345);

    c.bench_function("build_deck_10x10", |b| {
        b.iter(|| {
            let deck = build_for_grid(black_box(GridSize::Ten), &catalog, &mut rng);
            black_box(deck);
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let now = Instant::now();
    let mut session = Session::new(GameConfig::new(), 12345, Box::new(NullSink), now);
    session.start(now);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.tick(black_box(Instant::now()));
        })
    });
}

fn bench_flip_cycle(c: &mut Criterion) {
    let now = Instant::now();
    let mut session = Session::new(GameConfig::new(), 12345, Box::new(NullSink), now);
    session.start(now);

    c.bench_function("flip_resolve_reset", |b| {
        b.iter(|| {
            let now = Instant::now();
            session.request_flip(0, now);
            session.request_flip(1, now);
            session.tick(now + session.config().resolution_delay());
            session.reset(now);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let now = Instant::now();
    let mut session = Session::new(GameConfig::new(), 12345, Box::new(NullSink), now);
    session.start(now);
    let mut snap = SessionSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_deck_build,
    bench_tick,
    bench_flip_cycle,
    bench_snapshot
);
criterion_main!(benches);
