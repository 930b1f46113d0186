//! Performance benchmarks for the Premium Computation Engine.
//!
//! The engine sits behind an interactive form, so a computation should cost
//! microseconds: a bracket resolution well under 1μs and a full embedded
//! computation under 10μs. The rate service round trip adds router and
//! serialization overhead on top.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use premium_engine::api::{AppState, create_router};
use premium_engine::calculation::PremiumEngine;
use premium_engine::config::ConfigLoader;
use premium_engine::table::{EmbeddedRateTable, RemoteRateTable};

fn embedded_engine() -> PremiumEngine<EmbeddedRateTable> {
    let config = ConfigLoader::embedded().expect("embedded schedule should load");
    let reference_date = config.reference_date();
    PremiumEngine::new(config.into_table(), reference_date)
}

fn remote_engine() -> PremiumEngine<RemoteRateTable> {
    let config = ConfigLoader::embedded().expect("embedded schedule should load");
    let reference_date = config.reference_date();
    let remote = RemoteRateTable::new(create_router(AppState::new(config.into_table())));
    PremiumEngine::new(remote, reference_date)
}

fn bench_bracket_find(c: &mut Criterion) {
    let table = ConfigLoader::embedded()
        .expect("embedded schedule should load")
        .into_table();

    c.bench_function("bracket_find", |b| {
        b.iter(|| table.find(black_box(300000)).expect("bracket should exist"))
    });
}

fn bench_embedded_compute(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime should start");
    let engine = embedded_engine();

    c.bench_function("embedded_compute", |b| {
        b.to_async(&rt).iter(|| async {
            engine
                .compute(black_box("300000"), black_box("1980-01-01"))
                .await
                .expect("computation should succeed")
        })
    });
}

fn bench_remote_compute(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime should start");
    let engine = remote_engine();

    c.bench_function("remote_compute", |b| {
        b.to_async(&rt).iter(|| async {
            engine
                .compute(black_box("300000"), black_box("1980-01-01"))
                .await
                .expect("computation should succeed")
        })
    });
}

criterion_group!(
    benches,
    bench_bracket_find,
    bench_embedded_compute,
    bench_remote_compute
);
criterion_main!(benches);
