//! Benchmarks for grid rebuilds and hover painting on the headless surface.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixelpad::app::{AppState, Event, Session};
use pixelpad::color::OsRandom;
use pixelpad::config::PadOptions;
use pixelpad::controls::MemoryControls;
use pixelpad::grid::PaintMode;
use pixelpad::render::{MemorySurface, Surface};

/// Rebuild at a few grid sizes up to the 100×100 maximum
fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for side in [16u32, 50, 100] {
        let total = side * side;
        group.throughput(Throughput::Elements(u64::from(total)));
        group.bench_with_input(BenchmarkId::from_parameter(side), &total, |b, &total| {
            let mut surface = MemorySurface::new();
            b.iter(|| {
                surface
                    .rebuild(black_box(total), PaintMode::Default)
                    .expect("rebuild");
            });
        });
    }
    group.finish();
}

/// Random-mode hover across a full 100×100 grid
fn bench_random_hover(c: &mut Criterion) {
    let options = PadOptions {
        default_size: 100,
        ..PadOptions::default()
    };
    let state = AppState::new(options, 1000.0);
    let mut session = Session::new(state, MemorySurface::new(), MemoryControls::new(), OsRandom);
    session.dispatch(Event::Startup).expect("startup");
    session.dispatch(Event::RandomMode).expect("random mode");
    session
        .dispatch(Event::KeyPressed("d".to_string()))
        .expect("toggle");

    c.bench_function("random_hover_sweep", |b| {
        b.iter(|| {
            for square in 0..10_000 {
                session
                    .dispatch(Event::Hover {
                        square,
                        bound_mode: PaintMode::Random,
                    })
                    .expect("hover");
            }
        });
    });
}

criterion_group!(benches, bench_rebuild, bench_random_hover);
criterion_main!(benches);
