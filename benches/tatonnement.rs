use criterion::{black_box, criterion_group, criterion_main, Criterion};
use walras::{Economy, SweepOptions, TatonnementOptions};

fn bench_market_clearing(c: &mut Criterion) {
    let economy = Economy::default();
    let options = TatonnementOptions::default();
    c.bench_function("market_clearing_price", |b| {
        b.iter(|| economy.market_clearing_price(black_box(1.5), &options))
    });
}

fn bench_sweeps(c: &mut Criterion) {
    let economy = Economy::default();
    let options = SweepOptions::default();
    c.bench_function("pareto_improvements", |b| {
        b.iter(|| economy.pareto_improvements(black_box(&options)))
    });
    c.bench_function("excess_demand_curve", |b| {
        b.iter(|| economy.excess_demand_curve(black_box(&options)))
    });
}

criterion_group!(benches, bench_market_clearing, bench_sweeps);
criterion_main!(benches);
