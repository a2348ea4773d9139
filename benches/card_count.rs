use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cluster_layout::{
    fit_min_width, unit_card_width, ClusterConfig, Dp, FixedByGridLayoutPolicy,
    HorizontalLayoutPolicy,
};

fn bench_calculator(c: &mut Criterion) {
    c.bench_function("unit_card_width", |b| {
        b.iter(|| unit_card_width(black_box(112), black_box(379), black_box(0.1)))
    });

    c.bench_function("fit_min_width", |b| {
        b.iter(|| fit_min_width(black_box(100), black_box(1000), black_box(10)))
    });
}

fn bench_policy(c: &mut Criterion) {
    let policy = FixedByGridLayoutPolicy::new(ClusterConfig::default()).expect("valid config");
    c.bench_function("fixed_by_grid_child_width", |b| {
        b.iter(|| policy.child_width(black_box(Dp(411.0))))
    });
}

criterion_group!(benches, bench_calculator, bench_policy);
criterion_main!(benches);
