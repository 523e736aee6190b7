//! Performance benchmarks for feast_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use feast_core::input::parse_problem;
use feast_core::output::format_problem;
use feast_core::scenario::ScenarioParams;
use feast_core::simulator::Simulator;

fn bench_distribution_run(c: &mut Criterion) {
    let scenarios = vec![
        ("small", 100, 100),
        ("medium", 1_000, 10_000),
        ("large", 10_000, 100_000),
    ];

    let mut group = c.benchmark_group("distribution_run");
    for (name, receivers, pours) in scenarios {
        let problem = ScenarioParams::default()
            .with_receivers(receivers)
            .with_pours(pours)
            .with_max_capacity(1_000_000)
            .with_max_pour(1_000_000)
            .with_seed(42)
            .generate();
        group.bench_with_input(BenchmarkId::from_parameter(name), &problem, |b, problem| {
            b.iter(|| {
                let mut simulator = Simulator::new(problem.capacities.clone());
                simulator.run(&problem.pours).expect("bounded run");
                black_box(simulator.into_capacities())
            });
        });
    }
    group.finish();
}

fn bench_wide_scan(c: &mut Criterion) {
    // All-zero receivers never exhaust a pour, so every pour scans the whole line.
    let capacities = vec![0u64; 10_000];
    let pours = vec![1u64; 1_000];

    c.bench_function("wide_scan_no_exit", |b| {
        b.iter(|| {
            let mut simulator = Simulator::new(capacities.clone());
            simulator.run(&pours).expect("zero line");
            black_box(simulator.telemetry().receivers_visited)
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let problem = ScenarioParams::default()
        .with_receivers(50_000)
        .with_pours(50_000)
        .with_seed(3)
        .generate();
    let text = format_problem(&problem);

    c.bench_function("parse_problem_100k_values", |b| {
        b.iter(|| {
            let problem = parse_problem(black_box(&text)).expect("valid text");
            black_box(problem)
        });
    });
}

criterion_group!(
    benches,
    bench_distribution_run,
    bench_wide_scan,
    bench_parse
);
criterion_main!(benches);
