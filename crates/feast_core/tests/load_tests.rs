//! Load tests for feast_core: validate throughput on large problems.

use feast_core::scenario::ScenarioParams;
use feast_core::simulator::Simulator;
use std::time::Instant;

#[test]
#[ignore] // Only run explicitly: cargo test --package feast_core --test load_tests -- --ignored
fn test_large_problem() {
    let problem = ScenarioParams::default()
        .with_receivers(100_000)
        .with_pours(100_000)
        .with_max_capacity(1_000_000_000)
        .with_max_pour(1_000_000_000)
        .with_seed(42)
        .generate();

    let start = Instant::now();
    let mut simulator = Simulator::new(problem.capacities.clone());
    simulator.run(&problem.pours).expect("bounded run");
    let duration = start.elapsed();

    let telemetry = simulator.telemetry();
    println!(
        "Large problem: {} pours, {} receiver visits in {:.2}s",
        telemetry.pours_processed,
        telemetry.receivers_visited,
        duration.as_secs_f64()
    );
    assert_eq!(telemetry.pours_processed, 100_000);
    assert!(telemetry.total_absorbed <= telemetry.total_poured);
}

#[test]
#[ignore]
fn test_many_small_pours() {
    let problem = ScenarioParams::default()
        .with_receivers(1_000)
        .with_pours(200_000)
        .with_max_capacity(10)
        .with_max_pour(10)
        .with_seed(7)
        .generate();

    let start = Instant::now();
    let mut simulator = Simulator::new(problem.capacities.clone());
    simulator.run(&problem.pours).expect("run");
    let pours_per_sec = problem.num_pours() as f64 / start.elapsed().as_secs_f64();
    println!("Many small pours: {pours_per_sec:.0} pours/sec");

    assert!(
        pours_per_sec > 10_000.0,
        "Should process >10000 pours/sec, got {:.0}",
        pours_per_sec
    );
}
