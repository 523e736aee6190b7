//! Test helpers for common test setup and utilities.
//!
//! Shared fixtures and checks used by unit tests, integration tests and
//! benchmarks.

use crate::model::Problem;
use crate::scenario::ScenarioParams;
use crate::simulator::Simulator;

/// Capacities `[2, 5, 10]` with a single pour of 4; ends at `[4, 7, 10]`.
pub fn staircase_problem() -> Problem {
    Problem::new(vec![2, 5, 10], vec![4])
}

/// Capacities `[5, 5]` with pours `[3, 10]`; ends at `[16, 5]`.
pub fn two_pour_problem() -> Problem {
    Problem::new(vec![5, 5], vec![3, 10])
}

/// A reproducible random problem of the given size.
pub fn seeded_problem(num_receivers: usize, num_pours: usize, seed: u64) -> Problem {
    ScenarioParams::default()
        .with_receivers(num_receivers)
        .with_pours(num_pours)
        .with_max_capacity(50)
        .with_max_pour(80)
        .with_seed(seed)
        .generate()
}

/// Run a problem to completion.
///
/// # Panics
///
/// Panics if the run overflows (test fixtures are kept small).
pub fn run_problem(problem: &Problem) -> Vec<u64> {
    let mut simulator = Simulator::new(problem.capacities.clone());
    simulator
        .run(&problem.pours)
        .expect("fixture problem should not overflow");
    simulator.into_capacities()
}
