use feast_core::model::Problem;
use feast_core::simulator::Simulator;
use feast_core::telemetry::PourRecord;
use feast_core::test_helpers::seeded_problem;

/// Seeds shared by the property tests so failures are reproducible.
pub const PROPERTY_SEEDS: [u64; 8] = [1, 2, 3, 5, 8, 13, 21, 42];

/// Problems of mixed shapes, including empty lines and empty pour lists.
pub fn property_problems() -> Vec<Problem> {
    let mut problems: Vec<Problem> = PROPERTY_SEEDS
        .iter()
        .map(|&seed| seeded_problem(12, 40, seed))
        .collect();
    problems.push(seeded_problem(0, 10, 99));
    problems.push(seeded_problem(10, 0, 99));
    problems.push(seeded_problem(1, 25, 7));
    problems
}

/// Capacities before and after every pour, paired with the pour record.
pub struct PourStep {
    pub before: Vec<u64>,
    pub after: Vec<u64>,
    pub record: PourRecord,
}

/// Replay a problem one pour at a time, keeping every intermediate state.
pub fn replay(problem: &Problem) -> Vec<PourStep> {
    let mut simulator = Simulator::new(problem.capacities.clone());
    problem
        .pours
        .iter()
        .map(|&amount| {
            let before = simulator.capacities();
            let record = simulator.apply_pour(amount).expect("no overflow");
            PourStep {
                before,
                after: simulator.capacities(),
                record,
            }
        })
        .collect()
}
