//! Metrics extraction from finished runs.

use feast_core::telemetry::SimTelemetry;
use serde::{Deserialize, Serialize};

use crate::parameters::ParameterSet;

/// Aggregated metrics from a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub experiment_id: String,
    pub run_id: usize,
    pub seed: u64,
    pub num_receivers: usize,
    pub num_pours: usize,
    /// Sum of all pour amounts.
    pub total_poured: u64,
    /// Sum of what receivers took across all pours.
    pub total_absorbed: u64,
    /// total_absorbed / total_poured (0 when nothing was poured).
    pub absorption_rate: f64,
    /// Pours that were used up before reaching the end of the line.
    pub exhausted_pours: usize,
    /// Average number of receivers scanned per pour.
    pub mean_receivers_visited: f64,
    /// Sum of final capacities (saturating).
    pub final_capacity_sum: u64,
    pub final_capacity_max: u64,
}

/// Build the metrics for one run from its final capacities and telemetry.
pub fn extract_metrics(
    param_set: &ParameterSet,
    final_capacities: &[u64],
    telemetry: &SimTelemetry,
) -> SimulationResult {
    let final_capacity_sum = final_capacities
        .iter()
        .fold(0u64, |acc, &c| acc.saturating_add(c));
    let final_capacity_max = final_capacities.iter().copied().max().unwrap_or(0);

    SimulationResult {
        experiment_id: param_set.experiment_id.clone(),
        run_id: param_set.run_id,
        seed: param_set.seed,
        num_receivers: final_capacities.len(),
        num_pours: telemetry.pours_processed,
        total_poured: telemetry.total_poured,
        total_absorbed: telemetry.total_absorbed,
        absorption_rate: telemetry.absorption_rate(),
        exhausted_pours: telemetry.exhausted_pours,
        mean_receivers_visited: telemetry.mean_receivers_visited(),
        final_capacity_sum,
        final_capacity_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feast_core::scenario::ScenarioParams;
    use feast_core::simulator::Simulator;

    #[test]
    fn metrics_follow_telemetry_and_final_line() {
        let param_set = ParameterSet::new(ScenarioParams::default(), "exp_0".into(), 0, 1);
        let mut simulator = Simulator::new(vec![5, 5]);
        simulator.run(&[3, 10]).expect("run");
        let (capacities, telemetry) = simulator.into_parts();

        let result = extract_metrics(&param_set, &capacities, &telemetry);
        assert_eq!(result.num_receivers, 2);
        assert_eq!(result.num_pours, 2);
        assert_eq!(result.total_poured, 13);
        assert_eq!(result.total_absorbed, 11);
        assert_eq!(result.exhausted_pours, 1);
        assert_eq!(result.final_capacity_sum, 21);
        assert_eq!(result.final_capacity_max, 16);
        assert_eq!(result.mean_receivers_visited, 1.5);
    }
}
