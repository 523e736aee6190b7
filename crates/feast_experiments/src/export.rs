//! Result export and analysis utilities.
//!
//! This module provides functions to export experiment results to CSV and JSON,
//! and to pick the best run by a chosen metric.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/ranking.rs"]
mod ranking;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Metric used to rank runs; higher scores win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankMetric {
    /// Largest share of poured candy absorbed.
    AbsorptionRate,
    /// Fewest receivers scanned per pour.
    ScanEfficiency,
    /// Tallest receiver at the end of the run.
    FinalCapacityMax,
}

/// Export simulation results to JSON format.
///
/// Writes one pretty-printed array of results. Missing parent directories
/// are created.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    results: &[SimulationResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::open_export(path)?;
    json::write_results(results, file)
}

/// Export simulation results with parameters to CSV format.
///
/// Parameters and results are paired by index.
///
/// # Errors
///
/// Fails on an empty result list, mismatched lengths, or any file or CSV
/// write error.
pub fn export_to_csv(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::open_export(path)?;
    csv::export_to_csv_impl(results, parameter_sets, file)
}

/// Find the parameter set whose run scores best on `metric`.
///
/// Returns `None` if inputs are empty or their lengths differ.
pub fn find_best_parameters<'a>(
    results: &[SimulationResult],
    parameter_sets: &'a [ParameterSet],
    metric: RankMetric,
) -> Option<&'a ParameterSet> {
    ranking::find_best_parameters_impl(results, parameter_sets, metric)
}

/// Index of the best result by `metric`, or `None` if results are empty.
pub fn find_best_result_index(results: &[SimulationResult], metric: RankMetric) -> Option<usize> {
    ranking::find_best_index(results, metric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feast_core::scenario::ScenarioParams;
    use tempfile::NamedTempFile;

    fn result(id: &str, absorption_rate: f64, mean_visited: f64, max: u64) -> SimulationResult {
        SimulationResult {
            experiment_id: id.to_string(),
            run_id: 0,
            seed: 1,
            num_receivers: 10,
            num_pours: 20,
            total_poured: 100,
            total_absorbed: (absorption_rate * 100.0) as u64,
            absorption_rate,
            exhausted_pours: 5,
            mean_receivers_visited: mean_visited,
            final_capacity_sum: 500,
            final_capacity_max: max,
        }
    }

    #[test]
    fn test_export_to_json() {
        let results = vec![result("exp_0", 0.5, 3.0, 40)];

        let file = NamedTempFile::new().unwrap();
        export_to_json(&results, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("absorption_rate"));
        let parsed: Vec<SimulationResult> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn test_export_creates_missing_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/runs/results.json");
        let results = vec![result("exp_0", 0.5, 3.0, 40)];

        export_to_json(&results, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("]\n"));
    }

    #[test]
    fn test_export_to_csv_rejects_empty_results() {
        let file = NamedTempFile::new().unwrap();
        let err = export_to_csv(&[], &[], file.path()).unwrap_err();
        assert!(err.to_string().contains("no runs"));
    }

    #[test]
    fn test_export_to_csv_rejects_mismatched_lengths() {
        let results = vec![result("exp_0", 0.5, 3.0, 40)];
        let file = NamedTempFile::new().unwrap();
        assert!(export_to_csv(&results, &[], file.path()).is_err());
    }

    #[test]
    fn test_find_best_result_index_per_metric() {
        let results = vec![
            result("exp_0", 0.9, 6.0, 10),
            result("exp_1", 0.4, 1.0, 30),
            result("exp_2", 0.6, 2.0, 80),
        ];

        let best = |metric| find_best_result_index(&results, metric);

        assert_eq!(best(RankMetric::AbsorptionRate), Some(0));
        assert_eq!(best(RankMetric::ScanEfficiency), Some(1));
        assert_eq!(best(RankMetric::FinalCapacityMax), Some(2));
        let metric = RankMetric::AbsorptionRate;
        assert_eq!(find_best_result_index(&[], metric), None);
    }

    #[test]
    fn test_find_best_parameters() {
        let results = vec![
            result("exp_0", 0.1, 1.0, 1),
            result("exp_1", 0.7, 1.0, 1),
        ];
        let sets = vec![
            ParameterSet::new(ScenarioParams::default(), "exp_0".into(), 0, 1),
            ParameterSet::new(ScenarioParams::default(), "exp_1".into(), 0, 2),
        ];
        let metric = RankMetric::AbsorptionRate;

        let best = find_best_parameters(&results, &sets, metric).expect("best");
        assert_eq!(best.experiment_id, "exp_1");
        assert!(find_best_parameters(&results, &sets[..1], metric).is_none());
    }
}
