//! Output formats for finished runs.

use serde::{Deserialize, Serialize};

use crate::model::Problem;
use crate::telemetry::{PourRecord, SimTelemetry};

/// Final capacities in index order, separated by single spaces.
pub fn format_capacities(capacities: &[u64]) -> String {
    join(capacities)
}

/// Render a problem in the text layout accepted by [`crate::input::parse_problem`].
pub fn format_problem(problem: &Problem) -> String {
    format!(
        "{} {}\n{}\n{}\n",
        problem.num_receivers(),
        problem.num_pours(),
        join(&problem.capacities),
        join(&problem.pours)
    )
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Machine-readable summary of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub initial_capacities: Vec<u64>,
    pub final_capacities: Vec<u64>,
    pub total_poured: u64,
    pub total_absorbed: u64,
    pub exhausted_pours: usize,
    pub absorption_rate: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pours: Vec<PourRecord>,
}

impl SimulationReport {
    pub fn new(problem: &Problem, final_capacities: Vec<u64>, telemetry: &SimTelemetry) -> Self {
        Self {
            initial_capacities: problem.capacities.clone(),
            final_capacities,
            total_poured: telemetry.total_poured,
            total_absorbed: telemetry.total_absorbed,
            exhausted_pours: telemetry.exhausted_pours,
            absorption_rate: telemetry.absorption_rate(),
            pours: telemetry.pours.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_problem;

    #[test]
    fn capacities_are_space_separated() {
        assert_eq!(format_capacities(&[4, 7, 10]), "4 7 10");
        assert_eq!(format_capacities(&[]), "");
    }

    #[test]
    fn formatted_problem_parses_back() {
        let problem = Problem::new(vec![2, 5, 10], vec![4, 0]);
        let text = format_problem(&problem);
        assert_eq!(text, "3 2\n2 5 10\n4 0\n");
        assert_eq!(parse_problem(&text), Ok(problem));
    }

    #[test]
    fn report_omits_pours_when_not_recorded() {
        let problem = Problem::new(vec![1], vec![1]);
        let report = SimulationReport::new(&problem, vec![2], &SimTelemetry::default());
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(!json.contains("\"pours\""));
        assert!(json.contains("\"final_capacities\":[2]"));
    }
}
