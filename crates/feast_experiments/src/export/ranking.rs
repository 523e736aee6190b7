use super::RankMetric;
use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

fn score(result: &SimulationResult, metric: RankMetric) -> f64 {
    match metric {
        RankMetric::AbsorptionRate => result.absorption_rate,
        // Fewer receivers scanned per pour ranks higher.
        RankMetric::ScanEfficiency => -result.mean_receivers_visited,
        RankMetric::FinalCapacityMax => result.final_capacity_max as f64,
    }
}

pub(crate) fn find_best_index(results: &[SimulationResult], metric: RankMetric) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            score(a, metric)
                .partial_cmp(&score(b, metric))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(idx, _)| idx)
}

pub(crate) fn find_best_parameters_impl<'a>(
    results: &[SimulationResult],
    parameter_sets: &'a [ParameterSet],
    metric: RankMetric,
) -> Option<&'a ParameterSet> {
    if results.is_empty() || results.len() != parameter_sets.len() {
        return None;
    }

    let best_idx = find_best_index(results, metric)?;
    Some(&parameter_sets[best_idx])
}
