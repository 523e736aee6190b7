use std::io::Write;

use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

pub(crate) fn export_to_csv_impl(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
    out: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if results.len() != parameter_sets.len() {
        return Err(format!(
            "Results length ({}) doesn't match parameter_sets length ({})",
            results.len(),
            parameter_sets.len()
        )
        .into());
    }

    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record([
        "experiment_id",
        "run_id",
        "seed",
        "num_receivers",
        "num_pours",
        "max_capacity",
        "max_pour",
        "total_poured",
        "total_absorbed",
        "absorption_rate",
        "exhausted_pours",
        "mean_receivers_visited",
        "final_capacity_sum",
        "final_capacity_max",
    ])?;

    for (result, param_set) in results.iter().zip(parameter_sets.iter()) {
        wtr.write_record([
            result.experiment_id.clone(),
            result.run_id.to_string(),
            result.seed.to_string(),
            result.num_receivers.to_string(),
            result.num_pours.to_string(),
            param_set.params.max_capacity.to_string(),
            param_set.params.max_pour.to_string(),
            result.total_poured.to_string(),
            result.total_absorbed.to_string(),
            format!("{:.6}", result.absorption_rate),
            result.exhausted_pours.to_string(),
            format!("{:.3}", result.mean_receivers_visited),
            result.final_capacity_sum.to_string(),
            result.final_capacity_max.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
