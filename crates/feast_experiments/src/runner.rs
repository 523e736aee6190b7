//! Parallel execution of independent problems using rayon.
//!
//! Parallelism is across problems only. Each problem owns its receiver line
//! and applies its pours sequentially.

use feast_core::error::SimError;
use feast_core::simulator::Simulator;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::metrics::{extract_metrics, SimulationResult};
use crate::parameters::ParameterSet;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("run {experiment_id}/{run_id} failed: {source}")]
    Simulation {
        experiment_id: String,
        run_id: usize,
        #[source]
        source: SimError,
    },
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Generate the problem for one parameter set, run it and extract metrics.
pub fn run_single_simulation(
    param_set: &ParameterSet,
) -> Result<SimulationResult, ExperimentError> {
    let problem = param_set.scenario_params().generate();
    let mut simulator = Simulator::new(problem.capacities);
    simulator
        .run(&problem.pours)
        .map_err(|source| ExperimentError::Simulation {
            experiment_id: param_set.experiment_id.clone(),
            run_id: param_set.run_id,
            source,
        })?;
    let (capacities, telemetry) = simulator.into_parts();
    debug!(
        experiment_id = %param_set.experiment_id,
        run_id = param_set.run_id,
        total_absorbed = telemetry.total_absorbed,
        "run finished"
    );
    Ok(extract_metrics(param_set, &capacities, &telemetry))
}

/// Run every parameter set in parallel. Results keep the input order.
pub fn run_parallel_experiments(
    parameter_sets: &[ParameterSet],
    num_threads: Option<usize>,
) -> Result<Vec<SimulationResult>, ExperimentError> {
    run_parallel_experiments_with_progress(parameter_sets, num_threads, false)
}

/// Run every parameter set in parallel with an optional progress bar.
///
/// Stops at the first failing run and returns its error.
pub fn run_parallel_experiments_with_progress(
    parameter_sets: &[ParameterSet],
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<SimulationResult>, ExperimentError> {
    let total = parameter_sets.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;
    info!(
        runs = total,
        threads = pool.current_num_threads(),
        "starting sweep"
    );

    let results = pool.install(|| {
        parameter_sets
            .par_iter()
            .map(|param_set| {
                let result = run_single_simulation(param_set);
                if let Some(ref progress_bar) = pb {
                    progress_bar.inc(1);
                }
                result
            })
            .collect::<Result<Vec<_>, _>>()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }
    results
}
