use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use feast_core::config::{InputLimits, SimConfig};
use feast_core::error::{InputError, SimError};
use feast_core::input::parse_problem_with_limits;
use feast_core::output::{format_capacities, format_problem, SimulationReport};
use feast_core::scenario::ScenarioParams;
use feast_core::simulator::Simulator;
use feast_experiments::runner::run_parallel_experiments_with_progress;
use feast_experiments::{
    export_to_csv, export_to_json, find_best_result_index, ExperimentError, ParameterSpace,
    RankMetric,
};
use thiserror::Error;
use tracing::info;

use crate::OutputFormat;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimError),
    #[error("{0}")]
    Experiment(#[from] ExperimentError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("export failed: {0}")]
    Export(String),
    #[error("unsupported export file '{0}'; use a .csv or .json extension")]
    UnsupportedExport(PathBuf),
}

pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub record_pours: bool,
    pub limits: InputLimits,
}

pub struct GenerateOptions {
    pub receivers: usize,
    pub pours: usize,
    pub max_capacity: u64,
    pub max_pour: u64,
    pub seed: Option<u64>,
}

pub struct SweepOptions {
    pub receivers: Vec<usize>,
    pub pours: Vec<usize>,
    pub max_capacity: Vec<u64>,
    pub max_pour: Vec<u64>,
    pub max_value: Option<u64>,
    pub seeds: Vec<u64>,
    pub threads: Option<usize>,
    pub output: Option<PathBuf>,
    pub rank_by: RankMetric,
    pub progress: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

pub fn run(options: RunOptions, out: &mut impl Write) -> Result<(), CliError> {
    let text = read_input(options.input.as_ref())?;
    run_text(&text, &options, out)
}

fn run_text(text: &str, options: &RunOptions, out: &mut impl Write) -> Result<(), CliError> {
    let problem = parse_problem_with_limits(text, &options.limits)?;
    info!(
        receivers = problem.num_receivers(),
        pours = problem.num_pours(),
        "problem loaded"
    );

    let config = SimConfig::default().with_record_pours(options.record_pours);
    let mut simulator = Simulator::from_problem(&problem, config);
    simulator.run(&problem.pours)?;
    let (capacities, telemetry) = simulator.into_parts();

    match options.format {
        OutputFormat::Text => writeln!(out, "{}", format_capacities(&capacities))?,
        OutputFormat::Json => {
            let report = SimulationReport::new(&problem, capacities, &telemetry);
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn generate(options: GenerateOptions, out: &mut impl Write) -> Result<(), CliError> {
    let mut params = ScenarioParams::default()
        .with_receivers(options.receivers)
        .with_pours(options.pours)
        .with_max_capacity(options.max_capacity)
        .with_max_pour(options.max_pour);
    if let Some(seed) = options.seed {
        params = params.with_seed(seed);
    }
    write!(out, "{}", format_problem(&params.generate()))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
}

fn export_format(path: &Path) -> Result<ExportFormat, CliError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(ExportFormat::Csv),
        Some("json") => Ok(ExportFormat::Json),
        _ => Err(CliError::UnsupportedExport(path.to_path_buf())),
    }
}

/// Clamp every entry to `limit`, dropping duplicates the clamp creates.
fn cap_values(values: Vec<u64>, limit: Option<u64>) -> Vec<u64> {
    let Some(limit) = limit else {
        return values;
    };
    let mut capped = Vec::with_capacity(values.len());
    for value in values.into_iter().map(|value| value.min(limit)) {
        if !capped.contains(&value) {
            capped.push(value);
        }
    }
    capped
}

pub fn sweep(options: SweepOptions, out: &mut impl Write) -> Result<(), CliError> {
    let max_capacity = cap_values(options.max_capacity, options.max_value);
    let max_pour = cap_values(options.max_pour, options.max_value);
    let parameter_sets = ParameterSpace::grid()
        .num_receivers(options.receivers)
        .num_pours(options.pours)
        .max_capacity(max_capacity)
        .max_pour(max_pour)
        .seeds(options.seeds)
        .generate();

    let export = match &options.output {
        Some(path) => Some((path, export_format(path)?)),
        None => None,
    };

    let results =
        run_parallel_experiments_with_progress(&parameter_sets, options.threads, options.progress)?;

    if let Some((path, format)) = export {
        let exported = match format {
            ExportFormat::Csv => export_to_csv(&results, &parameter_sets, path),
            ExportFormat::Json => export_to_json(&results, path),
        };
        exported.map_err(|err| CliError::Export(err.to_string()))?;
        info!(path = %path.display(), "results exported");
    }

    writeln!(out, "runs: {}", results.len())?;
    if let Some(best_idx) = find_best_result_index(&results, options.rank_by) {
        let best = &results[best_idx];
        let params = &parameter_sets[best_idx].params;
        writeln!(
            out,
            "best ({:?}): {} run {} seed {} receivers={} pours={} absorption_rate={:.4} mean_visited={:.2} max_height={}",
            options.rank_by,
            best.experiment_id,
            best.run_id,
            best.seed,
            params.num_receivers,
            params.num_pours,
            best.absorption_rate,
            best.mean_receivers_visited,
            best.final_capacity_max
        )?;
    }
    Ok(())
}
