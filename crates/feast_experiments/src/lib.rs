//! Parallel experimentation over independent candy-feast problems.
//!
//! Each parameter set describes one generated problem (line length, pour
//! count, value ranges and seed). Problems are independent, so they run in
//! parallel; inside one problem the pours are still applied strictly in order
//! by [`feast_core::Simulator`].
//!
//! # Quick Start
//!
//! ```no_run
//! use feast_experiments::{
//!     find_best_result_index, run_parallel_experiments, ParameterSpace, RankMetric,
//! };
//!
//! let space = ParameterSpace::grid()
//!     .num_receivers(vec![10, 100, 1_000])
//!     .num_pours(vec![100, 1_000])
//!     .seeds(vec![1, 2, 3]);
//!
//! let parameter_sets = space.generate();
//! let results = run_parallel_experiments(&parameter_sets, None).unwrap();
//! let best_idx = find_best_result_index(&results, RankMetric::AbsorptionRate).unwrap();
//! ```
//!
//! # Architecture
//!
//! - [`parameters`]: grid over problem shapes and seeds
//! - [`runner`]: parallel execution using rayon
//! - [`metrics`]: per-run metrics taken from simulator telemetry
//! - [`export`]: CSV/JSON export and ranking

pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;

pub use export::{
    export_to_csv, export_to_json, find_best_parameters, find_best_result_index, RankMetric,
};
pub use metrics::SimulationResult;
pub use parameters::{ParameterSet, ParameterSpace};
pub use runner::{run_parallel_experiments, ExperimentError};
