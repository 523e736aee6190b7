//! Parameter variation framework for exploring problem shapes.
//!
//! A [`ParameterSpace`] lists the values to try for each dimension; unset
//! dimensions fall back to the base [`ScenarioParams`]. [`ParameterSpace::generate`]
//! expands the grid (Cartesian product) into one [`ParameterSet`] per run.

use feast_core::scenario::ScenarioParams;

/// One point of the grid before it is turned into a parameter set.
#[derive(Debug, Clone, Copy)]
struct ParameterCombination {
    num_receivers: usize,
    num_pours: usize,
    max_capacity: u64,
    max_pour: u64,
}

/// A single generated problem to run.
#[derive(Debug, Clone)]
pub struct ParameterSet {
    /// Problem shape.
    pub params: ScenarioParams,
    /// Identifies the grid point; shared by every seed of that point.
    pub experiment_id: String,
    /// Run index within the experiment (one per seed).
    pub run_id: usize,
    /// Seed used to generate this run's problem.
    pub seed: u64,
}

impl ParameterSet {
    pub fn new(params: ScenarioParams, experiment_id: String, run_id: usize, seed: u64) -> Self {
        Self {
            params,
            experiment_id,
            run_id,
            seed,
        }
    }

    /// Get the scenario params with seed applied.
    pub fn scenario_params(&self) -> ScenarioParams {
        let mut params = self.params.clone();
        params.seed = Some(self.seed);
        params
    }
}

/// Defines a grid of problem shapes to explore.
#[derive(Debug, Clone, Default)]
pub struct ParameterSpace {
    base: ScenarioParams,
    num_receivers: Vec<usize>,
    num_pours: Vec<usize>,
    max_capacities: Vec<u64>,
    max_pours: Vec<u64>,
    seeds: Vec<u64>,
}

impl ParameterSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new parameter space for grid search.
    pub fn grid() -> Self {
        Self::new()
    }

    pub fn num_receivers(mut self, counts: Vec<usize>) -> Self {
        self.num_receivers = counts;
        self
    }

    pub fn num_pours(mut self, counts: Vec<usize>) -> Self {
        self.num_pours = counts;
        self
    }

    pub fn max_capacity(mut self, values: Vec<u64>) -> Self {
        self.max_capacities = values;
        self
    }

    pub fn max_pour(mut self, values: Vec<u64>) -> Self {
        self.max_pours = values;
        self
    }

    /// Seeds to run at every grid point. Without seeds each point gets one
    /// run with a seed derived from its experiment index.
    pub fn seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Set base parameters (used as defaults).
    pub fn with_base(mut self, base: ScenarioParams) -> Self {
        self.base = base;
        self
    }

    fn combinations(&self) -> Vec<ParameterCombination> {
        let receivers = or_default(&self.num_receivers, self.base.num_receivers);
        let pours = or_default(&self.num_pours, self.base.num_pours);
        let capacities = or_default(&self.max_capacities, self.base.max_capacity);
        let pour_sizes = or_default(&self.max_pours, self.base.max_pour);

        let mut combinations = Vec::new();
        for &num_receivers in &receivers {
            for &num_pours in &pours {
                for &max_capacity in &capacities {
                    for &max_pour in &pour_sizes {
                        combinations.push(ParameterCombination {
                            num_receivers,
                            num_pours,
                            max_capacity,
                            max_pour,
                        });
                    }
                }
            }
        }
        combinations
    }

    /// Generate all parameter sets using grid search (Cartesian product).
    pub fn generate(&self) -> Vec<ParameterSet> {
        self.combinations()
            .into_iter()
            .enumerate()
            .flat_map(|(experiment_idx, combo)| {
                let params = ScenarioParams {
                    num_receivers: combo.num_receivers,
                    num_pours: combo.num_pours,
                    max_capacity: combo.max_capacity,
                    max_pour: combo.max_pour,
                    seed: None,
                };
                let seeds = if self.seeds.is_empty() {
                    vec![(experiment_idx as u64).wrapping_mul(0x9e3779b9)]
                } else {
                    self.seeds.clone()
                };
                seeds.into_iter().enumerate().map(move |(run_id, seed)| {
                    ParameterSet::new(
                        params.clone(),
                        format!("exp_{experiment_idx}"),
                        run_id,
                        seed,
                    )
                })
            })
            .collect()
    }
}

fn or_default<T: Copy>(values: &[T], default: T) -> Vec<T> {
    if values.is_empty() {
        vec![default]
    } else {
        values.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_cartesian_product_times_seeds() {
        let sets = ParameterSpace::grid()
            .num_receivers(vec![10, 20])
            .num_pours(vec![5, 6, 7])
            .seeds(vec![1, 2])
            .generate();

        assert_eq!(sets.len(), 2 * 3 * 2);
        assert_eq!(sets[0].experiment_id, "exp_0");
        assert_eq!(sets[1].experiment_id, "exp_0");
        assert_eq!(sets[1].run_id, 1);
        assert_eq!(sets[1].seed, 2);
        assert_eq!(sets[11].experiment_id, "exp_5");
        assert_eq!(sets[11].params.num_receivers, 20);
        assert_eq!(sets[11].params.num_pours, 7);
    }

    #[test]
    fn unset_dimensions_use_base() {
        let base = ScenarioParams::default()
            .with_receivers(3)
            .with_pours(4)
            .with_max_capacity(9)
            .with_max_pour(8);
        let sets = ParameterSpace::grid().with_base(base).generate();

        assert_eq!(sets.len(), 1);
        let params = sets[0].scenario_params();
        assert_eq!(params.num_receivers, 3);
        assert_eq!(params.num_pours, 4);
        assert_eq!(params.max_capacity, 9);
        assert_eq!(params.max_pour, 8);
        assert_eq!(params.seed, Some(0));
    }

    #[test]
    fn derived_seeds_differ_between_experiments() {
        let sets = ParameterSpace::grid().num_pours(vec![1, 2]).generate();
        assert_ne!(sets[0].seed, sets[1].seed);
    }
}
