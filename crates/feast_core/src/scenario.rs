//! Random problem generation for benchmarks, experiments and property checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::Problem;

/// Shape of a generated problem. Capacities are drawn uniformly from
/// `0..=max_capacity` and pours from `0..=max_pour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub num_receivers: usize,
    pub num_pours: usize,
    pub max_capacity: u64,
    pub max_pour: u64,
    /// Fixed seed for reproducible problems; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_receivers: 100,
            num_pours: 100,
            max_capacity: 1_000,
            max_pour: 1_000,
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_receivers(mut self, num_receivers: usize) -> Self {
        self.num_receivers = num_receivers;
        self
    }

    pub fn with_pours(mut self, num_pours: usize) -> Self {
        self.num_pours = num_pours;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn with_max_pour(mut self, max_pour: u64) -> Self {
        self.max_pour = max_pour;
        self
    }

    pub fn generate(&self) -> Problem {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let capacities = (0..self.num_receivers)
            .map(|_| rng.gen_range(0..=self.max_capacity))
            .collect();
        let pours = (0..self.num_pours)
            .map(|_| rng.gen_range(0..=self.max_pour))
            .collect();
        Problem::new(capacities, pours)
    }
}
