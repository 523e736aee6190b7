//! Receivers (cows) and problems. A pour (candy) is just its `u64` amount.

use serde::{Deserialize, Serialize};

/// One receiver in the line. `index` never changes; `capacity` only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    pub index: usize,
    pub capacity: u64,
}

impl Receiver {
    pub fn new(index: usize, capacity: u64) -> Self {
        Self { index, capacity }
    }
}

/// A validated input pair: the initial capacities and the pour amounts in
/// the order they are distributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub capacities: Vec<u64>,
    pub pours: Vec<u64>,
}

impl Problem {
    pub fn new(capacities: Vec<u64>, pours: Vec<u64>) -> Self {
        Self { capacities, pours }
    }

    pub fn num_receivers(&self) -> usize {
        self.capacities.len()
    }

    pub fn num_pours(&self) -> usize {
        self.pours.len()
    }

    /// Build the receiver line in index order.
    pub fn receivers(&self) -> Vec<Receiver> {
        self.capacities
            .iter()
            .enumerate()
            .map(|(index, &capacity)| Receiver::new(index, capacity))
            .collect()
    }
}
