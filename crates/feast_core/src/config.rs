//! Input limits and simulator switches.

use serde::{Deserialize, Serialize};

/// Default cap on the number of receivers or pours accepted from input.
pub const DEFAULT_MAX_ITEMS: usize = 200_000;
/// Default cap on any single capacity or pour amount.
pub const DEFAULT_MAX_VALUE: u64 = 1_000_000_000;

/// Bounds applied while parsing a problem. With the defaults, the largest
/// reachable capacity is `max_value * (max_pours + 1)`, well inside `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    pub max_receivers: usize,
    pub max_pours: usize,
    pub max_value: u64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_receivers: DEFAULT_MAX_ITEMS,
            max_pours: DEFAULT_MAX_ITEMS,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl InputLimits {
    pub fn with_max_receivers(mut self, max_receivers: usize) -> Self {
        self.max_receivers = max_receivers;
        self
    }

    pub fn with_max_pours(mut self, max_pours: usize) -> Self {
        self.max_pours = max_pours;
        self
    }

    pub fn with_max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value;
        self
    }
}

/// Simulator switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Keep one [`crate::telemetry::PourRecord`] per pour.
    pub record_pours: bool,
}

impl SimConfig {
    pub fn with_record_pours(mut self, record_pours: bool) -> Self {
        self.record_pours = record_pours;
        self
    }
}
