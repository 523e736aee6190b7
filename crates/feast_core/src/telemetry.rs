//! Telemetry: per-pour records for analysis and export.

use serde::{Deserialize, Serialize};

/// Result of distributing one pour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PourRecord {
    pub pour_index: usize,
    pub amount: u64,
    /// Sum of what every visited receiver took from this pour.
    pub absorbed: u64,
    pub receivers_visited: usize,
    /// True when the scan stopped because the pour ran out.
    pub exhausted: bool,
}

impl PourRecord {
    /// Amount of the pour no receiver could take.
    pub fn leftover(&self) -> u64 {
        self.amount.saturating_sub(self.absorbed)
    }
}

/// Collects pour records. Totals are kept even when records are not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTelemetry {
    pub pours: Vec<PourRecord>,
    pub pours_processed: usize,
    pub total_poured: u64,
    pub total_absorbed: u64,
    pub exhausted_pours: usize,
    pub receivers_visited: u64,
}

impl SimTelemetry {
    pub(crate) fn observe(&mut self, record: PourRecord, keep: bool) {
        self.pours_processed += 1;
        self.total_poured = self.total_poured.saturating_add(record.amount);
        self.total_absorbed = self.total_absorbed.saturating_add(record.absorbed);
        self.exhausted_pours += usize::from(record.exhausted);
        self.receivers_visited = self
            .receivers_visited
            .saturating_add(record.receivers_visited as u64);
        if keep {
            self.pours.push(record);
        }
    }

    /// Share of poured candy that ended up in a receiver; 0 when nothing was poured.
    pub fn absorption_rate(&self) -> f64 {
        if self.total_poured == 0 {
            return 0.0;
        }
        self.total_absorbed as f64 / self.total_poured as f64
    }

    pub fn mean_receivers_visited(&self) -> f64 {
        if self.pours_processed == 0 {
            return 0.0;
        }
        self.receivers_visited as f64 / self.pours_processed as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pour_index: usize, amount: u64, absorbed: u64, exhausted: bool) -> PourRecord {
        PourRecord {
            pour_index,
            amount,
            absorbed,
            receivers_visited: 2,
            exhausted,
        }
    }

    #[test]
    fn totals_accumulate_without_keeping_records() {
        let mut telemetry = SimTelemetry::default();
        telemetry.observe(record(0, 10, 4, false), false);
        telemetry.observe(record(1, 6, 6, true), false);

        assert!(telemetry.pours.is_empty());
        assert_eq!(telemetry.pours_processed, 2);
        assert_eq!(telemetry.total_poured, 16);
        assert_eq!(telemetry.total_absorbed, 10);
        assert_eq!(telemetry.exhausted_pours, 1);
        assert_eq!(telemetry.mean_receivers_visited(), 2.0);
        assert!((telemetry.absorption_rate() - 0.625).abs() < 1e-12);
    }

    #[test]
    fn empty_telemetry_reports_zero_rates() {
        let telemetry = SimTelemetry::default();
        assert_eq!(telemetry.absorption_rate(), 0.0);
        assert_eq!(telemetry.mean_receivers_visited(), 0.0);
        assert_eq!(record(0, 9, 4, false).leftover(), 5);
    }
}
