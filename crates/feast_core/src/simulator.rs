//! Distribution simulator: pours candies over the line of cows.
//!
//! Each pour is resolved completely before the next one starts. Within a pour,
//! receivers are visited from index 0 upward; a receiver may take candy up to
//! its capacity as it stood before this pour, minus what earlier receivers
//! already took (`base`). The scan stops as soon as the pour is used up.

use tracing::{debug, trace};

use crate::config::SimConfig;
use crate::error::SimError;
use crate::model::{Problem, Receiver};
use crate::telemetry::{PourRecord, SimTelemetry};

/// Owns the receiver line for the whole run and applies pours to it in order.
#[derive(Debug, Clone)]
pub struct Simulator {
    receivers: Vec<Receiver>,
    config: SimConfig,
    telemetry: SimTelemetry,
}

impl Simulator {
    pub fn new(capacities: Vec<u64>) -> Self {
        Self::with_config(capacities, SimConfig::default())
    }

    pub fn with_config(capacities: Vec<u64>, config: SimConfig) -> Self {
        let receivers = capacities
            .into_iter()
            .enumerate()
            .map(|(index, capacity)| Receiver::new(index, capacity))
            .collect();
        Self::from_receivers(receivers, config)
    }

    pub fn from_problem(problem: &Problem, config: SimConfig) -> Self {
        Self::from_receivers(problem.receivers(), config)
    }

    fn from_receivers(receivers: Vec<Receiver>, config: SimConfig) -> Self {
        Self {
            receivers,
            config,
            telemetry: SimTelemetry::default(),
        }
    }

    pub fn receivers(&self) -> &[Receiver] {
        &self.receivers
    }

    pub fn capacities(&self) -> Vec<u64> {
        self.receivers.iter().map(|r| r.capacity).collect()
    }

    pub fn into_capacities(self) -> Vec<u64> {
        self.receivers.into_iter().map(|r| r.capacity).collect()
    }

    pub fn telemetry(&self) -> &SimTelemetry {
        &self.telemetry
    }

    pub fn into_parts(self) -> (Vec<u64>, SimTelemetry) {
        let telemetry = self.telemetry;
        let capacities = self.receivers.into_iter().map(|r| r.capacity).collect();
        (capacities, telemetry)
    }

    /// Distribute one pour over the line.
    ///
    /// On overflow the failing receiver is left untouched, but receivers
    /// earlier in the line keep what they took from this pour. Callers that
    /// need all-or-nothing results should discard the simulator on error, as
    /// [`simulate`] does.
    pub fn apply_pour(&mut self, amount: u64) -> Result<PourRecord, SimError> {
        let pour_index = self.telemetry.pours_processed;

        let mut base = 0u64;
        let mut receivers_visited = 0usize;
        let mut exhausted = false;

        for receiver in self.receivers.iter_mut() {
            receivers_visited += 1;
            let reach = receiver.capacity;
            let eat = reach.min(amount).saturating_sub(base);
            let grown = reach.checked_add(eat).ok_or(SimError::CapacityOverflow {
                receiver: receiver.index,
                capacity: reach,
                eat,
            })?;
            receiver.capacity = grown;
            // eat <= amount - base, so base never passes amount.
            base += eat;
            if base >= amount {
                exhausted = true;
                break;
            }
        }

        let record = PourRecord {
            pour_index,
            amount,
            absorbed: base,
            receivers_visited,
            exhausted,
        };
        trace!(
            pour_index,
            amount,
            absorbed = base,
            receivers_visited,
            exhausted,
            "pour distributed"
        );
        self.telemetry.observe(record, self.config.record_pours);
        Ok(record)
    }

    /// Apply every pour in order. Stops at the first error.
    pub fn run(&mut self, pours: &[u64]) -> Result<(), SimError> {
        debug!(
            receivers = self.receivers.len(),
            pours = pours.len(),
            "starting distribution run"
        );
        for &amount in pours {
            self.apply_pour(amount)?;
        }
        debug!(
            total_poured = self.telemetry.total_poured,
            total_absorbed = self.telemetry.total_absorbed,
            exhausted_pours = self.telemetry.exhausted_pours,
            "distribution run finished"
        );
        Ok(())
    }
}

/// Run every pour over the given capacities and return the final capacities.
pub fn simulate(capacities: Vec<u64>, pours: &[u64]) -> Result<Vec<u64>, SimError> {
    let mut simulator = Simulator::new(capacities);
    simulator.run(pours)?;
    Ok(simulator.into_capacities())
}
