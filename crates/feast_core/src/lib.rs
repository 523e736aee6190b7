pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod scenario;
pub mod simulator;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use simulator::{simulate, Simulator};
