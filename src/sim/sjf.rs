//! Shortest Job First, non-preemptive.
//!
//! At every dispatch point, the arrived process with the smallest burst
//! runs to completion. Ties break by earliest arrival, then input order.
//! When nothing has arrived, the clock jumps to the next arrival instead
//! of scanning idle ticks.
//!
//! Provably optimal for average waiting time among non-preemptive
//! disciplines when all processes are available at once.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::debug;

use super::driver::{self, ShortestBurst};
use crate::error::SimulationError;
use crate::models::{Process, SimulationResult};

/// Simulates non-preemptive SJF over the given processes.
///
/// # Errors
/// [`SimulationError::EmptyProcessSet`] when `processes` is empty.
pub fn simulate(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }
    debug!(count = processes.len(), "running SJF");

    let mut slots = driver::make_slots(processes);
    let (timeline, order) = driver::run_nonpreemptive(&mut slots, &ShortestBurst);
    driver::assemble(slots, &order, timeline)
}
