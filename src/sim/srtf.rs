//! Shortest Remaining Time First, the preemptive form of SJF.
//!
//! Selection is re-evaluated every tick over remaining time, so a newly
//! arrived process with less work preempts the running one at the next
//! tick boundary. Consecutive ticks of the same process coalesce into a
//! single interval.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::debug;

use super::driver::{self, ShortestRemaining};
use crate::error::SimulationError;
use crate::models::{Process, SimulationResult};

/// Simulates SRTF over the given processes.
///
/// # Errors
/// - [`SimulationError::EmptyProcessSet`] when `processes` is empty.
/// - [`SimulationError::HorizonExceeded`] if the run outlives its
///   defensive time ceiling (unreachable for valid input).
pub fn simulate(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }
    debug!(count = processes.len(), "running SRTF");

    let mut slots = driver::make_slots(processes);
    let (timeline, order) = driver::run_preemptive(&mut slots, &ShortestRemaining)?;
    driver::assemble(slots, &order, timeline)
}
