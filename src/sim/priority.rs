//! Priority scheduling, preemptive and non-preemptive.
//!
//! The smallest priority value wins; ties break by earliest arrival, then
//! input order. The non-preemptive mode shares the run-to-completion
//! driver with SJF, the preemptive mode shares the tick driver with SRTF;
//! only the selection key differs.
//!
//! Every process must carry a positive priority. That is checked up front
//! and rejected as a distinct error, never defaulted.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use tracing::debug;

use super::driver::{self, TopPriority};
use crate::error::SimulationError;
use crate::models::{Process, SimulationResult};

/// Simulates priority scheduling over the given processes.
///
/// # Errors
/// - [`SimulationError::EmptyProcessSet`] when `processes` is empty.
/// - [`SimulationError::MissingPriority`] when a process has no priority.
/// - [`SimulationError::NonPositivePriority`] when a priority is <= 0.
/// - [`SimulationError::HorizonExceeded`] if a preemptive run outlives its
///   defensive time ceiling (unreachable for valid input).
pub fn simulate(
    processes: &[Process],
    preemptive: bool,
) -> Result<SimulationResult, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }
    for process in processes {
        match process.priority {
            None => return Err(SimulationError::MissingPriority(process.id.clone())),
            Some(priority) if priority <= 0 => {
                return Err(SimulationError::NonPositivePriority {
                    id: process.id.clone(),
                    priority,
                })
            }
            Some(_) => {}
        }
    }
    debug!(count = processes.len(), preemptive, "running priority scheduling");

    let mut slots = driver::make_slots(processes);
    let (timeline, order) = if preemptive {
        driver::run_preemptive(&mut slots, &TopPriority)?
    } else {
        driver::run_nonpreemptive(&mut slots, &TopPriority)
    };
    driver::assemble(slots, &order, timeline)
}
