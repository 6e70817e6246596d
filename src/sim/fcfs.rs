//! First Come First Serve.
//!
//! Processes run in arrival order, each to completion. A process arriving
//! after the clock leaves an idle gap; nothing else can reorder execution,
//! so the whole schedule falls out of a single pass with no tick loop.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.1

use tracing::debug;

use crate::error::SimulationError;
use crate::models::{
    color_for, CompletedProcess, Interval, Process, SimulationMetrics, SimulationResult,
};

/// Simulates FCFS over the given processes.
///
/// # Errors
/// [`SimulationError::EmptyProcessSet`] when `processes` is empty.
pub fn simulate(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }
    debug!(count = processes.len(), "running FCFS");

    // Stable sort: equal arrivals keep input order.
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival);

    let mut clock: i64 = 0;
    let mut timeline = Vec::with_capacity(processes.len());
    let mut completed = Vec::with_capacity(processes.len());

    for &index in &indices {
        let process = &processes[index];
        let start = clock.max(process.arrival);
        let end = start + process.burst;
        timeline.push(Interval::new(&process.id, start, end, color_for(index)));
        completed.push(CompletedProcess::from_run(process, end));
        clock = end;
    }

    let metrics = SimulationMetrics::calculate(&timeline, &completed)?;
    Ok(SimulationResult {
        timeline,
        processes: completed,
        metrics,
    })
}
