//! Simulation result model.
//!
//! The sole artifact a simulator exposes: the coalesced timeline, the
//! completed process set, and the aggregate metrics. Produced once per
//! run and treated as a value thereafter — the display layer replays it
//! against a virtual clock, the export layer serializes it, and neither
//! re-enters the simulators.

use serde::{Deserialize, Serialize};

use super::{CompletedProcess, Interval, SimulationMetrics};

/// Outcome of one completed simulation run.
///
/// The timeline is ordered by start time with no overlap between busy
/// intervals; `processes` is ordered by completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Ordered CPU-ownership intervals.
    pub timeline: Vec<Interval>,
    /// Per-process outcomes, in completion order.
    pub processes: Vec<CompletedProcess>,
    /// The four aggregate metrics.
    pub metrics: SimulationMetrics,
}

impl SimulationResult {
    /// Total extent of the run: the latest interval end time.
    pub fn span(&self) -> i64 {
        self.timeline.iter().map(|iv| iv.end).max().unwrap_or(0)
    }

    /// Ticks during which some process held the CPU.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(Interval::duration).sum()
    }

    /// Ticks during which the CPU sat idle.
    pub fn idle_time(&self) -> i64 {
        self.span() - self.busy_time()
    }

    /// All intervals belonging to one process, in execution order.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&Interval> {
        self.timeline
            .iter()
            .filter(|iv| iv.process_id == process_id)
            .collect()
    }

    /// The completed record for one process.
    pub fn process(&self, process_id: &str) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.id == process_id)
    }
}
