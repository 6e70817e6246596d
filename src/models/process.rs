//! Process (input and completed) models.
//!
//! A `Process` is one unit of work competing for the CPU. The caller
//! supplies it once per run and it is never mutated; each simulator works
//! on its own copy. A `CompletedProcess` is the per-process outcome of a
//! finished run.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// Arrival and burst are integer ticks. Arrival must be ≥ 0 and burst > 0;
/// callers are expected to validate before simulating (see
/// [`crate::validation`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible for scheduling.
    pub arrival: i64,
    /// Total CPU time the process requires.
    pub burst: i64,
    /// Scheduling priority; lower value = higher priority.
    ///
    /// Only consulted by the Priority discipline, where it is required
    /// and must be positive.
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority (lower value = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Outcome for a single process after a completed run.
///
/// The derived fields satisfy `turnaround = completion - arrival` and
/// `waiting = turnaround - burst` exactly; both are non-negative for any
/// correctly computed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: String,
    /// Arrival tick, copied from the input.
    pub arrival: i64,
    /// Burst ticks, copied from the input.
    pub burst: i64,
    /// Priority, copied from the input.
    pub priority: Option<i32>,
    /// Tick at which the process finished.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`: ticks spent ready but not executing.
    pub waiting: i64,
}

impl CompletedProcess {
    /// Builds the completed record for a process that finished at `completion`.
    pub fn from_run(process: &Process, completion: i64) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            completion,
            turnaround,
            waiting: turnaround - process.burst,
        }
    }
}
