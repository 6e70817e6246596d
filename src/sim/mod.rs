//! The five scheduling simulators.
//!
//! Each discipline exposes one `simulate` operation; [`Discipline`] wraps
//! them behind a single selectable entry point. All runs share the same
//! contract: a private copy of the input, a complete run with no partial
//! results, and an immutable [`SimulationResult`].
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Parameter |
//! |------------|-----------|-----------|
//! | FCFS | no | none |
//! | SJF | no | none |
//! | SRTF | yes | none |
//! | Round Robin | at quantum boundaries | time quantum |
//! | Priority | either | preemption flag |

mod driver;
pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Process, SimulationResult};

/// A scheduling discipline and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discipline {
    /// First Come First Serve.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First, preemptive.
    Srtf,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Ticks granted per dispatch; must be positive.
        quantum: i64,
    },
    /// Priority scheduling; lower value = higher priority.
    Priority {
        /// Whether a better-priority arrival preempts the running process.
        preemptive: bool,
    },
}

impl Discipline {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Srtf => "SRTF",
            Discipline::RoundRobin { .. } => "RR",
            Discipline::Priority { preemptive: false } => "PRIORITY",
            Discipline::Priority { preemptive: true } => "PRIORITY-P",
        }
    }

    /// Runs this discipline over the given processes.
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        match *self {
            Discipline::Fcfs => fcfs::simulate(processes),
            Discipline::Sjf => sjf::simulate(processes),
            Discipline::Srtf => srtf::simulate(processes),
            Discipline::RoundRobin { quantum } => round_robin::simulate(processes, quantum),
            Discipline::Priority { preemptive } => priority::simulate(processes, preemptive),
        }
    }
}
