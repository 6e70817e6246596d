//! Error taxonomy for simulation runs.
//!
//! Precondition violations are rejected before any simulation work begins;
//! no partial result is ever returned. `HorizonExceeded` and `ZeroSpan`
//! are internal-invariant failures that should not occur for valid input
//! but are reported distinctly rather than surfaced as truncated or
//! NaN-filled results.

use thiserror::Error;

/// Reasons a simulation run is refused or aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The input process set is empty.
    #[error("process set is empty")]
    EmptyProcessSet,

    /// Round Robin was invoked with a quantum of zero or less.
    #[error("round robin quantum must be positive (got {0})")]
    NonPositiveQuantum(i64),

    /// Priority scheduling was requested for a process without a priority.
    #[error("process '{0}' has no priority value")]
    MissingPriority(String),

    /// Priority scheduling was requested with a non-positive priority value.
    #[error("process '{id}' has non-positive priority {priority}")]
    NonPositivePriority {
        /// Offending process identifier.
        id: String,
        /// The rejected priority value.
        priority: i32,
    },

    /// A preemptive simulation ran past its defensive time ceiling.
    ///
    /// For valid input the ceiling is unreachable; hitting it means a
    /// scheduling invariant was broken.
    #[error("simulation exceeded the safety horizon of {horizon} ticks")]
    HorizonExceeded {
        /// The ceiling that was exceeded, in ticks.
        horizon: i64,
    },

    /// The completed timeline has zero span, so metrics are undefined.
    #[error("timeline span is zero; metrics are undefined")]
    ZeroSpan,
}
