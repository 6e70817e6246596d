//! Aggregate performance metrics.
//!
//! Computes the four summary statistics from a completed timeline and
//! its per-process outcomes. Shared by all five disciplines.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(completion − arrival − burst) |
//! | Avg Turnaround Time | mean(completion − arrival) |
//! | CPU Utilization | total burst / span × 100 |
//! | Throughput | completed processes / span |
//!
//! Span is the maximum interval end time. A zero span (or an empty
//! process set) makes every metric undefined and is reported as
//! [`SimulationError::ZeroSpan`] rather than producing NaN.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::{CompletedProcess, Interval};
use crate::error::SimulationError;

/// The four aggregate performance metrics of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Mean waiting time across all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround_time: f64,
    /// Busy fraction of the timeline, as a percentage in (0, 100].
    pub cpu_utilization: f64,
    /// Completed processes per tick of timeline span.
    pub throughput: f64,
}

impl SimulationMetrics {
    /// Computes metrics from a completed timeline and process set.
    ///
    /// # Errors
    /// [`SimulationError::ZeroSpan`] when the process set is empty or the
    /// timeline has no extent. Guaranteed unreachable for runs produced
    /// from a non-empty validated input.
    pub fn calculate(
        timeline: &[Interval],
        processes: &[CompletedProcess],
    ) -> Result<Self, SimulationError> {
        let span = timeline.iter().map(|iv| iv.end).max().unwrap_or(0);
        if processes.is_empty() || span <= 0 {
            return Err(SimulationError::ZeroSpan);
        }

        let count = processes.len() as f64;
        let total_waiting: i64 = processes.iter().map(|p| p.waiting).sum();
        let total_turnaround: i64 = processes.iter().map(|p| p.turnaround).sum();
        let total_burst: i64 = processes.iter().map(|p| p.burst).sum();

        Ok(Self {
            avg_waiting_time: total_waiting as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            cpu_utilization: total_burst as f64 / span as f64 * 100.0,
            throughput: count / span as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{color_for, Process};

    fn completed(id: &str, arrival: i64, burst: i64, completion: i64) -> CompletedProcess {
        CompletedProcess::from_run(&Process::new(id, arrival, burst), completion)
    }

    fn interval(id: &str, start: i64, end: i64) -> Interval {
        Interval::new(id, start, end, color_for(0))
    }

    #[test]
    fn test_fcfs_reference_numbers() {
        // P1(0,8) P2(1,4) P3(2,9) P4(3,5) under FCFS.
        let timeline = vec![
            interval("P1", 0, 8),
            interval("P2", 8, 12),
            interval("P3", 12, 21),
            interval("P4", 21, 26),
        ];
        let processes = vec![
            completed("P1", 0, 8, 8),
            completed("P2", 1, 4, 12),
            completed("P3", 2, 9, 21),
            completed("P4", 3, 5, 26),
        ];

        let m = SimulationMetrics::calculate(&timeline, &processes).unwrap();
        assert_eq!(m.avg_waiting_time, 8.75);
        assert_eq!(m.avg_turnaround_time, 15.25);
        assert_eq!(m.cpu_utilization, 100.0);
        assert_eq!(m.throughput, 4.0 / 26.0);
    }

    #[test]
    fn test_utilization_below_100_with_idle_gap() {
        // One tick of idle between the two intervals.
        let timeline = vec![interval("P1", 0, 4), interval("P2", 5, 10)];
        let processes = vec![completed("P1", 0, 4, 4), completed("P2", 5, 5, 10)];

        let m = SimulationMetrics::calculate(&timeline, &processes).unwrap();
        assert_eq!(m.cpu_utilization, 90.0);
    }

    #[test]
    fn test_empty_process_set_is_rejected() {
        let timeline = vec![interval("P1", 0, 4)];
        assert_eq!(
            SimulationMetrics::calculate(&timeline, &[]),
            Err(SimulationError::ZeroSpan)
        );
    }

    #[test]
    fn test_empty_timeline_is_rejected() {
        let processes = vec![completed("P1", 0, 4, 4)];
        assert_eq!(
            SimulationMetrics::calculate(&[], &processes),
            Err(SimulationError::ZeroSpan)
        );
    }
}
