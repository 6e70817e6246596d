//! Round Robin.
//!
//! An explicit FIFO ready queue grants each dispatch at most one quantum.
//! Every dispatch yields its own interval, even when the same process runs
//! back to back, so the timeline reflects dispatch boundaries exactly.
//!
//! Ordering rule: processes that arrive during a dispatch enter the queue
//! before the dispatched process is re-enqueued. A process arriving while
//! another runs therefore gets the CPU ahead of that process's next turn.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::driver::{self, Slot};
use crate::error::SimulationError;
use crate::models::{color_for, Interval, Process, SimulationResult};

/// Simulates Round Robin with the given time quantum.
///
/// # Errors
/// - [`SimulationError::EmptyProcessSet`] when `processes` is empty.
/// - [`SimulationError::NonPositiveQuantum`] when `quantum <= 0`.
pub fn simulate(processes: &[Process], quantum: i64) -> Result<SimulationResult, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }
    if quantum <= 0 {
        return Err(SimulationError::NonPositiveQuantum(quantum));
    }
    debug!(count = processes.len(), quantum, "running round robin");

    let total = processes.len();
    let mut slots = driver::make_slots(processes);
    let mut queued = vec![false; total];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut timeline = Vec::new();
    let mut order = Vec::with_capacity(total);
    let mut clock: i64 = 0;

    admit_arrivals(&slots, &mut queue, &mut queued, clock, None);

    while order.len() < total {
        let index = match queue.pop_front() {
            Some(index) => index,
            None => {
                // Nothing ready: one idle tick, then re-check arrivals.
                clock += 1;
                admit_arrivals(&slots, &mut queue, &mut queued, clock, None);
                continue;
            }
        };
        queued[index] = false;

        let run = quantum.min(slots[index].remaining);
        let start = clock;
        clock += run;
        slots[index].remaining -= run;
        timeline.push(Interval::new(
            &slots[index].process.id,
            start,
            clock,
            color_for(index),
        ));
        trace!(process = %slots[index].process.id, start, end = clock, "dispatch");

        // Arrivals during this quantum queue ahead of the requeue below.
        admit_arrivals(&slots, &mut queue, &mut queued, clock, Some(index));

        if slots[index].remaining > 0 {
            queue.push_back(index);
            queued[index] = true;
        } else {
            slots[index].completion = Some(clock);
            order.push(index);
        }
    }

    driver::assemble(slots, &order, timeline)
}

/// Enqueues every pending process that has arrived by `clock`, in input
/// order, skipping slots already queued and the one just dispatched.
fn admit_arrivals(
    slots: &[Slot],
    queue: &mut VecDeque<usize>,
    queued: &mut [bool],
    clock: i64,
    running: Option<usize>,
) {
    for slot in slots {
        if queued[slot.index] || !slot.is_pending() || Some(slot.index) == running {
            continue;
        }
        if slot.process.arrival <= clock {
            queue.push_back(slot.index);
            queued[slot.index] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_set() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
            Process::new("P4", 3, 5),
        ]
    }

    fn bounds(result: &SimulationResult) -> Vec<(String, i64, i64)> {
        result
            .timeline
            .iter()
            .map(|iv| (iv.process_id.clone(), iv.start, iv.end))
            .collect()
    }

    #[test]
    fn test_reference_schedule_quantum_two() {
        let result = simulate(&reference_set(), 2).unwrap();
        let bounds = bounds(&result);

        assert_eq!(
            bounds[..3],
            [
                ("P1".to_string(), 0, 2),
                ("P2".to_string(), 2, 4),
                ("P3".to_string(), 4, 6),
            ]
        );

        // P4 arrives at t=3 during P2's quantum, so its first dispatch
        // lands ahead of P2's second turn.
        let p4_first = bounds.iter().position(|b| b.0 == "P4").unwrap();
        let p2_second = bounds.iter().enumerate().filter(|(_, b)| b.0 == "P2").nth(1).unwrap().0;
        assert!(p4_first < p2_second);

        let completions: Vec<(&str, i64)> = result
            .processes
            .iter()
            .map(|p| (p.id.as_str(), p.completion))
            .collect();
        assert_eq!(
            completions,
            vec![("P2", 12), ("P1", 22), ("P4", 23), ("P3", 26)]
        );

        let waits: Vec<i64> = result.processes.iter().map(|p| p.waiting).collect();
        assert_eq!(waits, vec![7, 14, 15, 15]);
    }

    #[test]
    fn test_arrival_queues_before_requeue() {
        // B arrives exactly when A's quantum expires: B must run next.
        let processes = vec![Process::new("A", 0, 4), Process::new("B", 2, 2)];
        let result = simulate(&processes, 2).unwrap();

        assert_eq!(
            bounds(&result),
            vec![
                ("A".to_string(), 0, 2),
                ("B".to_string(), 2, 4),
                ("A".to_string(), 4, 6),
            ]
        );
    }

    #[test]
    fn test_one_interval_per_dispatch() {
        // A lone process still yields one interval per quantum; adjacent
        // dispatches of the same process are not merged.
        let processes = vec![Process::new("P1", 0, 4)];
        let result = simulate(&processes, 2).unwrap();

        assert_eq!(
            bounds(&result),
            vec![("P1".to_string(), 0, 2), ("P1".to_string(), 2, 4)]
        );
    }

    #[test]
    fn test_final_dispatch_shorter_than_quantum() {
        let processes = vec![Process::new("P1", 0, 5)];
        let result = simulate(&processes, 3).unwrap();

        assert_eq!(
            bounds(&result),
            vec![("P1".to_string(), 0, 3), ("P1".to_string(), 3, 5)]
        );
        assert_eq!(result.process("P1").unwrap().completion, 5);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let processes = vec![Process::new("P1", 3, 2)];
        let result = simulate(&processes, 4).unwrap();

        assert_eq!(result.timeline[0].start, 3);
        assert_eq!(result.span(), 5);
        assert_eq!(result.metrics.cpu_utilization, 40.0);
    }

    #[test]
    fn test_first_dispatch_fairness_bound() {
        // Equal arrivals: process k first runs no later than k quanta in.
        let processes: Vec<Process> =
            (0..4).map(|i| Process::new(format!("P{i}"), 0, 10)).collect();
        let quantum = 3;
        let result = simulate(&processes, quantum).unwrap();

        for (position, process) in processes.iter().enumerate() {
            let first_start = result.intervals_for(&process.id)[0].start;
            assert!(first_start <= quantum * position as i64);
        }
    }

    #[test]
    fn test_quantum_must_be_positive() {
        let processes = vec![Process::new("P1", 0, 1)];
        assert_eq!(
            simulate(&processes, 0),
            Err(SimulationError::NonPositiveQuantum(0))
        );
        assert_eq!(
            simulate(&processes, -3),
            Err(SimulationError::NonPositiveQuantum(-3))
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(simulate(&[], 2), Err(SimulationError::EmptyProcessSet));
    }
}
