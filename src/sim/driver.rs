//! Shared simulation machinery.
//!
//! Every discipline except FCFS runs over the same skeleton: an owned
//! arena of per-run process slots, a selection policy that picks the next
//! eligible slot, and one of two generic drivers (run-to-completion or
//! tick-stepping with preemption). The drivers differ only in the policy
//! they are handed, which is what keeps SJF/Priority and SRTF/Priority
//! from duplicating control flow.

use tracing::{trace, warn};

use crate::error::SimulationError;
use crate::models::{
    color_for, CompletedProcess, Interval, Process, SimulationMetrics, SimulationResult,
    TimelineBuilder,
};

/// Ticks allowed past the exact worst case (latest arrival + total burst)
/// before a preemptive run is aborted. The bound is unreachable for valid
/// input; the guard catches invariant regressions instead of looping.
const HORIZON_SLACK: i64 = 1;

/// Per-run working state for one process.
///
/// Slots are addressed by stable input index; a slot is pending until its
/// completion tick is recorded.
pub(crate) struct Slot {
    /// Private copy of the input record.
    pub process: Process,
    /// Position in the caller's input, used for colors and tie-breaking.
    pub index: usize,
    /// Burst ticks still to execute.
    pub remaining: i64,
    /// Completion tick, once finished.
    pub completion: Option<i64>,
}

impl Slot {
    pub fn is_pending(&self) -> bool {
        self.completion.is_none()
    }
}

/// Copies the input into a fresh arena of slots.
pub(crate) fn make_slots(processes: &[Process]) -> Vec<Slot> {
    processes
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, process)| Slot {
            remaining: process.burst,
            completion: None,
            index,
            process,
        })
        .collect()
}

/// Selection policy for the generic drivers.
///
/// The eligible slot with the smallest key runs next; ties break by
/// earliest arrival, then input order.
pub(crate) trait SelectionKey {
    /// Policy name, for trace output.
    fn name(&self) -> &'static str;

    /// Evaluates a slot. Smaller = scheduled first.
    fn key(&self, slot: &Slot) -> i64;
}

/// Smallest total burst wins (SJF).
pub(crate) struct ShortestBurst;

impl SelectionKey for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, slot: &Slot) -> i64 {
        slot.process.burst
    }
}

/// Smallest remaining time wins (SRTF).
pub(crate) struct ShortestRemaining;

impl SelectionKey for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, slot: &Slot) -> i64 {
        slot.remaining
    }
}

/// Smallest priority value wins.
pub(crate) struct TopPriority;

impl SelectionKey for TopPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, slot: &Slot) -> i64 {
        // Priority presence is checked before the run starts.
        slot.process.priority.map(i64::from).unwrap_or(i64::MAX)
    }
}

/// Picks the best pending slot that has arrived by `clock`.
pub(crate) fn pick_eligible(slots: &[Slot], clock: i64, rule: &dyn SelectionKey) -> Option<usize> {
    slots
        .iter()
        .filter(|s| s.is_pending() && s.process.arrival <= clock)
        .min_by_key(|s| (rule.key(s), s.process.arrival, s.index))
        .map(|s| s.index)
}

/// Run-to-completion driver for the non-preemptive disciplines.
///
/// Each dispatch executes the selected process to its end in one interval.
/// When nothing has arrived, the clock jumps straight to the next arrival
/// rather than scanning tick by tick.
pub(crate) fn run_nonpreemptive(
    slots: &mut [Slot],
    rule: &dyn SelectionKey,
) -> (Vec<Interval>, Vec<usize>) {
    let total = slots.len();
    let mut clock: i64 = 0;
    let mut timeline = Vec::with_capacity(total);
    let mut order = Vec::with_capacity(total);

    while order.len() < total {
        let chosen = match pick_eligible(slots, clock, rule) {
            Some(index) => index,
            None => {
                let next_arrival = slots
                    .iter()
                    .filter(|s| s.is_pending())
                    .map(|s| s.process.arrival)
                    .min();
                match next_arrival {
                    Some(arrival) => {
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            }
        };

        let slot = &mut slots[chosen];
        let start = clock;
        let end = start + slot.remaining;
        trace!(rule = rule.name(), process = %slot.process.id, start, end, "dispatch");
        timeline.push(Interval::new(&slot.process.id, start, end, color_for(chosen)));
        slot.remaining = 0;
        slot.completion = Some(end);
        order.push(chosen);
        clock = end;
    }

    (timeline, order)
}

/// Tick-stepping driver for the preemptive disciplines.
///
/// Re-selects every tick, so a newly arrived process with a better key
/// preempts at the next tick boundary. Adjacent same-process ticks are
/// coalesced into one interval; idle ticks advance the clock without
/// producing one.
pub(crate) fn run_preemptive(
    slots: &mut [Slot],
    rule: &dyn SelectionKey,
) -> Result<(Vec<Interval>, Vec<usize>), SimulationError> {
    let total = slots.len();
    let latest_arrival = slots.iter().map(|s| s.process.arrival).max().unwrap_or(0);
    let total_burst: i64 = slots.iter().map(|s| s.process.burst).sum();
    let horizon = latest_arrival + total_burst + HORIZON_SLACK;

    let mut clock: i64 = 0;
    let mut builder = TimelineBuilder::new();
    let mut order = Vec::with_capacity(total);

    while order.len() < total {
        if clock > horizon {
            warn!(rule = rule.name(), horizon, "safety horizon exceeded with work pending");
            return Err(SimulationError::HorizonExceeded { horizon });
        }

        match pick_eligible(slots, clock, rule) {
            None => clock += 1,
            Some(index) => {
                let slot = &mut slots[index];
                builder.push_tick(&slot.process.id, color_for(index), clock);
                slot.remaining -= 1;
                clock += 1;
                if slot.remaining == 0 {
                    slot.completion = Some(clock);
                    order.push(index);
                    trace!(rule = rule.name(), process = %slot.process.id, completion = clock, "completed");
                }
            }
        }
    }

    Ok((builder.finish(), order))
}

/// Builds the immutable result from a finished arena.
///
/// `order` lists slot indices in completion order, which fixes the order
/// of the completed process set.
pub(crate) fn assemble(
    slots: Vec<Slot>,
    order: &[usize],
    timeline: Vec<Interval>,
) -> Result<SimulationResult, SimulationError> {
    let mut processes = Vec::with_capacity(order.len());
    for &index in order {
        let slot = &slots[index];
        if let Some(completion) = slot.completion {
            processes.push(CompletedProcess::from_run(&slot.process, completion));
        }
    }

    let metrics = SimulationMetrics::calculate(&timeline, &processes)?;
    Ok(SimulationResult {
        timeline,
        processes,
        metrics,
    })
}
