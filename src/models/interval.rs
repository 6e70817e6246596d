//! Gantt interval model and tick coalescing.
//!
//! An `Interval` is one contiguous block of CPU ownership. A timeline is
//! an ordered sequence of intervals with non-decreasing start times; idle
//! CPU shows up as the gaps between them and is never materialized.
//!
//! `TimelineBuilder` folds the tick stream of a preemptive simulator into
//! intervals: each new tick either extends the currently open interval
//! (same process, no gap) or closes it and opens a new one.

use serde::{Deserialize, Serialize};

/// One contiguous block of CPU ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Owning process identifier.
    pub process_id: String,
    /// First tick of ownership (inclusive).
    pub start: i64,
    /// End of ownership (exclusive); always greater than `start`.
    pub end: i64,
    /// Display color for the timeline view.
    pub color: String,
}

impl Interval {
    /// Creates an interval.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64, color: &str) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
            color: color.to_string(),
        }
    }

    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Folds per-tick execution records into coalesced intervals.
///
/// State machine over the tick stream: the last pushed interval is the
/// open one. A tick for the same process starting exactly where the open
/// interval ends extends it; anything else opens a new interval.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    intervals: Vec<Interval>,
}

impl TimelineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `process_id` owned the CPU for the tick starting at `tick`.
    pub fn push_tick(&mut self, process_id: &str, color: &str, tick: i64) {
        if let Some(last) = self.intervals.last_mut() {
            if last.process_id == process_id && last.end == tick {
                last.end = tick + 1;
                return;
            }
        }
        self.intervals
            .push(Interval::new(process_id, tick, tick + 1, color));
    }

    /// Consumes the builder and returns the coalesced timeline.
    pub fn finish(self) -> Vec<Interval> {
        self.intervals
    }
}
