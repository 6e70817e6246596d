//! Scheduling domain models.
//!
//! Provides the data types shared by every simulator: input process
//! records, Gantt intervals, completed-process statistics, aggregate
//! metrics, and the immutable simulation result consumed by display and
//! export layers.
//!
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The consumer defines what one tick means (milliseconds, time units of
//! a classroom exercise, and so on).

mod interval;
mod metrics;
mod palette;
mod process;
mod result;

pub use interval::{Interval, TimelineBuilder};
pub use metrics::SimulationMetrics;
pub use palette::color_for;
pub use process::{CompletedProcess, Process};
pub use result::SimulationResult;
