/*!
 * Simulation Results
 * Dispatch trace, completion times, and derived metrics for one run
 */

use crate::core::types::Ticks;
use crate::metrics::Metrics;
use crate::scheduler::Policy;
use serde::{Deserialize, Serialize};

/// One entry of the Gantt sequence
///
/// Consecutive events for the same process are legal: SRTF emits one per
/// tick and Round Robin may re-dispatch a lone process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEvent {
    pub process: String,
    pub start: Ticks,
    pub duration: Ticks,
}

impl DispatchEvent {
    pub fn new(process: impl Into<String>, start: Ticks, duration: Ticks) -> Self {
        Self {
            process: process.into(),
            start,
            duration,
        }
    }

    #[inline(always)]
    pub const fn end(&self) -> Ticks {
        self.start + self.duration
    }
}

/// Contiguous stretch of execution by one process, for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub process: String,
    pub start: Ticks,
    pub end: Ticks,
}

/// Outcome of one simulation call
///
/// `completion` and `metrics` are parallel to the caller's process order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub policy: Policy,
    pub gantt: Vec<DispatchEvent>,
    pub completion: Vec<Ticks>,
    pub metrics: Metrics,
}

impl SimulationResult {
    /// Completion time of the last process
    pub fn makespan(&self) -> Ticks {
        self.completion.iter().copied().max().unwrap_or(0)
    }

    /// Merge back-to-back events of the same process
    ///
    /// Events are only merged when the second starts exactly where the first
    /// ended, so idle gaps stay visible.
    pub fn slices(&self) -> Vec<Slice> {
        let mut slices: Vec<Slice> = Vec::new();
        for event in &self.gantt {
            match slices.last_mut() {
                Some(last) if last.process == event.process && last.end == event.start => {
                    last.end = event.end();
                }
                _ => slices.push(Slice {
                    process: event.process.clone(),
                    start: event.start,
                    end: event.end(),
                }),
            }
        }
        slices
    }

    /// Total ticks dispatched to `process`
    pub fn service_time(&self, process: &str) -> Ticks {
        self.gantt
            .iter()
            .filter(|e| e.process == process)
            .map(|e| e.duration)
            .sum()
    }

    /// Start of the first dispatch of `process`
    pub fn first_dispatch(&self, process: &str) -> Option<Ticks> {
        self.gantt
            .iter()
            .find(|e| e.process == process)
            .map(|e| e.start)
    }
}
