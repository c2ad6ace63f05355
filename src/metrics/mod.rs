/*!
 * Metrics Calculator
 * Turnaround and waiting time derivation shared by every policy
 */

use crate::core::types::Ticks;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Per-process turnaround and waiting times, parallel to the input order
///
/// Signed so that a completion earlier than `arrival + burst` shows up as a
/// negative value instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub turnaround: Vec<i64>,
    pub waiting: Vec<i64>,
}

/// `turnaround[i] = completion[i] - arrival[i]`, `waiting[i] = turnaround[i] - burst[i]`
///
/// `completion` must hold one entry per process, in the same order.
pub fn calculate_metrics(processes: &[Process], completion: &[Ticks]) -> Metrics {
    debug_assert_eq!(processes.len(), completion.len());

    let (turnaround, waiting) = processes
        .iter()
        .zip(completion)
        .map(|(process, &done)| {
            let tat = done as i64 - process.arrival as i64;
            (tat, tat - process.burst as i64)
        })
        .unzip();

    Metrics {
        turnaround,
        waiting,
    }
}

impl Metrics {
    pub fn len(&self) -> usize {
        self.turnaround.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turnaround.is_empty()
    }

    pub fn total_waiting(&self) -> i64 {
        self.waiting.iter().sum()
    }

    pub fn total_turnaround(&self) -> i64 {
        self.turnaround.iter().sum()
    }
}

/// Aggregate view of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub average_turnaround: f64,
    pub average_waiting: f64,
    pub total_waiting: i64,
    /// Time at which the last process completed
    pub makespan: Ticks,
    /// Ticks before `makespan` during which the processor had nothing to run
    pub idle_ticks: Ticks,
    /// Busy fraction of `[0, makespan)`
    pub utilization: f64,
}

impl MetricsSummary {
    pub fn new(processes: &[Process], completion: &[Ticks], metrics: &Metrics) -> Self {
        let count = metrics.len().max(1) as f64;
        let makespan = completion.iter().copied().max().unwrap_or(0);
        let busy: Ticks = processes.iter().map(|p| p.burst).sum();

        Self {
            average_turnaround: metrics.total_turnaround() as f64 / count,
            average_waiting: metrics.total_waiting() as f64 / count,
            total_waiting: metrics.total_waiting(),
            makespan,
            idle_ticks: makespan.saturating_sub(busy),
            utilization: if makespan == 0 {
                0.0
            } else {
                busy as f64 / makespan as f64
            },
        }
    }
}
